use serde::{Deserialize, Serialize};

/// Operational status of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Active,
    Delayed,
    Maintenance,
}

impl RouteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RouteStatus::Active => "active",
            RouteStatus::Delayed => "delayed",
            RouteStatus::Maintenance => "maintenance",
        }
    }
}

/// A bus route with its headline metrics. Mock data, loaded once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusRoute {
    pub id: String,
    pub name: String,
    /// Hex color used when rendering the route.
    pub color: String,
    pub stops: u32,
    /// Scheduled headway in minutes.
    pub frequency: u32,
    pub status: RouteStatus,
    /// Buses currently assigned to the route.
    pub buses: u32,
    pub avg_speed: u32,
    /// 0..=100.
    pub reliability: u32,
}

/// A predicted arrival at a stop, with a confidence percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arrival {
    pub route: String,
    pub eta: u32,
    pub confidence: u32,
}

/// Per-stop arrival schedule shown in the routes panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopSchedule {
    pub id: String,
    pub name: String,
    pub order: u32,
    pub arrivals: Vec<Arrival>,
}

pub fn create_routes() -> Vec<BusRoute> {
    vec![
        BusRoute {
            id: "route-42".to_string(),
            name: "Line 42 - Downtown Express".to_string(),
            color: "#3B82F6".to_string(),
            stops: 18,
            frequency: 8,
            status: RouteStatus::Active,
            buses: 6,
            avg_speed: 22,
            reliability: 94,
        },
        BusRoute {
            id: "route-15".to_string(),
            name: "Line 15 - University Loop".to_string(),
            color: "#10B981".to_string(),
            stops: 24,
            frequency: 12,
            status: RouteStatus::Active,
            buses: 4,
            avg_speed: 18,
            reliability: 89,
        },
        BusRoute {
            id: "route-8".to_string(),
            name: "Line 8 - Airport Connector".to_string(),
            color: "#F59E0B".to_string(),
            stops: 14,
            frequency: 15,
            status: RouteStatus::Delayed,
            buses: 3,
            avg_speed: 25,
            reliability: 78,
        },
    ]
}

pub fn create_stop_schedules() -> Vec<StopSchedule> {
    vec![
        StopSchedule {
            id: "stop-central".to_string(),
            name: "Central Station".to_string(),
            order: 1,
            arrivals: vec![
                Arrival {
                    route: "Line 42".to_string(),
                    eta: 3,
                    confidence: 95,
                },
                Arrival {
                    route: "Line 15".to_string(),
                    eta: 7,
                    confidence: 88,
                },
                Arrival {
                    route: "Line 8".to_string(),
                    eta: 12,
                    confidence: 72,
                },
            ],
        },
        StopSchedule {
            id: "stop-university".to_string(),
            name: "University Campus".to_string(),
            order: 8,
            arrivals: vec![
                Arrival {
                    route: "Line 15".to_string(),
                    eta: 2,
                    confidence: 92,
                },
                Arrival {
                    route: "Line 42".to_string(),
                    eta: 15,
                    confidence: 85,
                },
            ],
        },
    ]
}

/// Case-insensitive substring search over route names.
pub fn search_routes<'a>(routes: &'a [BusRoute], term: &str) -> Vec<&'a BusRoute> {
    let needle = term.to_lowercase();
    routes
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn total_assigned_buses(routes: &[BusRoute]) -> u32 {
    routes.iter().map(|r| r.buses).sum()
}

/// Mean reliability across routes, rounded to the nearest percent.
pub fn average_reliability(routes: &[BusRoute]) -> u32 {
    if routes.is_empty() {
        return 0;
    }
    let sum: u32 = routes.iter().map(|r| r.reliability).sum();
    (sum as f64 / routes.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive() {
        let routes = create_routes();
        let hits = search_routes(&routes, "downtown");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "route-42");
    }

    #[test]
    fn search_with_empty_term_matches_everything() {
        let routes = create_routes();
        assert_eq!(search_routes(&routes, "").len(), routes.len());
    }

    #[test]
    fn analytics_aggregates() {
        let routes = create_routes();
        assert_eq!(total_assigned_buses(&routes), 13);
        // (94 + 89 + 78) / 3 = 87
        assert_eq!(average_reliability(&routes), 87);
        assert_eq!(average_reliability(&[]), 0);
    }
}

use serde::{Deserialize, Serialize};

/// A bus stop. Static for the session; the simulator never touches these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Route labels serving this stop.
    pub routes: Vec<String>,
}

pub fn create_stops() -> Vec<Stop> {
    vec![
        Stop {
            id: "stop-001".to_string(),
            name: "Central Station".to_string(),
            lat: 40.7128,
            lng: -74.0060,
            routes: vec![
                "Line 42".to_string(),
                "Line 15".to_string(),
                "Line 8".to_string(),
            ],
        },
        Stop {
            id: "stop-002".to_string(),
            name: "Park Avenue".to_string(),
            lat: 40.7589,
            lng: -73.9851,
            routes: vec!["Line 15".to_string(), "Line 22".to_string()],
        },
    ]
}

use serde::{Deserialize, Serialize};

/// How much of a vehicle's telemetry is aggregated before leaving the device.
/// Display-only; the simulation never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    High,
    Medium,
    Low,
}

impl PrivacyLevel {
    pub fn label(&self) -> &'static str {
        match self {
            PrivacyLevel::High => "high",
            PrivacyLevel::Medium => "medium",
            PrivacyLevel::Low => "low",
        }
    }
}

/// A simulated bus. Kinematic fields (lat, lng, speed, eta) are the only ones
/// the simulator mutates; everything else is stable for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bus {
    pub id: String,
    pub route: String,
    pub lat: f64,
    pub lng: f64,
    /// km/h, never negative.
    pub speed: f64,
    /// Seated + standing capacity. Informational only.
    pub capacity: u32,
    pub next_stop: String,
    /// Minutes to the next stop, floored at 1 after any tick.
    pub eta: f64,
    pub privacy_level: PrivacyLevel,
}

/// The fixed seed fleet the simulation starts from. No buses are added or
/// removed for the lifetime of a session.
pub fn seed_fleet() -> Vec<Bus> {
    vec![
        Bus {
            id: "bus-001".to_string(),
            route: "Line 42".to_string(),
            lat: 40.7128,
            lng: -74.0060,
            speed: 25.0,
            capacity: 65,
            next_stop: "Central Station".to_string(),
            eta: 3.0,
            privacy_level: PrivacyLevel::High,
        },
        Bus {
            id: "bus-002".to_string(),
            route: "Line 15".to_string(),
            lat: 40.7589,
            lng: -73.9851,
            speed: 18.0,
            capacity: 42,
            next_stop: "Park Avenue".to_string(),
            eta: 7.0,
            privacy_level: PrivacyLevel::High,
        },
    ]
}

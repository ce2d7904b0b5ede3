// src/shared_data.rs

use crate::simulation_engine::vehicles::Bus;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A complete fleet snapshot published after every simulation tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetUpdate {
    pub vehicles: Vec<Bus>,
    pub timestamp: u64,
}

/// Seconds since the UNIX epoch.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// Fixed names and tuning constants shared across the app.

/// JSON key-value file standing in for the browser-local store.
pub const LOCAL_STORE_PATH: &str = "local_store.json";
/// Entry name for the map provider credential inside the local store.
pub const MAPS_API_KEY_ENTRY: &str = "maps_api_key";
/// Environment fallback, read when the local store has no entry.
pub const MAPS_API_KEY_ENV: &str = "PRIVACY_TRANSIT_MAPS_API_KEY";

// Simulation cadence and perturbation bounds.
pub const TICK_INTERVAL_MS: u64 = 3000;
pub const POSITION_JITTER_DEG: f64 = 0.0005;
pub const SPEED_JITTER_KMH: f64 = 2.5;
pub const ETA_JITTER_MIN: f64 = 1.0;
pub const MIN_SPEED_KMH: f64 = 0.0;
pub const MIN_ETA_MIN: f64 = 1.0;

// Default camera for the bus map.
pub const MAP_CENTER: (f64, f64) = (40.7128, -74.0060);
pub const MAP_ZOOM: u8 = 13;

// Emergency reporting.
pub const EMERGENCY_LOG_PATH: &str = "emergency_reports.csv";
pub const SUBMIT_DELAY_MS: u64 = 2000;
pub const CONFIRMATION_RESET_MS: u64 = 5000;

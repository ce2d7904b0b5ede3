// fleet_feed_main.rs
//
// Headless fleet feed: runs the position simulator on the standard cadence
// and prints one JSON snapshot per tick. An optional numeric argument seeds
// the RNG for a reproducible walk.

use privacy_transit::global_variables::TICK_INTERVAL_MS;
use privacy_transit::simulation_engine::simulator::FleetSimulator;
use privacy_transit::simulation_engine::vehicles::seed_fleet;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::time::Duration;

#[tokio::main]
async fn main() {
    env_logger::init();

    let rng = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => {
            log::info!("seeding fleet feed with {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        Some(Err(_)) => {
            eprintln!("Usage: fleet_feed_main [seed]");
            std::process::exit(1);
        }
        None => SmallRng::from_os_rng(),
    };

    let simulator = FleetSimulator::new(seed_fleet());
    let mut handle = simulator.start(Duration::from_millis(TICK_INTERVAL_MS), rng);

    while let Some(update) = handle.changed().await {
        match serde_json::to_string(&update) {
            Ok(payload) => println!("{}", payload),
            Err(e) => eprintln!("Error serializing update: {}", e),
        }
    }
}

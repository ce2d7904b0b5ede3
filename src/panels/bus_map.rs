// Live map panel: owns the simulator for its lifetime and lays markers over
// the provider surface. Falls back to credential entry when the map cannot
// load.

use crate::global_variables::{MAP_CENTER, MAP_ZOOM, TICK_INTERVAL_MS};
use crate::map_renderer::credentials::CredentialStore;
use crate::map_renderer::markers::MarkerLayer;
use crate::map_renderer::provider::{
    MapCamera, MapLoadStatus, MapProvider, MapSurface, OfflineTileProvider,
};
use crate::simulation_engine::simulator::FleetSimulator;
use crate::simulation_engine::stops::create_stops;
use crate::simulation_engine::vehicles::seed_fleet;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::error::Error;
use std::io::{stdin, stdout, Write};
use tokio::time::Duration;

/// State of the map view proper: the load status switch plus the credential
/// fallback path. Kept separate from the interactive loop so the reload
/// contract is testable.
#[derive(Debug)]
pub struct MapView {
    store: CredentialStore,
    status: MapLoadStatus,
    reloads: u32,
}

impl MapView {
    pub fn new(store: CredentialStore) -> Self {
        Self {
            store,
            status: MapLoadStatus::Loading,
            reloads: 0,
        }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn status(&self) -> &MapLoadStatus {
        &self.status
    }

    /// Full view reloads triggered by credential submission.
    pub fn reloads(&self) -> u32 {
        self.reloads
    }

    /// Asks the provider for a surface. No credential at all short-circuits to
    /// the same failure state a rejected credential produces.
    pub fn mount<P: MapProvider>(&mut self, provider: &P, api_key: Option<&str>, camera: MapCamera) {
        self.status = match api_key {
            None => MapLoadStatus::Failure("no API key configured".to_string()),
            Some(key) => provider.load(key, camera),
        };
    }

    /// Credential fallback submission. A blank entry is a no-op (the submit
    /// affordance is disabled in that state); a real one is written to the
    /// local store exactly once and triggers exactly one reload.
    pub fn submit_api_key(&mut self, entered: &str) -> Result<bool, Box<dyn Error>> {
        let entered = entered.trim();
        if entered.is_empty() {
            return Ok(false);
        }
        self.store.write(entered)?;
        self.reloads += 1;
        Ok(true)
    }
}

/// Interactive map panel. Constructed fresh on every tab switch; nothing here
/// survives leaving the tab.
pub async fn run() {
    let camera = MapCamera {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
    };
    let provider = OfflineTileProvider;
    let mut view = MapView::new(CredentialStore::open_default());

    loop {
        let api_key = view.store().resolve();
        view.mount(&provider, api_key.as_deref(), camera);
        match view.status().clone() {
            MapLoadStatus::Loading => {
                println!("Loading map...");
            }
            MapLoadStatus::Failure(reason) => {
                eprintln!("Map failed to load: {}", reason);
                println!("Enter your map provider API key to enable live bus tracking.");
                print!("API key (blank to cancel): ");
                stdout().flush().unwrap();
                let mut entered = String::new();
                stdin().read_line(&mut entered).unwrap();
                match view.submit_api_key(&entered) {
                    Ok(true) => {
                        println!("Key saved. Reloading map view...");
                        continue;
                    }
                    Ok(false) => {
                        println!("No key entered.");
                        return;
                    }
                    Err(e) => {
                        eprintln!("Error saving API key: {}", e);
                        return;
                    }
                }
            }
            MapLoadStatus::Ready(surface) => {
                live_map_loop(surface).await;
                return;
            }
        }
    }
}

async fn live_map_loop(surface: MapSurface) {
    let simulator = FleetSimulator::new(seed_fleet());
    let handle = simulator.start(
        Duration::from_millis(TICK_INTERVAL_MS),
        SmallRng::from_os_rng(),
    );
    let mut layer = MarkerLayer::new(surface);
    let stops = create_stops();

    loop {
        println!("\nLive Bus Map");
        println!("1. Refresh map");
        println!("2. Bus details");
        println!("3. Back");
        print!("Enter your choice: ");
        stdout().flush().unwrap();
        let mut input = String::new();
        stdin().read_line(&mut input).unwrap();
        let choice = input.trim().parse::<u32>().unwrap_or(0);
        match choice {
            1 => {
                let update = handle.latest();
                layer.sync(&update.vehicles);
                println!("\nLive Buses ({} markers)", layer.markers().len());
                for bus in &update.vehicles {
                    println!(
                        "  {} [{}] -> {} | ETA {}m | {} km/h",
                        bus.route,
                        bus.privacy_level.label(),
                        bus.next_stop,
                        bus.eta.round() as i64,
                        bus.speed.round() as i64
                    );
                }
                println!("\nNearby Stops");
                for stop in &stops {
                    println!("  {} (routes: {})", stop.name, stop.routes.join(", "));
                    println!("    Next arrivals: 3m, 7m, 12m");
                }
            }
            2 => {
                print!("Enter bus id (e.g. bus-001): ");
                stdout().flush().unwrap();
                let mut id_input = String::new();
                stdin().read_line(&mut id_input).unwrap();
                let update = handle.latest();
                layer.sync(&update.vehicles);
                match layer.click(id_input.trim()) {
                    Some(popup) => println!("{}", popup),
                    None => println!("No bus with that id on the map."),
                }
            }
            3 => break,
            _ => println!("Invalid choice. Try again."),
        }
    }

    // Dropping the handle cancels the tick loop with the panel.
    handle.stop();
}

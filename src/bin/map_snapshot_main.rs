// map_snapshot_main.rs
//
// One-shot renderer: loads the map surface, applies a single seeded tick to
// the seed fleet, and draws the marker set to fleet_snapshot.png.

use privacy_transit::global_variables::{MAP_CENTER, MAP_ZOOM};
use privacy_transit::map_renderer::credentials::CredentialStore;
use privacy_transit::map_renderer::markers::MarkerLayer;
use privacy_transit::map_renderer::provider::{
    MapCamera, MapLoadStatus, MapProvider, OfflineTileProvider,
};
use privacy_transit::map_renderer::snapshot::render_snapshot;
use privacy_transit::simulation_engine::simulator::FleetSimulator;
use privacy_transit::simulation_engine::vehicles::seed_fleet;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const SNAPSHOT_PATH: &str = "fleet_snapshot.png";

fn main() {
    env_logger::init();

    let camera = MapCamera {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
    };
    let store = CredentialStore::open_default();
    let api_key = store.resolve().unwrap_or_default();

    match OfflineTileProvider.load(&api_key, camera) {
        MapLoadStatus::Loading => println!("Map still loading, try again."),
        MapLoadStatus::Failure(reason) => {
            eprintln!("Map failed to load: {}", reason);
            eprintln!("Store an API key in the app or set the environment fallback.");
            std::process::exit(1);
        }
        MapLoadStatus::Ready(surface) => {
            let mut simulator = FleetSimulator::new(seed_fleet());
            let mut rng = SmallRng::seed_from_u64(1);
            simulator.tick(&mut rng);

            let mut layer = MarkerLayer::new(surface);
            layer.sync(simulator.vehicles());
            log::info!("rendering {} markers", layer.markers().len());

            if let Err(e) = render_snapshot(SNAPSHOT_PATH, &camera, layer.markers()) {
                eprintln!("Error rendering snapshot: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Center and zoom handed to the map provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    pub center: (f64, f64),
    pub zoom: u8,
}

/// Opaque handle to a loaded map surface. Markers are laid on top of this.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSurface {
    pub camera: MapCamera,
}

/// The three observable states of the external map SDK. The map view starts
/// in `Loading` and swaps in whatever the provider hands back; a single match
/// over this enum drives the whole rendering decision.
#[derive(Debug, Clone, PartialEq)]
pub enum MapLoadStatus {
    Loading,
    /// Bad or missing credential, quota, network. One gate, no retry policy.
    Failure(String),
    Ready(MapSurface),
}

/// The external map SDK, treated as an opaque collaborator: credential in,
/// surface out.
pub trait MapProvider {
    fn load(&self, api_key: &str, camera: MapCamera) -> MapLoadStatus;
}

/// Self-contained provider used by the mockup. It has no tiles to fetch, so
/// the only thing it checks is the credential shape.
#[derive(Debug, Default)]
pub struct OfflineTileProvider;

impl MapProvider for OfflineTileProvider {
    fn load(&self, api_key: &str, camera: MapCamera) -> MapLoadStatus {
        if api_key.trim().is_empty() {
            return MapLoadStatus::Failure("missing or empty API key".to_string());
        }
        MapLoadStatus::Ready(MapSurface { camera })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> MapCamera {
        MapCamera {
            center: (40.7128, -74.0060),
            zoom: 13,
        }
    }

    #[test]
    fn blank_key_fails_to_load() {
        let provider = OfflineTileProvider;
        assert!(matches!(
            provider.load("  ", camera()),
            MapLoadStatus::Failure(_)
        ));
    }

    #[test]
    fn non_empty_key_yields_a_surface() {
        let provider = OfflineTileProvider;
        match provider.load("demo-key", camera()) {
            MapLoadStatus::Ready(surface) => assert_eq!(surface.camera, camera()),
            other => panic!("expected Ready, got {:?}", other),
        }
    }
}

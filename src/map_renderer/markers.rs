use crate::map_renderer::provider::MapSurface;
use crate::simulation_engine::vehicles::Bus;

/// One map marker per live bus, with the info popup content prepared up front.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub vehicle_id: String,
    pub position: (f64, f64),
    pub title: String,
    pub popup: String,
}

impl Marker {
    fn for_bus(bus: &Bus) -> Self {
        Self {
            vehicle_id: bus.id.clone(),
            position: (bus.lat, bus.lng),
            title: format!("{} - {}", bus.route, bus.next_stop),
            popup: format!(
                "{} | Next: {} | ETA: {}m | Speed: {}km/h",
                bus.route,
                bus.next_stop,
                bus.eta.round() as i64,
                bus.speed.round() as i64
            ),
        }
    }
}

/// Marker set laid over a loaded map surface. Every `sync` clears the previous
/// set and rebuilds it from scratch; with a handful of buses a full redraw is
/// cheaper than bookkeeping a diff.
#[derive(Debug)]
pub struct MarkerLayer {
    surface: MapSurface,
    markers: Vec<Marker>,
    open_popup: Option<usize>,
}

impl MarkerLayer {
    pub fn new(surface: MapSurface) -> Self {
        Self {
            surface,
            markers: Vec::new(),
            open_popup: None,
        }
    }

    pub fn surface(&self) -> &MapSurface {
        &self.surface
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Rebuilds the marker set from the current fleet. Any open popup was
    /// attached to a discarded marker, so it closes with it.
    pub fn sync(&mut self, buses: &[Bus]) {
        self.markers.clear();
        self.markers.extend(buses.iter().map(Marker::for_bus));
        self.open_popup = None;
    }

    /// Opens the popup for the clicked marker, implicitly closing whichever
    /// one was open before (single-open-popup convention).
    pub fn click(&mut self, vehicle_id: &str) -> Option<&str> {
        let idx = self.markers.iter().position(|m| m.vehicle_id == vehicle_id)?;
        self.open_popup = Some(idx);
        Some(self.markers[idx].popup.as_str())
    }

    pub fn open_popup(&self) -> Option<&Marker> {
        self.open_popup.map(|idx| &self.markers[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_renderer::provider::{MapCamera, MapSurface};
    use crate::simulation_engine::vehicles::seed_fleet;

    fn layer() -> MarkerLayer {
        MarkerLayer::new(MapSurface {
            camera: MapCamera {
                center: (40.7128, -74.0060),
                zoom: 13,
            },
        })
    }

    #[test]
    fn empty_fleet_renders_zero_markers() {
        let mut layer = layer();
        layer.sync(&[]);
        assert!(layer.markers().is_empty());
    }

    #[test]
    fn sync_rebuilds_one_marker_per_bus() {
        let mut layer = layer();
        let fleet = seed_fleet();
        layer.sync(&fleet);
        assert_eq!(layer.markers().len(), fleet.len());

        // Full redraw: shrinking the fleet shrinks the marker set.
        layer.sync(&fleet[..1]);
        assert_eq!(layer.markers().len(), 1);
        assert_eq!(layer.markers()[0].vehicle_id, "bus-001");
    }

    #[test]
    fn click_opens_one_popup_and_closes_the_previous() {
        let mut layer = layer();
        layer.sync(&seed_fleet());

        let popup = layer.click("bus-001").expect("marker exists");
        assert!(popup.contains("Line 42"));
        assert!(popup.contains("Central Station"));

        layer.click("bus-002").expect("marker exists");
        let open = layer.open_popup().expect("popup open");
        assert_eq!(open.vehicle_id, "bus-002");

        assert_eq!(layer.click("bus-999"), None);
    }

    #[test]
    fn sync_closes_any_open_popup() {
        let mut layer = layer();
        layer.sync(&seed_fleet());
        layer.click("bus-001");
        layer.sync(&seed_fleet());
        assert!(layer.open_popup().is_none());
    }
}

use crate::map_renderer::markers::Marker;
use crate::map_renderer::provider::MapCamera;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

/// Visible degrees of longitude for a given zoom level, full-width tile math.
fn span_for_zoom(zoom: u8) -> f64 {
    360.0 / 2_f64.powi(zoom as i32)
}

/// Draws the camera extent and one dot per marker to a PNG. Offline stand-in
/// for the real map surface, in the same spirit as the monitoring heatmap.
pub fn render_snapshot(
    path: impl AsRef<Path>,
    camera: &MapCamera,
    markers: &[Marker],
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let (center_lat, center_lng) = camera.center;
    let half_span = span_for_zoom(camera.zoom) / 2.0;

    let lng_range = (center_lng - half_span)..(center_lng + half_span);
    let lat_range = (center_lat - half_span)..(center_lat + half_span);

    let backend = BitMapBackend::new(path, (800, 600));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Live Buses", ("sans-serif", 20))
        .margin(40)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(lng_range, lat_range)?;

    chart.configure_mesh().draw()?;

    chart.draw_series(
        markers
            .iter()
            .map(|m| Circle::new((m.position.1, m.position.0), 8, BLUE.filled())),
    )?;
    chart.draw_series(markers.iter().map(|m| {
        Text::new(
            m.title.clone(),
            (m.position.1, m.position.0),
            ("sans-serif", 14),
        )
    }))?;

    root.present()?;
    println!("Fleet snapshot saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_renderer::markers::MarkerLayer;
    use crate::map_renderer::provider::MapSurface;
    use crate::simulation_engine::vehicles::seed_fleet;

    #[test]
    fn snapshot_writes_a_png() {
        let camera = MapCamera {
            center: (40.7128, -74.0060),
            zoom: 13,
        };
        let mut layer = MarkerLayer::new(MapSurface { camera });
        layer.sync(&seed_fleet());

        let path = std::env::temp_dir().join(format!(
            "privacy_transit_snapshot_{}.png",
            std::process::id()
        ));
        render_snapshot(&path, &camera, layer.markers()).expect("render snapshot");
        let meta = std::fs::metadata(&path).expect("snapshot exists");
        assert!(meta.len() > 0);
        let _ = std::fs::remove_file(&path);
    }
}

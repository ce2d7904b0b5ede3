use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};
use privacy_transit::map_renderer::markers::MarkerLayer;
use privacy_transit::map_renderer::provider::{MapCamera, MapSurface};
use privacy_transit::simulation_engine::vehicles::{seed_fleet, Bus};

fn fleet_of(size: usize) -> Vec<Bus> {
    let seed = seed_fleet();
    (0..size)
        .map(|i| {
            let mut bus = seed[i % seed.len()].clone();
            bus.id = format!("bus-{:03}", i + 1);
            bus
        })
        .collect()
}

fn bench_marker_sync(c: &mut Criterion) {
    let fleet_sizes = [2, 50, 500];

    let mut group = c.benchmark_group("marker_sync");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    for &size in &fleet_sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let fleet = fleet_of(size);
            let mut layer = MarkerLayer::new(MapSurface {
                camera: MapCamera {
                    center: (40.7128, -74.0060),
                    zoom: 13,
                },
            });
            b.iter(|| {
                layer.sync(&fleet);
                black_box(layer.markers().len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_marker_sync);
criterion_main!(benches);

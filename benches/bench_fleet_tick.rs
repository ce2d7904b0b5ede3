use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};
use privacy_transit::simulation_engine::simulator::FleetSimulator;
use privacy_transit::simulation_engine::vehicles::seed_fleet;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn fleet_of(size: usize) -> Vec<privacy_transit::simulation_engine::vehicles::Bus> {
    let seed = seed_fleet();
    (0..size)
        .map(|i| {
            let mut bus = seed[i % seed.len()].clone();
            bus.id = format!("bus-{:03}", i + 1);
            bus
        })
        .collect()
}

fn bench_fleet_tick(c: &mut Criterion) {
    let fleet_sizes = [2, 50, 500];

    let mut group = c.benchmark_group("fleet_tick");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    for &size in &fleet_sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut simulator = FleetSimulator::new(fleet_of(size));
            let mut rng = SmallRng::seed_from_u64(1);
            b.iter(|| {
                simulator.tick(&mut rng);
                black_box(simulator.vehicles());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fleet_tick);
criterion_main!(benches);

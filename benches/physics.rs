//! Benchmarks for tendril arm simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use tendril::*;

fn bench_lattice_build(c: &mut Criterion) {
    c.bench_function("lattice_build_20_segments", |b| {
        let config: ArmConfig<f32> = ArmConfig::new();
        b.iter(|| Lattice::build(&config).map(|l| l.springs().len()));
    });
}

fn bench_idle_arm(c: &mut Criterion) {
    c.bench_function("arm_20_segments_60_idle_ticks", |b| {
        b.iter(|| {
            let mut sim: Simulation<f32> = Simulation::new(ArmConfig::new()).unwrap();
            let signals = sim.idle_signals();
            for _ in 0..60 {
                sim.step(&signals, &mut NoOpStepObserver);
            }
            sim.tip()
        });
    });
}

fn bench_driven_arm(c: &mut Criterion) {
    c.bench_function("arm_40_segments_60_driven_ticks", |b| {
        b.iter(|| {
            let config = ArmConfig::new()
                .with_segments(40)
                .with_shrink_factor(0.97)
                .with_channels(ChannelMap::paired(40));
            let mut sim: Simulation<f64> = Simulation::new(config).unwrap();
            let mut signals = sim.idle_signals();
            for ch in 0..sim.channel_count() {
                signals.set_keys(ch, ch % 2 == 0, ch % 2 == 1).unwrap();
            }
            for _ in 0..60 {
                sim.step(&signals, &mut NoOpStepObserver);
            }
            sim.snapshot()
        });
    });
}

criterion_group!(benches, bench_lattice_build, bench_idle_arm, bench_driven_arm);
criterion_main!(benches);

use tendril::{ArmConfig, NoOpStepObserver, Simulation, Snapshot};

fn run() -> Snapshot<f64> {
    let mut sim = Simulation::new(ArmConfig::<f64>::new()).unwrap();
    let mut signals = sim.idle_signals();
    for tick in 0..120 {
        let channel = (tick / 12) % sim.channel_count();
        signals.release_all();
        signals.set_keys(channel, tick % 2 == 0, tick % 3 == 0).unwrap();
        sim.step(&signals, &mut NoOpStepObserver);
    }
    sim.snapshot()
}

#[test]
fn arm_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run()).collect();

    for r in &results[1..] {
        for (a, b) in results[0].points.iter().zip(r.points.iter()) {
            assert_eq!(a.pos.x.to_bits(), b.pos.x.to_bits());
            assert_eq!(a.pos.y.to_bits(), b.pos.y.to_bits());
        }
    }
}

#[test]
fn reset_replays_identically() {
    let mut sim = Simulation::new(ArmConfig::<f32>::new()).unwrap();
    let mut signals = sim.idle_signals();
    signals.set_keys(3, true, false).unwrap();
    for _ in 0..50 {
        sim.step(&signals, &mut NoOpStepObserver);
    }
    let first = sim.snapshot();
    sim.reset().unwrap();
    for _ in 0..50 {
        sim.step(&signals, &mut NoOpStepObserver);
    }
    let second = sim.snapshot();
    for (a, b) in first.springs.iter().zip(second.springs.iter()) {
        assert_eq!(a.from.x.to_bits(), b.from.x.to_bits());
        assert_eq!(a.to.y.to_bits(), b.to.y.to_bits());
    }
}

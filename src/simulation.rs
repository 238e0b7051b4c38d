//! Tick orchestration and read-only snapshots for renderers.

use crate::actuator::{Actuator, DriveSignals};
use crate::config::ArmConfig;
use crate::error::ArmError;
use crate::float::Float;
use crate::lattice::Lattice;
use crate::observer::StepObserver;
use crate::spring::RestLimits;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Drawable state of one point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointView<F: Float> {
    pub pos: Vec2<F>,
    pub radius: F,
    pub colour: [u8; 3],
}

/// Endpoints of one spring, for line drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringView<F: Float> {
    pub from: Vec2<F>,
    pub to: Vec2<F>,
}

/// Owned copy of everything a renderer needs after a tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<F: Float> {
    pub tick: u64,
    pub anchors: AllocVec<PointView<F>>,
    pub points: AllocVec<PointView<F>>,
    pub springs: AllocVec<SpringView<F>>,
}

/// An arm being simulated: the lattice plus everything needed to advance it.
pub struct Simulation<F: Float> {
    config: ArmConfig<F>,
    lattice: Lattice<F>,
    actuator: Actuator<F>,
    limits: RestLimits<F>,
    decay: F,
    tick: u64,
}

impl<F: Float> Simulation<F> {
    /// Validate `config`, build the lattice and its actuator.
    pub fn new(config: ArmConfig<F>) -> Result<Self, ArmError> {
        config.validate()?;
        let limits = RestLimits {
            clamp: config.clamp_rest_lengths,
            decay_floor: config.decay_floor,
        };
        let lattice = Lattice::generate(&config)?;
        let actuator = Actuator::new(
            config.channel_map(),
            config.segment_count,
            config.actuation_step,
            config.min_length,
            config.restore_increment,
            limits,
        )?;
        Ok(Simulation {
            decay: config.decay_factor(),
            config,
            lattice,
            actuator,
            limits,
            tick: 0,
        })
    }

    /// Advance one tick: actuate, update every spring, then move every
    /// mobile point. Springs all see the positions left by the previous tick.
    pub fn step<O: StepObserver<F>>(&mut self, signals: &DriveSignals<F>, observer: &mut O) {
        self.actuator.apply(&mut self.lattice, signals);
        observer.on_actuate();

        let (points, springs) = self.lattice.parts_mut();
        for (index, spring) in springs.iter_mut().enumerate() {
            let force = spring.update(points, self.decay, &self.limits);
            observer.on_spring_update(index, force);
        }

        for p in points.iter_mut().filter(|p| !p.is_anchor()) {
            p.advance();
        }
        observer.on_integrate();

        self.tick += 1;
        observer.on_step_complete(self.tick);
    }

    /// Replace the lattice with a freshly generated one.
    pub fn reset(&mut self) -> Result<(), ArmError> {
        self.lattice = Lattice::generate(&self.config)?;
        self.tick = 0;
        Ok(())
    }

    /// Idle signals sized for this arm's channels.
    pub fn idle_signals(&self) -> DriveSignals<F> {
        DriveSignals::idle(self.actuator.channel_count())
    }

    pub fn lattice(&self) -> &Lattice<F> {
        &self.lattice
    }

    pub fn config(&self) -> &ArmConfig<F> {
        &self.config
    }

    pub fn channel_count(&self) -> usize {
        self.actuator.channel_count()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Upper and lower tip positions, for target/scoring consumers.
    pub fn tip(&self) -> (Vec2<F>, Vec2<F>) {
        self.lattice.tip()
    }

    /// Largest point speed in the arm.
    pub fn max_speed(&self) -> F {
        self.lattice
            .points()
            .iter()
            .fold(F::zero(), |acc, p| acc.max(p.speed()))
    }

    pub fn snapshot(&self) -> Snapshot<F> {
        let view = |p: &crate::point::MassPoint<F>| PointView {
            pos: p.pos,
            radius: p.radius,
            colour: p.colour,
        };
        let arena = self.lattice.arena();
        Snapshot {
            tick: self.tick,
            anchors: self.lattice.anchors().iter().map(view).collect(),
            points: self.lattice.points().iter().map(view).collect(),
            springs: self
                .lattice
                .springs()
                .iter()
                .map(|s| SpringView { from: arena[s.p1].pos, to: arena[s.p2].pos })
                .collect(),
        }
    }
}

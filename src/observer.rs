//! Step observer trait for monitoring simulation ticks.

use crate::float::Float;

/// Trait for observing the phases of a simulation tick.
///
/// Implement this trait to monitor the simulation (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after drive signals have been applied to rest lengths.
    fn on_actuate(&mut self) {}

    /// Called after each spring update with the force it exerted.
    fn on_spring_update(&mut self, _index: usize, _force: F) {}

    /// Called after all mobile points have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a tick is fully complete. `tick` counts from 1 after reset.
    fn on_step_complete(&mut self, _tick: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Tracks the largest spring force magnitude seen during the current tick.
#[derive(Clone, Debug, Default)]
pub struct PeakForceObserver<F: Float> {
    pub peak: F,
    pub last_tick_peak: F,
}

impl<F: Float> StepObserver<F> for PeakForceObserver<F> {
    fn on_actuate(&mut self) {
        self.peak = F::zero();
    }

    fn on_spring_update(&mut self, _index: usize, force: F) {
        self.peak = self.peak.max(force.abs());
    }

    fn on_step_complete(&mut self, _tick: u64) {
        self.last_tick_peak = self.peak;
    }
}

/// Emits tick progress through the `log` facade.
///
/// Per-spring forces go to `trace`, tick completion (with the peak force)
/// to `debug`.
#[cfg(feature = "log")]
#[derive(Clone, Debug, Default)]
pub struct LogStepObserver {
    peak: f64,
}

#[cfg(feature = "log")]
impl<F: Float> StepObserver<F> for LogStepObserver {
    fn on_actuate(&mut self) {
        self.peak = 0.0;
    }

    fn on_spring_update(&mut self, index: usize, force: F) {
        let force = force.to_f64();
        if force.abs() > self.peak {
            self.peak = force.abs();
        }
        log::trace!("spring {} force {:.6}", index, force);
    }

    fn on_step_complete(&mut self, tick: u64) {
        log::debug!("tick {} complete, peak spring force {:.6}", tick, self.peak);
    }
}

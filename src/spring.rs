//! Damped springs whose rest length relaxes under load.
//!
//! Each update pushes both endpoints along the spring axis and then lets the
//! rest length flow towards the current length, like a Maxwell fluid: the
//! larger the force, the faster the spring "forgets" its old length.

use crate::float::Float;
use crate::point::MassPoint;
use crate::vec::Polar;

/// How rest-length changes are bounded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RestLimits<F: Float> {
    /// Cap `restore` at the original length and floor decay at `decay_floor`.
    pub clamp: bool,
    pub decay_floor: F,
}

impl<F: Float> RestLimits<F> {
    /// No bounds at all; restore may overshoot and decay may go negative.
    pub fn unclamped() -> Self {
        RestLimits { clamp: false, decay_floor: F::zero() }
    }
}

/// Bounds an actuated spring's rest length must be back inside after decay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Envelope<F: Float> {
    pub lo: F,
    /// `None` leaves the rest length free to grow.
    pub hi: Option<F>,
}

/// A spring between two points of an arena, addressed by index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring<F: Float> {
    pub p1: usize,
    pub p2: usize,
    /// Current rest length; mutated by decay, actuation and restore.
    pub rest_length: F,
    original_length: F,
    pub strength: F,
    #[cfg_attr(feature = "serde", serde(skip))]
    envelope: Option<Envelope<F>>,
}

impl<F: Float> Spring<F> {
    pub fn new(p1: usize, p2: usize, length: F, strength: F) -> Self {
        Spring {
            p1,
            p2,
            rest_length: length,
            original_length: length,
            strength,
            envelope: None,
        }
    }

    pub fn original_length(&self) -> F {
        self.original_length
    }

    pub fn envelope(&self) -> Option<Envelope<F>> {
        self.envelope
    }

    /// Bound every later decay step. Set each tick by the actuator.
    pub fn set_envelope(&mut self, envelope: Envelope<F>) {
        self.envelope = Some(envelope);
    }

    /// Apply this spring's force to its endpoints, then relax its rest length.
    ///
    /// `decay` is the per-update factor `1 - e^-damping`. Returns the force.
    /// The force is positive when the spring is compressed below its rest
    /// length; `p1` is then pushed away from `p2` and `p2` away from `p1`.
    pub fn update(&mut self, points: &mut [MassPoint<F>], decay: F, limits: &RestLimits<F>) -> F {
        let a = points[self.p1].pos;
        let b = points[self.p2].pos;
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        let dist = F::hypot(dx, dy);
        let theta = F::atan2(dy, dx);
        let force = (self.rest_length - dist) * self.strength;

        let m1 = points[self.p1].mass();
        points[self.p1].accelerate(Polar::new(theta + F::half_pi(), force / m1));
        let m2 = points[self.p2].mass();
        points[self.p2].accelerate(Polar::new(theta - F::half_pi(), force / m2));

        let relaxed = self.rest_length - force * decay;
        self.rest_length = match self.envelope {
            Some(Envelope { lo, hi: Some(hi) }) => relaxed.clamp(lo, hi),
            Some(Envelope { lo, hi: None }) => relaxed.max(lo),
            None if limits.clamp => relaxed.max(limits.decay_floor),
            None => relaxed,
        };

        force
    }

    /// Regain `increment` of rest length while shorter than the original.
    pub fn restore(&mut self, increment: F, limits: &RestLimits<F>) {
        if self.rest_length < self.original_length {
            self.rest_length = self.rest_length + increment;
            if limits.clamp {
                self.rest_length = self.rest_length.min(self.original_length);
            }
        }
    }

    /// Shorten by `step`, never going below `min_length`.
    ///
    /// A spring already at or below the floor is left alone.
    pub fn shrink(&mut self, step: F, min_length: F) {
        if self.rest_length > min_length {
            self.rest_length = (self.rest_length - step).max(min_length);
        }
    }
}

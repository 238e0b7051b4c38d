//! Lattice nodes: mass points carrying a polar velocity.

use crate::error::ArmError;
use crate::float::Float;
use crate::vec::{add_vectors, Polar, Vec2};

/// Whether a point takes part in integration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointKind {
    /// Fixed boundary point; exerts spring forces but never moves.
    Anchor,
    Mobile,
}

/// A node of the lattice.
///
/// Velocity is stored as a polar vector applied once per tick, so
/// `accelerate` is really an impulse: several calls within one tick
/// accumulate before the next `advance`.
#[derive(Clone, Debug, PartialEq)]
pub struct MassPoint<F: Float> {
    pub pos: Vec2<F>,
    pub velocity: Polar<F>,
    mass: F,
    pub kind: PointKind,
    pub radius: F,
    pub colour: [u8; 3],
}

impl<F: Float> MassPoint<F> {
    /// Create a mobile point at rest.
    pub fn new(pos: Vec2<F>, mass: F) -> Result<Self, ArmError> {
        if !mass.is_finite() || mass <= F::zero() {
            return Err(ArmError::InvalidMass);
        }
        Ok(MassPoint {
            pos,
            velocity: Polar::default(),
            mass,
            kind: PointKind::Mobile,
            radius: F::from_f32(3.0),
            colour: [0, 0, 255],
        })
    }

    /// Create an anchor. Anchors still carry a mass so springs can divide by it.
    pub fn anchor(pos: Vec2<F>, mass: F) -> Result<Self, ArmError> {
        let mut point = Self::new(pos, mass)?;
        point.kind = PointKind::Anchor;
        point.radius = F::from_f32(5.0);
        Ok(point)
    }

    pub fn with_appearance(mut self, radius: F, colour: [u8; 3]) -> Self {
        self.radius = radius;
        self.colour = colour;
        self
    }

    pub fn mass(&self) -> F {
        self.mass
    }

    pub fn is_anchor(&self) -> bool {
        self.kind == PointKind::Anchor
    }

    /// Current speed, the magnitude of the polar velocity.
    pub fn speed(&self) -> F {
        self.velocity.length.abs()
    }

    /// Integrate position by one tick. Anchors do not move.
    pub fn advance(&mut self) {
        if self.is_anchor() {
            return;
        }
        self.pos = self.pos + self.velocity.to_displacement();
    }

    /// Compose an impulse into the velocity. Anchors ignore impulses.
    pub fn accelerate(&mut self, impulse: Polar<F>) {
        if self.is_anchor() {
            return;
        }
        self.velocity = add_vectors(self.velocity, impulse);
    }
}

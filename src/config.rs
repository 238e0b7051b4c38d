//! Configuration for building and driving an arm.

use crate::actuator::ChannelMap;
use crate::error::ArmError;
use crate::float::Float;
use crate::vec::Vec2;

const DEFAULT_CHANNELS: usize = 10;

/// Strength multipliers for the three kinds of spring in a segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringStrengths<F: Float> {
    /// Upper and lower edges running along the arm.
    pub longitudinal: F,
    /// The brace across a segment's two new points.
    pub cross: F,
    /// The two braces crossing the segment diagonally.
    pub diagonal: F,
}

impl<F: Float> SpringStrengths<F> {
    /// Softer cross brace, stiffer diagonals: 1 / 1 / 3.
    pub fn classic() -> Self {
        SpringStrengths {
            longitudinal: F::one(),
            cross: F::one(),
            diagonal: F::from_f32(3.0),
        }
    }
}

impl<F: Float> Default for SpringStrengths<F> {
    fn default() -> Self {
        SpringStrengths {
            longitudinal: F::one(),
            cross: F::two(),
            diagonal: F::two(),
        }
    }
}

/// Immutable description of an arm: its geometry, its physics constants
/// and how drive channels map onto segments.
///
/// # Builder Pattern
/// ```
/// use tendril::{ArmConfig, ChannelMap};
///
/// let config: ArmConfig<f32> = ArmConfig::new()
///     .with_segments(8)
///     .with_shrink_factor(0.9)
///     .with_channels(ChannelMap::paired(8));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmConfig<F: Float> {
    /// Number of segments. Default: 20.
    pub segment_count: usize,
    /// Distance between the two anchors. Default: 50.
    pub base_height: F,
    /// Horizontal spacing between segments. Default: 25.
    pub segment_width: F,
    /// Geometric taper applied per segment, in (0, 1]. Default: 0.95.
    pub shrink_factor: F,
    /// Per-segment multiplier on spring strengths (segment `i` gets
    /// `taper_strength^i`). Default: 1.0.
    pub taper_strength: F,
    /// Anchor x and centre-line y. Default: (0, 300).
    pub origin: Vec2<F>,
    /// Mass of every lattice point. Default: 3.
    pub point_mass: F,
    pub point_radius: F,
    pub anchor_radius: F,
    pub colour: [u8; 3],
    pub strengths: SpringStrengths<F>,
    /// Rest-length decay rate; each update removes `force * (1 - e^-damping)`.
    /// Default: 0.025.
    pub damping: F,
    /// Rest-length change per tick while a drive signal is fully on. Default: 0.5.
    pub actuation_step: F,
    /// Actuation never shrinks a spring below this. Default: 12.5.
    pub min_length: F,
    /// Rest-length regained per tick by an idle actuated spring. Default: 0.3.
    pub restore_increment: F,
    /// Clamp restore at the original length and decay at `decay_floor`.
    /// Default: true.
    pub clamp_rest_lengths: bool,
    /// Lowest rest length decay may reach when clamping. Default: 0.5.
    pub decay_floor: F,
    /// Which segments each drive channel actuates. `None` means one channel
    /// per segment for the first ten segments.
    pub channels: Option<ChannelMap>,
}

impl<F: Float> ArmConfig<F> {
    /// Create a config with the default octopus-arm values.
    pub fn new() -> Self {
        ArmConfig {
            segment_count: 20,
            base_height: F::from_f32(50.0),
            segment_width: F::from_f32(25.0),
            shrink_factor: F::from_f32(0.95),
            taper_strength: F::one(),
            origin: Vec2::new(F::zero(), F::from_f32(300.0)),
            point_mass: F::from_f32(3.0),
            point_radius: F::from_f32(3.0),
            anchor_radius: F::from_f32(5.0),
            colour: [0, 0, 255],
            strengths: SpringStrengths::default(),
            damping: F::from_f32(0.025),
            actuation_step: F::half(),
            min_length: F::from_f32(12.5),
            restore_increment: F::from_f32(0.3),
            clamp_rest_lengths: true,
            decay_floor: F::half(),
            channels: None,
        }
    }

    pub fn with_segments(mut self, segment_count: usize) -> Self {
        self.segment_count = segment_count;
        self
    }

    pub fn with_base_height(mut self, base_height: F) -> Self {
        self.base_height = base_height;
        self
    }

    pub fn with_segment_width(mut self, segment_width: F) -> Self {
        self.segment_width = segment_width;
        self
    }

    pub fn with_shrink_factor(mut self, shrink_factor: F) -> Self {
        self.shrink_factor = shrink_factor;
        self
    }

    pub fn with_taper_strength(mut self, taper_strength: F) -> Self {
        self.taper_strength = taper_strength;
        self
    }

    pub fn with_origin(mut self, origin: Vec2<F>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_point_mass(mut self, mass: F) -> Self {
        self.point_mass = mass;
        self
    }

    pub fn with_strengths(mut self, strengths: SpringStrengths<F>) -> Self {
        self.strengths = strengths;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_actuation_step(mut self, step: F) -> Self {
        self.actuation_step = step;
        self
    }

    pub fn with_min_length(mut self, min_length: F) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_restore_increment(mut self, increment: F) -> Self {
        self.restore_increment = increment;
        self
    }

    /// Enable or disable rest-length clamping on restore and decay.
    pub fn with_clamping(mut self, clamp: bool) -> Self {
        self.clamp_rest_lengths = clamp;
        self
    }

    pub fn with_decay_floor(mut self, floor: F) -> Self {
        self.decay_floor = floor;
        self
    }

    pub fn with_channels(mut self, channels: ChannelMap) -> Self {
        self.channels = Some(channels);
        self
    }

    /// The configured channel map, or the 1:1 default sized to the arm.
    pub fn channel_map(&self) -> ChannelMap {
        match &self.channels {
            Some(map) => map.clone(),
            None => ChannelMap::one_to_one(self.segment_count.min(DEFAULT_CHANNELS)),
        }
    }

    /// Per-update rest-length decay factor, `1 - e^-damping`.
    pub fn decay_factor(&self) -> F {
        F::one() - (-self.damping).exp()
    }

    /// Check every parameter before anything is built.
    pub fn validate(&self) -> Result<(), ArmError> {
        let positive = |v: F| v.is_finite() && v > F::zero();

        if self.segment_count == 0 {
            return Err(ArmError::InvalidSegmentCount);
        }
        if !positive(self.base_height) || !positive(self.segment_width) {
            return Err(ArmError::InvalidDimension);
        }
        if !positive(self.shrink_factor) || self.shrink_factor > F::one() {
            return Err(ArmError::InvalidShrinkFactor);
        }
        if !positive(self.point_mass) {
            return Err(ArmError::InvalidMass);
        }
        if !self.damping.is_finite() || self.damping < F::zero() {
            return Err(ArmError::InvalidDamping);
        }
        let s = &self.strengths;
        if !positive(s.longitudinal)
            || !positive(s.cross)
            || !positive(s.diagonal)
            || !positive(self.taper_strength)
            || !positive(self.actuation_step)
            || !positive(self.min_length)
            || !positive(self.restore_increment)
            || !self.decay_floor.is_finite()
            || self.decay_floor < F::zero()
        {
            return Err(ArmError::InvalidActuation);
        }
        match &self.channels {
            Some(map) => map.validate(self.segment_count),
            None => Ok(()),
        }
    }
}

impl<F: Float> Default for ArmConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

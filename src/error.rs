//! Error types for arm construction and actuation setup.

use core::fmt;

/// Invalid configuration detected before a lattice or controller is built.
///
/// The simulation itself is total over finite floats; every failure the
/// crate reports happens up front, at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum ArmError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// The arm needs at least one segment.
    InvalidSegmentCount,
    /// Base height and segment width must be positive and finite.
    InvalidDimension,
    /// Shrink factor must be in (0, 1].
    InvalidShrinkFactor,
    /// Damping coefficient must be non-negative and finite.
    InvalidDamping,
    /// Actuation step, restore increment, lengths or strengths are out of range.
    InvalidActuation,
    /// A channel map references a segment the lattice does not have.
    SegmentOutOfBounds { segment: usize, count: usize },
    /// A segment is listed under more than one channel, or twice in one.
    DuplicateSegment { segment: usize },
    /// Drive signals were supplied for a channel the controller does not have.
    ChannelOutOfBounds { channel: usize, count: usize },
}

impl fmt::Display for ArmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmError::InvalidMass => write!(f, "mass must be positive and finite"),
            ArmError::InvalidSegmentCount => write!(f, "arm needs at least one segment"),
            ArmError::InvalidDimension => {
                write!(f, "base height and segment width must be positive")
            }
            ArmError::InvalidShrinkFactor => write!(f, "shrink factor must be in (0, 1]"),
            ArmError::InvalidDamping => write!(f, "damping coefficient must be non-negative"),
            ArmError::InvalidActuation => {
                write!(f, "actuation step, restore increment, lengths and strengths must be positive")
            }
            ArmError::SegmentOutOfBounds { segment, count } => {
                write!(f, "segment index {} out of bounds (count: {})", segment, count)
            }
            ArmError::DuplicateSegment { segment } => {
                write!(f, "segment {} is driven by more than one channel", segment)
            }
            ArmError::ChannelOutOfBounds { channel, count } => {
                write!(f, "channel index {} out of bounds (count: {})", channel, count)
            }
        }
    }
}

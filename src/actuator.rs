//! Actuation: drive channels that shorten the longitudinal springs.
//!
//! Every channel owns one or more segments. Its `upper` level shrinks the
//! upper edge spring (offset 0 in the segment's block of five) and its
//! `lower` level the lower edge spring (offset 2). An idle side restores.
//!
//! Driven springs also get an envelope for the following decay step: never
//! below `min_length`, and with clamping on, never above the original length
//! and never below what restore just reached.

use crate::error::ArmError;
use crate::float::Float;
use crate::lattice::{Lattice, LOWER_EDGE, SPRINGS_PER_SEGMENT, UPPER_EDGE};
use crate::spring::{Envelope, RestLimits};
use alloc::vec::Vec as AllocVec;

/// Mapping from drive channel to the segments it actuates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelMap {
    channels: AllocVec<AllocVec<usize>>,
}

impl ChannelMap {
    /// Channel `c` drives segment `c`.
    pub fn one_to_one(channels: usize) -> Self {
        ChannelMap {
            channels: (0..channels).map(|c| alloc::vec![c]).collect(),
        }
    }

    /// Channel `c` drives segments `2c` and `2c + 1`; an odd last segment
    /// gets a channel of its own.
    pub fn paired(segments: usize) -> Self {
        ChannelMap {
            channels: (0..segments)
                .step_by(2)
                .map(|s| (s..(s + 2).min(segments)).collect())
                .collect(),
        }
    }

    pub fn custom(channels: AllocVec<AllocVec<usize>>) -> Self {
        ChannelMap { channels }
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Segments driven by `channel`, or an empty slice for unknown channels.
    pub fn segments(&self, channel: usize) -> &[usize] {
        self.channels.get(channel).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Every referenced segment must exist in a lattice of `segment_count`
    /// and belong to exactly one channel.
    pub fn validate(&self, segment_count: usize) -> Result<(), ArmError> {
        let mut claimed = alloc::vec![false; segment_count];
        for &segment in self.channels.iter().flatten() {
            if segment >= segment_count {
                return Err(ArmError::SegmentOutOfBounds { segment, count: segment_count });
            }
            if core::mem::replace(&mut claimed[segment], true) {
                return Err(ArmError::DuplicateSegment { segment });
            }
        }
        Ok(())
    }
}

/// Drive level for one channel. Levels are in [0, 1]; any level above zero
/// counts as active and scales the shrink step.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drive<F: Float> {
    pub upper: F,
    pub lower: F,
}

impl<F: Float> Drive<F> {
    pub fn from_keys(upper: bool, lower: bool) -> Self {
        let level = |on: bool| if on { F::one() } else { F::zero() };
        Drive { upper: level(upper), lower: level(lower) }
    }
}

/// Per-channel drive levels sampled by the input layer once per tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriveSignals<F: Float> {
    drives: AllocVec<Drive<F>>,
}

impl<F: Float> DriveSignals<F> {
    /// All channels idle.
    pub fn idle(channels: usize) -> Self {
        DriveSignals { drives: alloc::vec![Drive::default(); channels] }
    }

    pub fn len(&self) -> usize {
        self.drives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drives.is_empty()
    }

    pub fn set(&mut self, channel: usize, drive: Drive<F>) -> Result<(), ArmError> {
        let count = self.drives.len();
        let slot = self
            .drives
            .get_mut(channel)
            .ok_or(ArmError::ChannelOutOfBounds { channel, count })?;
        *slot = drive;
        Ok(())
    }

    pub fn set_keys(&mut self, channel: usize, upper: bool, lower: bool) -> Result<(), ArmError> {
        self.set(channel, Drive::from_keys(upper, lower))
    }

    /// Drive for `channel`; channels past the end read as idle.
    pub fn get(&self, channel: usize) -> Drive<F> {
        self.drives.get(channel).copied().unwrap_or_default()
    }

    pub fn release_all(&mut self) {
        for d in self.drives.iter_mut() {
            *d = Drive::default();
        }
    }
}

/// Applies drive signals to spring rest lengths.
#[derive(Clone, Debug, PartialEq)]
pub struct Actuator<F: Float> {
    map: ChannelMap,
    step: F,
    min_length: F,
    restore_increment: F,
    limits: RestLimits<F>,
}

impl<F: Float> Actuator<F> {
    pub fn new(
        map: ChannelMap,
        segment_count: usize,
        step: F,
        min_length: F,
        restore_increment: F,
        limits: RestLimits<F>,
    ) -> Result<Self, ArmError> {
        map.validate(segment_count)?;
        if !(step > F::zero()) || !(min_length > F::zero()) || !(restore_increment > F::zero()) {
            return Err(ArmError::InvalidActuation);
        }
        Ok(Actuator { map, step, min_length, restore_increment, limits })
    }

    pub fn channel_map(&self) -> &ChannelMap {
        &self.map
    }

    pub fn channel_count(&self) -> usize {
        self.map.len()
    }

    /// Shrink active sides, restore idle ones, for every channel.
    pub fn apply(&self, lattice: &mut Lattice<F>, signals: &DriveSignals<F>) {
        for channel in 0..self.map.len() {
            let drive = signals.get(channel);
            for &segment in self.map.segments(channel) {
                let base = segment * SPRINGS_PER_SEGMENT;
                self.drive_spring(lattice, base + UPPER_EDGE, drive.upper);
                self.drive_spring(lattice, base + LOWER_EDGE, drive.lower);
            }
        }
    }

    fn drive_spring(&self, lattice: &mut Lattice<F>, index: usize, level: F) {
        let Some(spring) = lattice.spring_mut(index) else {
            return;
        };
        let hi = if self.limits.clamp { Some(spring.original_length()) } else { None };
        let lo = if level > F::zero() {
            spring.shrink(self.step * level.min(F::one()), self.min_length);
            self.min_length
        } else {
            spring.restore(self.restore_increment, &self.limits);
            if self.limits.clamp {
                spring.rest_length.max(self.min_length)
            } else {
                self.min_length
            }
        };
        spring.set_envelope(Envelope { lo, hi });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paired_map_covers_odd_segment_count() {
        let map = ChannelMap::paired(5);
        assert_eq!(map.len(), 3);
        assert_eq!(map.segments(0), &[0, 1]);
        assert_eq!(map.segments(1), &[2, 3]);
        assert_eq!(map.segments(2), &[4]);
    }

    #[test]
    fn custom_map_rejects_shared_segment() {
        let map = ChannelMap::custom(alloc::vec![alloc::vec![0, 1], alloc::vec![1, 2]]);
        assert_eq!(map.validate(3), Err(ArmError::DuplicateSegment { segment: 1 }));
        let map = ChannelMap::custom(alloc::vec![alloc::vec![0, 0]]);
        assert_eq!(map.validate(3), Err(ArmError::DuplicateSegment { segment: 0 }));
        assert_eq!(ChannelMap::paired(7).validate(7), Ok(()));
    }

    #[test]
    fn unknown_channel_has_no_segments() {
        let map = ChannelMap::one_to_one(2);
        assert!(map.segments(7).is_empty());
    }

    #[test]
    fn signals_reject_unknown_channel() {
        let mut signals = DriveSignals::<f32>::idle(3);
        assert_eq!(
            signals.set_keys(3, true, false),
            Err(ArmError::ChannelOutOfBounds { channel: 3, count: 3 })
        );
        assert!(signals.set_keys(2, true, false).is_ok());
        assert_eq!(signals.get(2).upper, 1.0);
        assert_eq!(signals.get(9), Drive::default());
    }

    #[test]
    fn driven_springs_get_decay_envelope() {
        use crate::config::ArmConfig;
        let config = ArmConfig::<f64>::new().with_segments(2);
        let mut lattice = Lattice::build(&config).unwrap();
        let limits = RestLimits { clamp: true, decay_floor: 0.5 };
        let actuator =
            Actuator::new(config.channel_map(), 2, 0.5, 12.5, 0.3, limits).unwrap();
        let mut signals = DriveSignals::idle(2);
        signals.set_keys(0, true, false).unwrap();
        actuator.apply(&mut lattice, &signals);

        let active = lattice.springs()[UPPER_EDGE].envelope();
        assert_eq!(active, Some(Envelope { lo: 12.5, hi: Some(25.0) }));
        let idle = lattice.springs()[LOWER_EDGE].envelope();
        assert_eq!(idle, Some(Envelope { lo: 25.0, hi: Some(25.0) }));
        assert_eq!(lattice.springs()[1].envelope(), None);
    }

    #[test]
    fn actuator_validates_map() {
        let limits = RestLimits::unclamped();
        let result = Actuator::new(ChannelMap::one_to_one(4), 3, 0.5f64, 12.5, 0.3, limits);
        assert_eq!(result, Err(ArmError::SegmentOutOfBounds { segment: 3, count: 3 }));
    }
}

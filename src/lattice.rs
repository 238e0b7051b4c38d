//! The tapering arm lattice: two anchors followed by segments of two
//! points and five springs each.
//!
//! All points live in one arena. Indices 0 and 1 are the upper and lower
//! anchors; segment `i` owns points `2 + 2i` (upper) and `3 + 2i` (lower)
//! and springs `5i .. 5i + 5`, in this order:
//!
//! | offset | spring |
//! |---|---|
//! | 0 | upper edge, previous upper to new upper |
//! | 1 | cross brace, new upper to new lower |
//! | 2 | lower edge, previous lower to new lower |
//! | 3 | diagonal, previous upper to new lower |
//! | 4 | diagonal, previous lower to new upper |

use crate::config::ArmConfig;
use crate::error::ArmError;
use crate::float::Float;
use crate::point::MassPoint;
use crate::spring::Spring;
use crate::vec::{distance, Vec2};
use alloc::vec::Vec as AllocVec;

pub const SPRINGS_PER_SEGMENT: usize = 5;
pub const UPPER_EDGE: usize = 0;
pub const CROSS_BRACE: usize = 1;
pub const LOWER_EDGE: usize = 2;
pub const DIAGONAL_DOWN: usize = 3;
pub const DIAGONAL_UP: usize = 4;

const ANCHOR_COUNT: usize = 2;

/// Points and springs of one arm.
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice<F: Float> {
    points: AllocVec<MassPoint<F>>,
    springs: AllocVec<Spring<F>>,
}

impl<F: Float> Lattice<F> {
    /// Validate `config` and generate the lattice it describes.
    pub fn build(config: &ArmConfig<F>) -> Result<Self, ArmError> {
        config.validate()?;
        Self::generate(config)
    }

    /// Generate without re-running the full config validation.
    pub(crate) fn generate(config: &ArmConfig<F>) -> Result<Self, ArmError> {
        let segments = config.segment_count;
        let mut points = AllocVec::with_capacity(ANCHOR_COUNT + 2 * segments);
        let mut springs = AllocVec::with_capacity(SPRINGS_PER_SEGMENT * segments);

        let centre = config.origin.y;
        let half_base = config.base_height * F::half();
        for y in [centre - half_base, centre + half_base] {
            let anchor = MassPoint::anchor(Vec2::new(config.origin.x, y), config.point_mass)?
                .with_appearance(config.anchor_radius, config.colour);
            points.push(anchor);
        }

        let s = &config.strengths;
        for i in 0..segments {
            let step = F::from_f32((i + 1) as f32);
            let half_height = half_base * config.shrink_factor.powf(step);
            let taper = config.taper_strength.powf(F::from_f32(i as f32));
            let x = config.origin.x + config.segment_width * step;

            let upper = MassPoint::new(Vec2::new(x, centre - half_height), config.point_mass)?
                .with_appearance(config.point_radius, config.colour);
            let lower = MassPoint::new(Vec2::new(x, centre + half_height), config.point_mass)?
                .with_appearance(config.point_radius, config.colour);

            let (prev_upper, prev_lower) = if i == 0 { (0, 1) } else { (points.len() - 2, points.len() - 1) };
            let new_upper = points.len();
            let new_lower = new_upper + 1;

            let diag_down = distance(points[prev_upper].pos, lower.pos);
            let diag_up = distance(points[prev_lower].pos, upper.pos);

            springs.push(Spring::new(prev_upper, new_upper, config.segment_width, s.longitudinal * taper));
            springs.push(Spring::new(new_upper, new_lower, F::two() * half_height, s.cross * taper));
            springs.push(Spring::new(prev_lower, new_lower, config.segment_width, s.longitudinal * taper));
            springs.push(Spring::new(prev_upper, new_lower, diag_down, s.diagonal * taper));
            springs.push(Spring::new(prev_lower, new_upper, diag_up, s.diagonal * taper));

            points.push(upper);
            points.push(lower);
        }

        Ok(Lattice { points, springs })
    }

    pub fn segment_count(&self) -> usize {
        self.springs.len() / SPRINGS_PER_SEGMENT
    }

    /// The two fixed anchors, upper first.
    pub fn anchors(&self) -> &[MassPoint<F>] {
        &self.points[..ANCHOR_COUNT]
    }

    /// Mobile points, upper then lower for each segment in order.
    pub fn points(&self) -> &[MassPoint<F>] {
        &self.points[ANCHOR_COUNT..]
    }

    /// Anchors and mobile points as one arena; spring indices refer to this.
    pub fn arena(&self) -> &[MassPoint<F>] {
        &self.points
    }

    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    pub fn spring(&self, index: usize) -> Option<&Spring<F>> {
        self.springs.get(index)
    }

    pub fn spring_mut(&mut self, index: usize) -> Option<&mut Spring<F>> {
        self.springs.get_mut(index)
    }

    /// The five springs of `segment`.
    pub fn segment_springs(&self, segment: usize) -> Option<&[Spring<F>]> {
        let start = segment * SPRINGS_PER_SEGMENT;
        self.springs.get(start..start + SPRINGS_PER_SEGMENT)
    }

    /// Arena index of a segment's upper point; the lower one follows it.
    pub fn upper_index(segment: usize) -> usize {
        ANCHOR_COUNT + 2 * segment
    }

    /// Upper and lower positions of the last segment.
    pub fn tip(&self) -> (Vec2<F>, Vec2<F>) {
        let n = self.points.len();
        (self.points[n - 2].pos, self.points[n - 1].pos)
    }

    /// Mutable access to the arena and springs at once.
    pub fn parts_mut(&mut self) -> (&mut [MassPoint<F>], &mut [Spring<F>]) {
        (&mut self.points, &mut self.springs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::ChannelMap;
    use approx::assert_abs_diff_eq;

    fn config(segments: usize) -> ArmConfig<f64> {
        ArmConfig::new()
            .with_segments(segments)
            .with_channels(ChannelMap::one_to_one(segments))
    }

    #[test]
    fn counts_scale_with_segments() {
        for n in [1, 3, 20] {
            let lattice = Lattice::build(&config(n)).unwrap();
            assert_eq!(lattice.anchors().len(), 2);
            assert_eq!(lattice.points().len(), 2 * n);
            assert_eq!(lattice.springs().len(), 5 * n);
            assert_eq!(lattice.segment_count(), n);
        }
    }

    #[test]
    fn anchors_straddle_centre_line() {
        let lattice = Lattice::build(&config(2)).unwrap();
        let a = lattice.anchors();
        assert_eq!(a[0].pos, Vec2::new(0.0, 275.0));
        assert_eq!(a[1].pos, Vec2::new(0.0, 325.0));
        assert!(a.iter().all(|p| p.is_anchor()));
        assert!(lattice.points().iter().all(|p| !p.is_anchor()));
    }

    #[test]
    fn segment_height_tapers_geometrically() {
        let lattice = Lattice::build(&config(3)).unwrap();
        for seg in 0..3 {
            let upper = &lattice.arena()[Lattice::<f64>::upper_index(seg)];
            let lower = &lattice.arena()[Lattice::<f64>::upper_index(seg) + 1];
            let expected = 25.0 * libm::pow(0.95, (seg + 1) as f64);
            assert_abs_diff_eq!(300.0 - upper.pos.y, expected, epsilon = 1e-9);
            assert_abs_diff_eq!(lower.pos.y - 300.0, expected, epsilon = 1e-9);
            assert_abs_diff_eq!(upper.pos.x, 25.0 * (seg + 1) as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn first_segment_attaches_to_anchors() {
        let lattice = Lattice::build(&config(2)).unwrap();
        let s = lattice.segment_springs(0).unwrap();
        assert_eq!((s[UPPER_EDGE].p1, s[UPPER_EDGE].p2), (0, 2));
        assert_eq!((s[CROSS_BRACE].p1, s[CROSS_BRACE].p2), (2, 3));
        assert_eq!((s[LOWER_EDGE].p1, s[LOWER_EDGE].p2), (1, 3));
        assert_eq!((s[DIAGONAL_DOWN].p1, s[DIAGONAL_DOWN].p2), (0, 3));
        assert_eq!((s[DIAGONAL_UP].p1, s[DIAGONAL_UP].p2), (1, 2));

        let s = lattice.segment_springs(1).unwrap();
        assert_eq!((s[UPPER_EDGE].p1, s[UPPER_EDGE].p2), (2, 4));
        assert_eq!((s[LOWER_EDGE].p1, s[LOWER_EDGE].p2), (3, 5));
    }

    #[test]
    fn spring_lengths_and_strengths() {
        let lattice = Lattice::build(&config(1).with_shrink_factor(1.0)).unwrap();
        let s = lattice.segment_springs(0).unwrap();
        assert_eq!(s[UPPER_EDGE].rest_length, 25.0);
        assert_eq!(s[CROSS_BRACE].rest_length, 50.0);
        assert_abs_diff_eq!(s[DIAGONAL_DOWN].rest_length, libm::hypot(25.0, 50.0), epsilon = 1e-12);
        assert_eq!(s[UPPER_EDGE].strength, 1.0);
        assert_eq!(s[CROSS_BRACE].strength, 2.0);
        assert_eq!(s[DIAGONAL_UP].strength, 2.0);
        assert!(s.iter().all(|spring| spring.rest_length == spring.original_length()));
    }

    #[test]
    fn taper_strength_scales_later_segments() {
        let lattice = Lattice::build(&config(3).with_taper_strength(0.5)).unwrap();
        assert_abs_diff_eq!(lattice.segment_springs(2).unwrap()[UPPER_EDGE].strength, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn build_fails_fast_on_bad_config() {
        assert_eq!(
            Lattice::build(&config(3).with_shrink_factor(0.0)),
            Err(ArmError::InvalidShrinkFactor)
        );
    }

    #[test]
    fn tip_is_last_segment() {
        let lattice = Lattice::build(&config(4)).unwrap();
        let (upper, lower) = lattice.tip();
        assert_abs_diff_eq!(upper.x, 100.0, epsilon = 1e-12);
        assert!(upper.y < lower.y);
    }
}

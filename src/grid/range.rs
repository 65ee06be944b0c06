//! Step range selection.
//!
//! Decides which multiples of the step are worth testing on one axis. The
//! result is a range of absolute degree magnitudes; the generator tests
//! both signs of every value it visits.
//!
//! The choice depends on where the viewport sits relative to the world
//! edges and the seam (the projection origin at `world_size / 2`). It is
//! written as an ordered table of rules, first match wins.

use crate::core::interpolation::SpaceMapper;
use crate::core::projection::{Projection, ProjectionAdapter};
use crate::grid::descriptors::Axis;

/// Ratios closer than this to an integer count as exact multiples
const MULTIPLE_TOLERANCE: f64 = 1e-9;

/// One axis of the viewport, in world pixels and (clamped) degrees.
///
/// `start` is the left or top edge, `finish` the right or bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpan {
    pub start_px: f64,
    pub finish_px: f64,
    pub world_size: f64,
    pub start_deg: f64,
    pub finish_deg: f64,
}

impl AxisSpan {
    /// Latitude span: top and bottom edges of the viewport
    pub fn latitude<P: Projection>(mapper: &SpaceMapper, projection: &ProjectionAdapter<P>) -> Self {
        let screen = mapper.screen();
        Self {
            start_px: screen.top,
            finish_px: screen.bottom,
            world_size: mapper.world_size(),
            start_deg: projection.inverse(0.0, mapper.world_to_meters(screen.top)).lat,
            finish_deg: projection.inverse(0.0, mapper.world_to_meters(screen.bottom)).lat,
        }
    }

    /// Longitude span: left and right edges of the viewport
    pub fn longitude<P: Projection>(mapper: &SpaceMapper, projection: &ProjectionAdapter<P>) -> Self {
        let screen = mapper.screen();
        Self {
            start_px: screen.left,
            finish_px: screen.right,
            world_size: mapper.world_size(),
            start_deg: projection.inverse(mapper.world_to_meters(screen.left), 0.0).lng,
            finish_deg: projection.inverse(mapper.world_to_meters(screen.right), 0.0).lng,
        }
    }

    pub fn seam(&self) -> f64 {
        self.world_size / 2.0
    }
}

/// Placement of the viewport along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeRule {
    /// Past both world edges
    FullBothEdges,
    /// Past the near edge and across the seam
    FullFromNearEdge,
    /// Past the far edge and before the seam
    FullFromFarEdge,
    /// Before the seam with the near edge past the world origin
    BeforeSeamClipped,
    BeforeSeam,
    /// After the seam with the far edge past the world end
    AfterSeamClipped,
    AfterSeam,
    /// Across the seam, inside both edges
    Straddle,
}

fn past_both_edges(span: &AxisSpan) -> bool {
    span.start_px < 0.0 && span.finish_px > span.world_size
}

fn past_near_edge_across_seam(span: &AxisSpan) -> bool {
    span.start_px < 0.0 && span.finish_px > span.seam()
}

fn past_far_edge_before_seam(span: &AxisSpan) -> bool {
    span.finish_px > span.world_size && span.start_px < span.seam()
}

fn before_seam_past_near_edge(span: &AxisSpan) -> bool {
    span.finish_px < span.seam() && span.start_px < 0.0
}

fn before_seam(span: &AxisSpan) -> bool {
    span.finish_px < span.seam()
}

fn after_seam_past_far_edge(span: &AxisSpan) -> bool {
    span.start_px > span.seam() && span.finish_px > span.world_size
}

fn after_seam(span: &AxisSpan) -> bool {
    span.start_px > span.seam()
}

const RULES: [(fn(&AxisSpan) -> bool, RangeRule); 7] = [
    (past_both_edges, RangeRule::FullBothEdges),
    (past_near_edge_across_seam, RangeRule::FullFromNearEdge),
    (past_far_edge_before_seam, RangeRule::FullFromFarEdge),
    (before_seam_past_near_edge, RangeRule::BeforeSeamClipped),
    (before_seam, RangeRule::BeforeSeam),
    (after_seam_past_far_edge, RangeRule::AfterSeamClipped),
    (after_seam, RangeRule::AfterSeam),
];

impl RangeRule {
    pub fn classify(span: &AxisSpan) -> RangeRule {
        RULES
            .iter()
            .find(|(matches, _)| matches(span))
            .map(|(_, rule)| *rule)
            .unwrap_or(RangeRule::Straddle)
    }

    pub fn is_full(&self) -> bool {
        matches!(
            self,
            RangeRule::FullBothEdges | RangeRule::FullFromNearEdge | RangeRule::FullFromFarEdge
        )
    }
}

/// Inclusive range of absolute degree values to scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRange {
    pub start: f64,
    pub end: f64,
}

impl StepRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn full(axis: Axis) -> Self {
        Self::new(0.0, axis.limit())
    }
}

fn snapped_ratio(value: f64, step: f64) -> f64 {
    let ratio = value / step;
    let nearest = ratio.round();
    if (ratio - nearest).abs() < MULTIPLE_TOLERANCE {
        nearest
    } else {
        ratio
    }
}

/// Largest multiple of `step` not above `value` (`23, 10 → 20`)
pub fn floor_to_multiple(value: f64, step: f64) -> f64 {
    snapped_ratio(value, step).floor() * step
}

/// Smallest multiple of `step` not below `value` (`23, 10 → 30`)
pub fn ceil_to_multiple(value: f64, step: f64) -> f64 {
    snapped_ratio(value, step).ceil() * step
}

/// Range of multiples of `step` to scan for one axis. `step` must be positive.
pub fn select_range(span: &AxisSpan, step: f64, axis: Axis) -> StepRange {
    let rule = RangeRule::classify(span);
    let limit = axis.limit();
    let start_deg = span.start_deg.abs();
    let finish_deg = span.finish_deg.abs();

    // Only one edge is forced to the limit in each clipped rule; the
    // opposite edge keeps its converted value.
    let range = match rule {
        RangeRule::FullBothEdges | RangeRule::FullFromNearEdge | RangeRule::FullFromFarEdge => {
            StepRange::full(axis)
        }
        RangeRule::BeforeSeamClipped => StepRange::new(
            floor_to_multiple(finish_deg, step),
            ceil_to_multiple(limit, step),
        ),
        RangeRule::BeforeSeam => StepRange::new(
            floor_to_multiple(finish_deg, step),
            ceil_to_multiple(start_deg, step),
        ),
        RangeRule::AfterSeamClipped => StepRange::new(
            floor_to_multiple(start_deg, step),
            ceil_to_multiple(limit, step),
        ),
        RangeRule::AfterSeam => StepRange::new(
            floor_to_multiple(start_deg, step),
            ceil_to_multiple(finish_deg, step),
        ),
        RangeRule::Straddle => StepRange::new(
            0.0,
            ceil_to_multiple(start_deg, step).max(ceil_to_multiple(finish_deg, step)),
        ),
    };

    log::trace!("{} span {:?} -> {:?} {:?}", axis, span, rule, range);
    range
}

/// Every value to visit in `range`, in ascending order.
///
/// Values are `range.start + k * step`. When the next value would pass
/// `limit`, the limit itself is visited instead and the list ends there, so
/// a pole or the antimeridian is always considered even when `step` does
/// not divide it.
pub fn step_values(range: StepRange, step: f64, limit: f64) -> Vec<f64> {
    let mut values = Vec::new();
    if !(step.is_finite() && step > 0.0) || !(range.start.is_finite() && range.end.is_finite()) {
        return values;
    }

    let tolerance = step * MULTIPLE_TOLERANCE;
    let mut k = 0.0_f64;
    loop {
        let raw = range.start + k * step;
        let value = if raw > limit - tolerance { limit } else { raw };
        if value > range.end + tolerance {
            break;
        }
        values.push(value);
        if value >= limit {
            break;
        }
        k += 1.0;
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start_px: f64, finish_px: f64, start_deg: f64, finish_deg: f64) -> AxisSpan {
        AxisSpan {
            start_px,
            finish_px,
            world_size: 1000.0,
            start_deg,
            finish_deg,
        }
    }

    #[test]
    fn test_rounding_to_multiples() {
        assert_eq!(floor_to_multiple(23.0, 10.0), 20.0);
        assert_eq!(ceil_to_multiple(23.0, 10.0), 30.0);
        assert_eq!(floor_to_multiple(30.0, 10.0), 30.0);
        assert_eq!(ceil_to_multiple(30.0, 10.0), 30.0);
        assert_eq!(ceil_to_multiple(85.0, 30.0), 90.0);
        assert_eq!(floor_to_multiple(0.0, 7.0), 0.0);
        // 0.3 / 0.1 is 2.9999999999999996 in floating point
        assert!((floor_to_multiple(0.3, 0.1) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_rule_table() {
        let cases = [
            (span(-10.0, 1010.0, 85.0, 85.0), RangeRule::FullBothEdges),
            (span(-10.0, 600.0, 85.0, 20.0), RangeRule::FullFromNearEdge),
            (span(400.0, 1010.0, 20.0, 85.0), RangeRule::FullFromFarEdge),
            (span(-10.0, 400.0, 85.0, 20.0), RangeRule::BeforeSeamClipped),
            (span(100.0, 400.0, 70.0, 20.0), RangeRule::BeforeSeam),
            (span(600.0, 1010.0, 20.0, 85.0), RangeRule::AfterSeamClipped),
            (span(600.0, 900.0, 20.0, 70.0), RangeRule::AfterSeam),
            (span(400.0, 600.0, 20.0, 20.0), RangeRule::Straddle),
        ];
        for (span, expected) in cases {
            assert_eq!(RangeRule::classify(&span), expected, "{:?}", span);
        }
    }

    #[test]
    fn test_rule_priority() {
        // Past both edges wins over every narrower rule
        let wide = span(-5000.0, 5000.0, 85.0, 85.0);
        assert_eq!(RangeRule::classify(&wide), RangeRule::FullBothEdges);
        assert!(RangeRule::classify(&wide).is_full());
        // Touching the seam exactly is neither before nor after it
        assert_eq!(
            RangeRule::classify(&span(100.0, 500.0, 60.0, 0.0)),
            RangeRule::Straddle
        );
    }

    #[test]
    fn test_nan_span_straddles() {
        let broken = span(f64::NAN, f64::NAN, 0.0, 0.0);
        assert_eq!(RangeRule::classify(&broken), RangeRule::Straddle);
        assert_eq!(select_range(&broken, 10.0, Axis::Latitude), StepRange::new(0.0, 0.0));
    }

    #[test]
    fn test_select_range_full() {
        let range = select_range(&span(-10.0, 1010.0, 85.0, 85.0), 30.0, Axis::Longitude);
        assert_eq!(range, StepRange::new(0.0, 180.0));
        let range = select_range(&span(-10.0, 600.0, 85.0, 10.0), 30.0, Axis::Latitude);
        assert_eq!(range, StepRange::new(0.0, 85.0));
    }

    #[test]
    fn test_select_range_one_side() {
        let range = select_range(&span(100.0, 400.0, 70.0, 23.0), 10.0, Axis::Latitude);
        assert_eq!(range, StepRange::new(20.0, 70.0));
        let range = select_range(&span(600.0, 900.0, 23.0, 71.0), 10.0, Axis::Latitude);
        assert_eq!(range, StepRange::new(20.0, 80.0));
    }

    #[test]
    fn test_select_range_clipped_forces_only_one_edge() {
        let range = select_range(&span(-10.0, 400.0, 3.0, 23.0), 10.0, Axis::Latitude);
        assert_eq!(range, StepRange::new(20.0, 90.0));
        let range = select_range(&span(600.0, 1010.0, 23.0, 3.0), 10.0, Axis::Longitude);
        assert_eq!(range, StepRange::new(20.0, 180.0));
    }

    #[test]
    fn test_select_range_straddle() {
        let range = select_range(&span(400.0, 600.0, -12.0, 31.0), 10.0, Axis::Longitude);
        assert_eq!(range, StepRange::new(0.0, 40.0));
    }

    #[test]
    fn test_step_values_plain() {
        assert_eq!(
            step_values(StepRange::new(20.0, 70.0), 10.0, 85.0),
            vec![20.0, 30.0, 40.0, 50.0, 60.0, 70.0]
        );
    }

    #[test]
    fn test_step_values_force_limit() {
        assert_eq!(
            step_values(StepRange::new(0.0, 85.0), 30.0, 85.0),
            vec![0.0, 30.0, 60.0, 85.0]
        );
        assert_eq!(
            step_values(StepRange::new(0.0, 90.0), 30.0, 85.0),
            vec![0.0, 30.0, 60.0, 85.0]
        );
        assert_eq!(
            step_values(StepRange::new(0.0, 180.0), 120.0, 180.0),
            vec![0.0, 120.0, 180.0]
        );
    }

    #[test]
    fn test_step_values_exact_divisor_visits_limit_once() {
        let values = step_values(StepRange::new(0.0, 180.0), 45.0, 180.0);
        assert_eq!(values, vec![0.0, 45.0, 90.0, 135.0, 180.0]);
    }

    #[test]
    fn test_step_values_limit_not_reached() {
        assert_eq!(step_values(StepRange::new(0.0, 30.0), 20.0, 85.0), vec![0.0, 20.0]);
    }

    #[test]
    fn test_step_values_step_larger_than_limit() {
        assert_eq!(step_values(StepRange::new(0.0, 180.0), 120.0, 85.0), vec![0.0, 85.0]);
    }

    #[test]
    fn test_step_values_small_step_is_bounded() {
        let values = step_values(StepRange::new(0.0, 85.0), 0.001, 85.0);
        assert_eq!(values.len(), 85_001);
        assert_eq!(*values.last().unwrap(), 85.0);
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_step_values_rejects_bad_step() {
        assert!(step_values(StepRange::new(0.0, 85.0), 0.0, 85.0).is_empty());
        assert!(step_values(StepRange::new(0.0, 85.0), -1.0, 85.0).is_empty());
        assert!(step_values(StepRange::new(0.0, 85.0), f64::NAN, 85.0).is_empty());
    }
}

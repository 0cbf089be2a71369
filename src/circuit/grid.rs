//! Grid construction: the full lattice a circuit is pruned from.
//!
//! A circuit starts as a rectangular lattice of horizontal and vertical
//! grid lines. Each line is a chain of unit-typed segments whose lengths
//! are the spacings between the perpendicular lines. The lattice is
//! partitioned into the four boundary (outline) chains and the interior
//! chains strictly between them; the pruner removes from each partition
//! independently.

use std::collections::BTreeSet;
use std::ops::Range;

use rand::Rng;

use crate::circuit::Segment;
use crate::error::{CircuitgenError, Result};

/// Valid number of grid lines per orientation, half-open.
pub const LINE_COUNT_RANGE: Range<usize> = 2..5;

/// Valid spacing between consecutive grid lines, half-open.
pub const SPACING_RANGE: Range<i64> = 2..4;

/// Orientation of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Build one grid line as a chain of adjacent segments.
///
/// Segments are laid end-to-end starting at `start` along the chain's own
/// axis, all sharing `offset` on the perpendicular axis. Consecutive
/// segments share exactly one endpoint and no two segments overlap.
pub fn line_chain(
    lengths: &[i64],
    orientation: Orientation,
    offset: i64,
    start: i64,
) -> BTreeSet<Segment> {
    let mut segments = BTreeSet::new();
    let mut pos = start;
    for &length in lengths {
        let next = pos + length;
        let segment = match orientation {
            Orientation::Horizontal => Segment::new((pos, offset), (next, offset)),
            Orientation::Vertical => Segment::new((offset, pos), (offset, next)),
        };
        segments.insert(segment);
        pos = next;
    }
    segments
}

/// Build the segments of all interior grid lines.
///
/// Interior vertical lines sit at the prefix sums of `horizontal_spacings`
/// and carry a chain of `vertical_spacings` lengths; interior horizontal
/// lines symmetrically. With only two lines in an orientation there are no
/// interior lines of that orientation and its contribution is empty; this
/// is the valid minimal case, not an error.
///
/// Each spacing list must have one entry per gap between the perpendicular
/// lines: `|horizontal_spacings| = num_vertical_lines - 1` and
/// `|vertical_spacings| = num_horizontal_lines - 1`. Inconsistent lengths
/// are an invariant violation, fatal in debug builds; [`GridSpec`] upholds
/// this by construction.
pub fn interior_segments(
    num_vertical_lines: usize,
    num_horizontal_lines: usize,
    horizontal_spacings: &[i64],
    vertical_spacings: &[i64],
) -> BTreeSet<Segment> {
    debug_assert!(
        horizontal_spacings.len() + 1 == num_vertical_lines,
        "{} horizontal spacings inconsistent with {num_vertical_lines} vertical lines",
        horizontal_spacings.len()
    );
    debug_assert!(
        vertical_spacings.len() + 1 == num_horizontal_lines,
        "{} vertical spacings inconsistent with {num_horizontal_lines} horizontal lines",
        vertical_spacings.len()
    );

    let mut segments = BTreeSet::new();

    for line in 1..num_vertical_lines.saturating_sub(1) {
        let offset: i64 = horizontal_spacings[..line].iter().sum();
        segments.extend(line_chain(vertical_spacings, Orientation::Vertical, offset, 0));
    }

    for line in 1..num_horizontal_lines.saturating_sub(1) {
        let offset: i64 = vertical_spacings[..line].iter().sum();
        segments.extend(line_chain(
            horizontal_spacings,
            Orientation::Horizontal,
            offset,
            0,
        ));
    }

    segments
}

/// Build the segments of the four boundary grid lines.
///
/// Yields `2 * |vertical_spacings| + 2 * |horizontal_spacings|` segments:
/// each boundary chain has as many segments as spacing entries in the
/// perpendicular list.
pub fn outline_segments(
    horizontal_spacings: &[i64],
    vertical_spacings: &[i64],
) -> BTreeSet<Segment> {
    let width: i64 = horizontal_spacings.iter().sum();
    let height: i64 = vertical_spacings.iter().sum();

    let mut segments = BTreeSet::new();
    segments.extend(line_chain(vertical_spacings, Orientation::Vertical, 0, 0));
    segments.extend(line_chain(vertical_spacings, Orientation::Vertical, width, 0));
    segments.extend(line_chain(horizontal_spacings, Orientation::Horizontal, 0, 0));
    segments.extend(line_chain(
        horizontal_spacings,
        Orientation::Horizontal,
        height,
        0,
    ));
    segments
}

/// The sampled shape of one circuit's lattice.
///
/// Validated on construction: line counts and spacings outside their
/// configured ranges are rejected before any segment is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSpec {
    num_vertical_lines: usize,
    num_horizontal_lines: usize,
    horizontal_spacings: Vec<i64>,
    vertical_spacings: Vec<i64>,
}

impl GridSpec {
    /// Create a grid spec, rejecting out-of-range parameters.
    pub fn new(
        num_vertical_lines: usize,
        num_horizontal_lines: usize,
        horizontal_spacings: Vec<i64>,
        vertical_spacings: Vec<i64>,
    ) -> Result<Self> {
        if !LINE_COUNT_RANGE.contains(&num_vertical_lines) {
            return Err(CircuitgenError::invalid_grid(format!(
                "{num_vertical_lines} vertical lines outside {LINE_COUNT_RANGE:?}"
            )));
        }
        if !LINE_COUNT_RANGE.contains(&num_horizontal_lines) {
            return Err(CircuitgenError::invalid_grid(format!(
                "{num_horizontal_lines} horizontal lines outside {LINE_COUNT_RANGE:?}"
            )));
        }
        if horizontal_spacings.len() != num_vertical_lines - 1 {
            return Err(CircuitgenError::invalid_grid(format!(
                "expected {} horizontal spacings, got {}",
                num_vertical_lines - 1,
                horizontal_spacings.len()
            )));
        }
        if vertical_spacings.len() != num_horizontal_lines - 1 {
            return Err(CircuitgenError::invalid_grid(format!(
                "expected {} vertical spacings, got {}",
                num_horizontal_lines - 1,
                vertical_spacings.len()
            )));
        }
        for &spacing in horizontal_spacings.iter().chain(vertical_spacings.iter()) {
            if !SPACING_RANGE.contains(&spacing) {
                return Err(CircuitgenError::invalid_grid(format!(
                    "spacing {spacing} outside {SPACING_RANGE:?}"
                )));
            }
        }
        Ok(Self {
            num_vertical_lines,
            num_horizontal_lines,
            horizontal_spacings,
            vertical_spacings,
        })
    }

    /// Draw a random grid shape from the configured ranges.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let num_vertical_lines = rng.random_range(LINE_COUNT_RANGE);
        let num_horizontal_lines = rng.random_range(LINE_COUNT_RANGE);
        let horizontal_spacings = (0..num_vertical_lines - 1)
            .map(|_| rng.random_range(SPACING_RANGE))
            .collect();
        let vertical_spacings = (0..num_horizontal_lines - 1)
            .map(|_| rng.random_range(SPACING_RANGE))
            .collect();
        Self {
            num_vertical_lines,
            num_horizontal_lines,
            horizontal_spacings,
            vertical_spacings,
        }
    }

    /// Segments of the interior grid lines.
    pub fn interior_segments(&self) -> BTreeSet<Segment> {
        interior_segments(
            self.num_vertical_lines,
            self.num_horizontal_lines,
            &self.horizontal_spacings,
            &self.vertical_spacings,
        )
    }

    /// Segments of the four boundary grid lines.
    pub fn outline_segments(&self) -> BTreeSet<Segment> {
        outline_segments(&self.horizontal_spacings, &self.vertical_spacings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn set(segments: impl IntoIterator<Item = Segment>) -> BTreeSet<Segment> {
        segments.into_iter().collect()
    }

    #[test]
    fn test_vertical_chain() {
        let segments = line_chain(&[2, 3], Orientation::Vertical, 2, 0);
        let expected = set([
            Segment::new((2, 0), (2, 2)),
            Segment::new((2, 2), (2, 5)),
        ]);
        assert_eq!(segments, expected);
    }

    #[test]
    fn test_horizontal_chain() {
        let segments = line_chain(&[2], Orientation::Horizontal, 0, 5);
        assert_eq!(segments, set([Segment::new((5, 0), (7, 0))]));
    }

    #[test]
    fn test_consecutive_chain_segments_share_one_endpoint() {
        let segments: Vec<Segment> = line_chain(&[2, 2, 3], Orientation::Horizontal, 1, 0)
            .into_iter()
            .collect();
        for pair in segments.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn test_minimal_grid_has_no_interior() {
        assert!(interior_segments(2, 2, &[3], &[4]).is_empty());
    }

    #[test]
    fn test_one_interior_horizontal_line() {
        let segments = interior_segments(2, 3, &[3], &[2, 2]);
        assert_eq!(segments, set([Segment::new((0, 2), (3, 2))]));
    }

    #[test]
    fn test_one_interior_vertical_line() {
        let segments = interior_segments(3, 2, &[3, 2], &[2]);
        assert_eq!(segments, set([Segment::new((3, 0), (3, 2))]));
    }

    #[test]
    fn test_two_interior_vertical_lines() {
        let segments = interior_segments(4, 2, &[1, 1, 1], &[2]);
        let expected = set([
            Segment::new((1, 0), (1, 2)),
            Segment::new((2, 0), (2, 2)),
        ]);
        assert_eq!(segments, expected);
    }

    #[test]
    fn test_one_interior_line_each_orientation() {
        let segments = interior_segments(3, 3, &[1, 1], &[4, 4]);
        let expected = set([
            Segment::new((0, 4), (1, 4)),
            Segment::new((1, 4), (2, 4)),
            Segment::new((1, 0), (1, 4)),
            Segment::new((1, 4), (1, 8)),
        ]);
        assert_eq!(segments, expected);
    }

    #[test]
    fn test_outline_single_spacing() {
        let segments = outline_segments(&[3], &[4]);
        let expected = set([
            Segment::new((0, 0), (3, 0)),
            Segment::new((0, 4), (3, 4)),
            Segment::new((0, 0), (0, 4)),
            Segment::new((3, 0), (3, 4)),
        ]);
        assert_eq!(segments, expected);
    }

    #[test]
    fn test_outline_subdivided_square() {
        let segments = outline_segments(&[1, 1], &[1, 1]);
        let expected = set([
            Segment::new((0, 0), (1, 0)),
            Segment::new((1, 0), (2, 0)),
            Segment::new((0, 2), (1, 2)),
            Segment::new((1, 2), (2, 2)),
            Segment::new((0, 0), (0, 1)),
            Segment::new((0, 1), (0, 2)),
            Segment::new((2, 0), (2, 1)),
            Segment::new((2, 1), (2, 2)),
        ]);
        assert_eq!(segments.len(), 8);
        assert_eq!(segments, expected);
    }

    #[test]
    fn test_outline_count_formula() {
        let horizontal = [2, 3, 2];
        let vertical = [2, 2];
        let segments = outline_segments(&horizontal, &vertical);
        assert_eq!(segments.len(), 2 * vertical.len() + 2 * horizontal.len());
    }

    #[test]
    #[should_panic(expected = "inconsistent with")]
    #[cfg(debug_assertions)]
    fn test_interior_rejects_inconsistent_spacing_count() {
        let _ = interior_segments(4, 2, &[1, 1], &[2]);
    }

    #[test]
    fn test_spec_rejects_line_count_out_of_range() {
        assert!(GridSpec::new(1, 3, vec![], vec![2, 2]).is_err());
        assert!(GridSpec::new(5, 3, vec![2, 2, 2, 2], vec![2, 2]).is_err());
    }

    #[test]
    fn test_spec_rejects_spacing_out_of_range() {
        assert!(GridSpec::new(3, 3, vec![1, 2], vec![2, 2]).is_err());
        assert!(GridSpec::new(3, 3, vec![2, 4], vec![2, 2]).is_err());
    }

    #[test]
    fn test_spec_rejects_mismatched_spacing_length() {
        assert!(GridSpec::new(3, 3, vec![2], vec![2, 2]).is_err());
    }

    #[test]
    fn test_sampled_spec_is_always_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let spec = GridSpec::sample(&mut rng);
            assert!(GridSpec::new(
                spec.num_vertical_lines,
                spec.num_horizontal_lines,
                spec.horizontal_spacings.clone(),
                spec.vertical_spacings.clone(),
            )
            .is_ok());
        }
    }
}

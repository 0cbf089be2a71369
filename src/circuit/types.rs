//! Core types for circuit structure representation.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::bipole::Bipole;

/// A point on the implicit unit grid.
///
/// `x` increases rightward, `y` increases upward in generation order. The
/// axis sense is an internal convention; only the relative layout matters
/// to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// Create a new grid position.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A directed geometric edge between two grid positions, optionally typed
/// as a circuit element.
///
/// Identity (equality, hashing, ordering) is defined over
/// `(from, to, kind)`. The label is decorative metadata and never
/// participates in identity.
///
/// A segment is built in two stages: endpoints first via [`Segment::new`],
/// then typed via [`Segment::with_kind`] / [`Segment::with_label`] before it
/// enters any collection keyed by the full identity. Segments are never
/// mutated after insertion.
#[derive(Debug, Clone)]
pub struct Segment {
    pub from: Position,
    pub to: Position,
    /// Element type; unset while the segment is pure geometry
    pub kind: Option<Bipole>,
    /// Optional legend label, e.g. `$R_{1}$`
    pub label: Option<String>,
}

impl Segment {
    /// Create an untyped segment between two distinct positions.
    ///
    /// Zero-length segments are an invariant violation, fatal in debug
    /// builds.
    pub fn new(from: impl Into<Position>, to: impl Into<Position>) -> Self {
        let (from, to) = (from.into(), to.into());
        debug_assert!(from != to, "zero-length segment at {from}");
        Self {
            from,
            to,
            kind: None,
            label: None,
        }
    }

    /// Return this segment typed as the given element.
    pub fn with_kind(self, kind: Bipole) -> Self {
        Self {
            kind: Some(kind),
            ..self
        }
    }

    /// Return this segment carrying a legend label.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    /// The identity tuple: endpoints and element type, label excluded.
    fn identity(&self) -> (Position, Position, Option<Bipole>) {
        (self.from, self.to, self.kind)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

/// The final set of segments after pruning and typing: one synthetic
/// training example's structure.
///
/// Backed by a [`BTreeSet`], which gives both set semantics (no duplicate
/// segments under identity) and a canonical iteration order sorted by
/// `(from, to, kind)` so serialization is reproducible and diffable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Circuit {
    segments: BTreeSet<Segment>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the circuit has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate segments in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Whether the circuit contains a segment with this identity.
    pub fn contains(&self, segment: &Segment) -> bool {
        self.segments.contains(segment)
    }
}

impl From<BTreeSet<Segment>> for Circuit {
    fn from(segments: BTreeSet<Segment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Segment> for Circuit {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Segment;
    type IntoIter = std::collections::btree_set::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 10).to_string(), "(3, 10)");
    }

    #[test]
    fn test_identity_includes_kind() {
        let wire = Segment::new((0, 0), (2, 0)).with_kind(Bipole::Short);
        let cap = Segment::new((0, 0), (2, 0)).with_kind(Bipole::Capacitor);
        assert_ne!(wire, cap);

        let set: BTreeSet<Segment> = [wire, cap].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_identity_excludes_label() {
        let plain = Segment::new((0, 0), (2, 0)).with_kind(Bipole::Capacitor);
        let labeled = Segment::new((0, 0), (2, 0))
            .with_kind(Bipole::Capacitor)
            .with_label("$C_{1}$");
        assert_eq!(plain, labeled);

        let set: BTreeSet<Segment> = [plain, labeled].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_reverse_is_distinct() {
        // Directed as constructed; canonicalization is the builder's job.
        let forward = Segment::new((0, 0), (2, 0));
        let reverse = Segment::new((2, 0), (0, 0));
        assert_ne!(forward, reverse);
    }

    #[test]
    #[should_panic(expected = "zero-length segment")]
    #[cfg(debug_assertions)]
    fn test_zero_length_segment_panics() {
        let _ = Segment::new((1, 1), (1, 1));
    }

    #[test]
    fn test_circuit_orders_segments() {
        let circuit: Circuit = [
            Segment::new((3, 0), (3, 4)),
            Segment::new((0, 0), (3, 0)),
            Segment::new((0, 0), (0, 4)),
        ]
        .into_iter()
        .collect();

        let froms: Vec<Position> = circuit.iter().map(|s| s.from).collect();
        assert_eq!(
            froms,
            vec![Position::new(0, 0), Position::new(0, 0), Position::new(3, 0)]
        );
        assert!(circuit.contains(&Segment::new((0, 0), (3, 0))));
        assert!(!circuit.contains(&Segment::new((0, 4), (3, 4))));
    }
}

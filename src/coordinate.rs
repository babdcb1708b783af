use std::fmt::{Display, Formatter};

/// Signed axis value. Paths handed in by players may wander off the grid, so negatives are representable.
pub type Coord = isize;

/// A point `(x, y)` on one of the maze lattices: vertices, edges or cells, depending on context.
///
/// `(0, 0)` is the bottom left corner; `y` grows upward.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Column.
    pub x: Coord,
    /// Row.
    pub y: Coord,
}

impl Coordinate {
    /// Construct a coordinate from its two components.
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// `None` if either axis would overflow.
    pub(crate) fn offset_by(self, rhs: (Coord, Coord)) -> Option<Self> {
        Some(Self::new(self.x.checked_add(rhs.0)?, self.y.checked_add(rhs.1)?))
    }

    /// Manhattan distance to `other`, saturating at [`usize::MAX`].
    pub fn manhattan(&self, other: &Self) -> usize {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// Whether `other` is exactly one unit step away along a single axis.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        matches!((self.x.abs_diff(other.x), self.y.abs_diff(other.y)), (1, 0) | (0, 1))
    }
}

impl From<(Coord, Coord)> for Coordinate {
    fn from(value: (Coord, Coord)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<Coordinate> for (Coord, Coord) {
    fn from(value: Coordinate) -> Self {
        (value.x, value.y)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

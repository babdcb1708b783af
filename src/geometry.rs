//! Steps between lattice points and the numbering of edges.
//!
//! Edges are addressed by a [`Coordinate`] on an interleaved lattice:
//! an even row `y = 2k` holds the horizontal edges between vertices `(x, k)` and `(x + 1, k)`,
//! an odd row `y = 2k + 1` holds the vertical edges between vertices `(x, k)` and `(x, k + 1)`.
//!
//! For a 1x1 maze:
//! ```text
//! (0,2)----(1,2)
//!   |        |
//! (0,1)    (1,1)
//!   |        |
//! (0,0)----(1,0)
//! ```

use strum::VariantArray;
use unordered_pair::UnorderedPair;

use crate::coordinate::Coordinate;

/// A unit step along one axis. Applies equally to vertices and cells.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    /// Toward negative `x`.
    Left,
    /// Toward positive `x`.
    Right,
    /// Toward negative `y`.
    Down,
    /// Toward positive `y`.
    Up,
}

impl Step {
    /// Steps which move to a higher indexed point in row-major order.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Up];

    /// Attempt the step from `location` and return the resulting [`Coordinate`], or [`None`] if it would overflow.
    pub fn attempt_from(&self, location: Coordinate) -> Option<Coordinate> {
        location.offset_by(self.offset())
    }

    /// The `(dx, dy)` this step moves by.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Down => (0, -1),
            Self::Up => (0, 1),
        }
    }

    /// The opposite step.
    pub fn invert(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }

    /// Whether this step runs along the `x` axis.
    pub(crate) fn is_horizontal(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Determine the step leading from `a` to `b`, if they are adjacent.
    pub fn direction_to(a: Coordinate, b: Coordinate) -> Option<Self> {
        Self::VARIANTS.iter().find(|step| step.attempt_from(a) == Some(b)).copied()
    }
}

/// The edge traversed when stepping from `vertex` in direction `step`, or [`None`] if its number overflows.
fn edge_from_vertex(vertex: Coordinate, step: Step) -> Option<Coordinate> {
    match step {
        Step::Right => Some(Coordinate::new(vertex.x, vertex.y.checked_mul(2)?)),
        Step::Left => Some(Coordinate::new(vertex.x.checked_sub(1)?, vertex.y.checked_mul(2)?)),
        Step::Up => Some(Coordinate::new(vertex.x, vertex.y.checked_mul(2)?.checked_add(1)?)),
        // numbered from the lower vertex so both ends of the edge agree
        Step::Down => Some(Coordinate::new(vertex.x, vertex.y.checked_sub(1)?.checked_mul(2)?.checked_add(1)?)),
    }
}

/// The edge joining two vertices, or [`None`] if they are equal, not adjacent, or too far out to number.
///
/// The result does not depend on the order of the pair.
pub fn edge_between(vertices: UnorderedPair<Coordinate>) -> Option<Coordinate> {
    let UnorderedPair(a, b) = vertices;
    Step::direction_to(a, b).and_then(|step| edge_from_vertex(a, step))
}

/// The two vertices an edge joins, lower indexed first, or [`None`] if the upper one can't be represented.
pub fn vertices_of_edge(edge: Coordinate) -> Option<(Coordinate, Coordinate)> {
    let low = Coordinate::new(edge.x, edge.y.div_euclid(2));
    let step = if edge.y.rem_euclid(2) == 0 { Step::Right } else { Step::Up };
    Some((low, step.attempt_from(low)?))
}

/// The edge separating `cell` from its neighbor in direction `step`.
///
/// Derived from the two corner vertices the cell shares with that neighbor.
/// [`None`] only when those corners lie beyond the coordinate range.
pub fn edge_of_cell(cell: Coordinate, step: Step) -> Option<Coordinate> {
    // the shared side starts at this corner
    let corner = match step {
        Step::Left | Step::Down => Some(cell),
        Step::Right | Step::Up => step.attempt_from(cell),
    }?;

    // and runs perpendicular to the step
    let along = if step.is_horizontal() { Step::Up } else { Step::Right };
    edge_from_vertex(corner, along)
}

use thiserror::Error;

use crate::coordinate::{Coord, Coordinate};

/// Reasons a maze definition may be rejected while it is being configured.
///
/// These indicate a malformed puzzle, never a wrong answer; see [`Rejection`](crate::Rejection) for the latter.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MazeError {
    /// Width or height was zero or negative.
    #[error("cell count can't be negative or zero, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: Coord,
        /// Requested height.
        height: Coord,
    },
    /// A vertex or cell position lies outside the maze.
    #[error("position {0} is out of bounds")]
    OutOfBounds(Coordinate),
    /// An endpoint was placed on an inner vertex.
    #[error("position {0} is not an outer vertex")]
    NotOuterVertex(Coordinate),
    /// An origin was placed on an endpoint, or the other way around.
    #[error("position {0} coincides with an origin or endpoint")]
    PositionConflict(Coordinate),
    /// An edge position does not name any edge of the maze.
    #[error("position {0} is not a valid edge")]
    InvalidEdgePosition(Coordinate),
    /// An edge type name did not match any [`EdgeType`](crate::EdgeType).
    #[error("unknown edge type `{0}`")]
    UnknownEdgeType(String),
}

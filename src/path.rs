use std::collections::HashSet;

use itertools::Itertools;
use unordered_pair::UnorderedPair;

use crate::coordinate::Coordinate;
use crate::geometry::edge_between;

/// An ordered sequence of vertices a solution passes through.
///
/// A path knows nothing about any maze; [`Solution`](crate::Solution) combines the two.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    vertices: Vec<Coordinate>,
}

impl Path {
    /// An empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `vertex` to the end of the path.
    pub fn push(&mut self, vertex: impl Into<Coordinate>) -> &mut Self {
        self.vertices.push(vertex.into());
        self
    }

    /// The vertices in drawing order.
    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether no vertex has been added.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex, where the path starts.
    pub fn first(&self) -> Option<Coordinate> {
        self.vertices.first().copied()
    }

    /// Last vertex, where the path ends.
    pub fn last(&self) -> Option<Coordinate> {
        self.vertices.last().copied()
    }

    /// Whether the path passes through `vertex`.
    pub fn contains(&self, vertex: Coordinate) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Consecutive vertex pairs, one per step drawn.
    pub fn steps(&self) -> impl Iterator<Item = UnorderedPair<Coordinate>> + '_ {
        self.vertices.iter()
            .tuple_windows()
            .map(|(a, b)| UnorderedPair(*a, *b))
    }

    /// The edges this path occupies. Steps between non-adjacent vertices contribute nothing.
    pub fn edges(&self) -> HashSet<Coordinate> {
        self.steps().filter_map(edge_between).collect()
    }

    /// Whether this path could exist on some maze:
    /// - it has at least two vertices,
    /// - no vertex repeats,
    /// - every step moves by exactly one unit along one axis.
    pub fn is_valid(&self) -> bool {
        if self.vertices.len() < 2 {
            return false;
        }

        if !self.vertices.iter().all_unique() {
            return false;
        }

        self.vertices.iter()
            .tuple_windows()
            .all(|(a, b)| a.is_adjacent(b))
    }
}

impl FromIterator<Coordinate> for Path {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self { vertices: iter.into_iter().collect() }
    }
}

impl From<Vec<Coordinate>> for Path {
    fn from(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }
}

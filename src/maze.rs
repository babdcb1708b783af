use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use strum::{Display, EnumString};
use unordered_pair::UnorderedPair;

use crate::coordinate::{Coord, Coordinate};
use crate::error::MazeError;
use crate::geometry::edge_between;
use crate::modifier::{CellModifier, VertexModifier};

/// How an edge may be used by a path.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeType {
    /// A regular edge paths may run along.
    #[default]
    Solid,
    /// An edge with a gap in it; paths can't cross.
    Disrupt,
    /// No edge at all.
    Absent,
}

impl EdgeType {
    /// Parse an edge type from its name, e.g. `"Disrupt"`.
    ///
    /// Fails with [`MazeError::UnknownEdgeType`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, MazeError> {
        name.parse().map_err(|_| MazeError::UnknownEdgeType(name.to_owned()))
    }

    /// Whether a path may run along an edge of this type.
    pub fn is_passable(&self) -> bool {
        matches!(self, Self::Solid)
    }
}

/// A rectangular maze of `width * height` cells.
///
/// Vertices are numbered from the bottom left corner; for a 2x2 maze:
/// ```text
/// (0,2)--(1,2)--(2,2)
///   |      |      |
/// (0,1)--(1,1)--(2,1)
///   |      |      |
/// (0,0)--(1,0)--(2,0)
/// ```
/// Cells use the coordinate of their bottom left corner. Edges are numbered as described in [`geometry`](crate::geometry).
///
/// A maze is configured through its mutating methods, which reject anything that would leave it malformed,
/// and is only read afterwards by a [`Solution`](crate::Solution).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Maze {
    width: Coord,
    height: Coord,
    // entrances
    origins: HashSet<Coordinate>,
    // exits, always on the outer frame
    endpoints: HashSet<Coordinate>,
    // anything missing is solid
    edge_types: HashMap<Coordinate, EdgeType>,
    vertex_modifiers: HashMap<Coordinate, VertexModifier>,
    cell_modifiers: HashMap<Coordinate, CellModifier>,
}

impl Maze {
    /// Construct an empty maze of `width * height` cells.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] unless both are positive.
    pub fn new(width: Coord, height: Coord) -> Result<Self, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            origins: Default::default(),
            endpoints: Default::default(),
            edge_types: Default::default(),
            vertex_modifiers: Default::default(),
            cell_modifiers: Default::default(),
        })
    }

    /// Cell count along `x`.
    pub fn width(&self) -> Coord {
        self.width
    }

    /// Cell count along `y`.
    pub fn height(&self) -> Coord {
        self.height
    }

    /// Whether `vertex` lies in `[0, width] x [0, height]`.
    pub fn contains_vertex(&self, vertex: Coordinate) -> bool {
        (0..=self.width).contains(&vertex.x) && (0..=self.height).contains(&vertex.y)
    }

    /// Whether `cell` lies in `[0, width) x [0, height)`.
    pub fn contains_cell(&self, cell: Coordinate) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Whether `edge` names an edge of this maze.
    pub fn contains_edge(&self, edge: Coordinate) -> bool {
        if edge.x < 0 || edge.y < 0 {
            return false;
        }
        // every non-negative row fits when twice the height does not
        if self.height.checked_mul(2).is_some_and(|top| edge.y > top) {
            return false;
        }

        if edge.y % 2 == 0 {
            // horizontal
            edge.x < self.width
        } else {
            // vertical
            edge.x <= self.width
        }
    }

    /// Whether `vertex` sits on the outer frame of the maze. Does not check bounds.
    pub fn is_outer_vertex(&self, vertex: Coordinate) -> bool {
        vertex.x == 0 || vertex.x == self.width || vertex.y == 0 || vertex.y == self.height
    }

    /// Fails with [`MazeError::OutOfBounds`] unless [`Self::contains_vertex`].
    pub fn verify_vertex_position(&self, vertex: Coordinate) -> Result<(), MazeError> {
        match self.contains_vertex(vertex) {
            true => Ok(()),
            false => Err(MazeError::OutOfBounds(vertex)),
        }
    }

    /// Fails with [`MazeError::OutOfBounds`] unless [`Self::contains_cell`].
    pub fn verify_cell_position(&self, cell: Coordinate) -> Result<(), MazeError> {
        match self.contains_cell(cell) {
            true => Ok(()),
            false => Err(MazeError::OutOfBounds(cell)),
        }
    }

    /// Fails with [`MazeError::InvalidEdgePosition`] unless [`Self::contains_edge`].
    pub fn verify_edge_position(&self, edge: Coordinate) -> Result<(), MazeError> {
        match self.contains_edge(edge) {
            true => Ok(()),
            false => Err(MazeError::InvalidEdgePosition(edge)),
        }
    }

    /// Add a vertex a solution may start from. Adding the same origin again does nothing.
    ///
    /// Fails with [`MazeError::OutOfBounds`] or, if `vertex` is already an endpoint, [`MazeError::PositionConflict`].
    pub fn add_origin(&mut self, vertex: impl Into<Coordinate>) -> Result<&mut Self, MazeError> {
        let vertex = vertex.into();
        self.verify_vertex_position(vertex)?;
        if self.endpoints.contains(&vertex) {
            return Err(MazeError::PositionConflict(vertex));
        }

        if self.origins.insert(vertex) {
            log::trace!("added origin {vertex}");
        }
        Ok(self)
    }

    /// Add a vertex a solution may end on. Adding the same endpoint again does nothing.
    ///
    /// Fails with [`MazeError::OutOfBounds`], [`MazeError::NotOuterVertex`] for inner vertices,
    /// or, if `vertex` is already an origin, [`MazeError::PositionConflict`].
    pub fn add_endpoint(&mut self, vertex: impl Into<Coordinate>) -> Result<&mut Self, MazeError> {
        let vertex = vertex.into();
        self.verify_vertex_position(vertex)?;
        if !self.is_outer_vertex(vertex) {
            return Err(MazeError::NotOuterVertex(vertex));
        }
        if self.origins.contains(&vertex) {
            return Err(MazeError::PositionConflict(vertex));
        }

        if self.endpoints.insert(vertex) {
            log::trace!("added endpoint {vertex}");
        }
        Ok(self)
    }

    /// Remove an origin, returning whether it was present.
    pub fn remove_origin(&mut self, vertex: impl Into<Coordinate>) -> bool {
        self.origins.remove(&vertex.into())
    }

    /// Remove an endpoint, returning whether it was present.
    pub fn remove_endpoint(&mut self, vertex: impl Into<Coordinate>) -> bool {
        self.endpoints.remove(&vertex.into())
    }

    /// Set the type of the edge at `edge`, replacing whatever was there.
    ///
    /// Fails with [`MazeError::InvalidEdgePosition`] if `edge` is not an edge of this maze.
    pub fn update_edge(&mut self, edge: impl Into<Coordinate>, edge_type: EdgeType) -> Result<&mut Self, MazeError> {
        let edge = edge.into();
        self.verify_edge_position(edge)?;

        log::trace!("edge {edge} is now {edge_type}");
        self.edge_types.insert(edge, edge_type);
        Ok(self)
    }

    /// [`Self::update_edge`] with the type given by name.
    ///
    /// Additionally fails with [`MazeError::UnknownEdgeType`] if `edge_type` names no [`EdgeType`].
    pub fn update_edge_named(&mut self, edge: impl Into<Coordinate>, edge_type: &str) -> Result<&mut Self, MazeError> {
        let edge_type = EdgeType::from_name(edge_type)?;
        self.update_edge(edge, edge_type)
    }

    /// Place `modifier` on a vertex, replacing any modifier already there.
    ///
    /// Fails with [`MazeError::OutOfBounds`] if `vertex` is not on the maze.
    pub fn update_vertex_modifier(&mut self, vertex: impl Into<Coordinate>, modifier: VertexModifier) -> Result<&mut Self, MazeError> {
        let vertex = vertex.into();
        self.verify_vertex_position(vertex)?;

        log::trace!("vertex {vertex} carries {modifier:?}");
        self.vertex_modifiers.insert(vertex, modifier);
        Ok(self)
    }

    /// Place `modifier` on a cell, replacing any modifier already there.
    ///
    /// Fails with [`MazeError::OutOfBounds`] if `cell` is not on the maze.
    pub fn update_cell_modifier(&mut self, cell: impl Into<Coordinate>, modifier: CellModifier) -> Result<&mut Self, MazeError> {
        let cell = cell.into();
        self.verify_cell_position(cell)?;

        log::trace!("cell {cell} carries {modifier:?}");
        self.cell_modifiers.insert(cell, modifier);
        Ok(self)
    }

    /// Remove the modifier on a vertex, returning it if there was one.
    pub fn remove_vertex_modifier(&mut self, vertex: impl Into<Coordinate>) -> Option<VertexModifier> {
        self.vertex_modifiers.remove(&vertex.into())
    }

    /// Remove the modifier on a cell, returning it if there was one.
    pub fn remove_cell_modifier(&mut self, cell: impl Into<Coordinate>) -> Option<CellModifier> {
        self.cell_modifiers.remove(&cell.into())
    }

    /// Vertices a solution may start from.
    pub fn origins(&self) -> &HashSet<Coordinate> {
        &self.origins
    }

    /// Vertices a solution may end on.
    pub fn endpoints(&self) -> &HashSet<Coordinate> {
        &self.endpoints
    }

    /// Edges whose type has been set explicitly.
    pub fn edge_types(&self) -> &HashMap<Coordinate, EdgeType> {
        &self.edge_types
    }

    /// Type of the edge at `edge`, [`EdgeType::Solid`] unless set otherwise.
    pub fn edge_type(&self, edge: Coordinate) -> EdgeType {
        self.edge_types.get(&edge).copied().unwrap_or_default()
    }

    /// Type of the edge joining two vertices, or [`None`] if they are not adjacent.
    pub fn edge_type_between(&self, vertices: UnorderedPair<Coordinate>) -> Option<EdgeType> {
        edge_between(vertices).map(|edge| self.edge_type(edge))
    }

    /// Modifiers placed on vertices.
    pub fn vertex_modifiers(&self) -> &HashMap<Coordinate, VertexModifier> {
        &self.vertex_modifiers
    }

    /// Modifiers placed on cells.
    pub fn cell_modifiers(&self) -> &HashMap<Coordinate, CellModifier> {
        &self.cell_modifiers
    }

    /// Every cell, row by row from the bottom.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        (0..self.height).cartesian_product(0..self.width)
            .map(|(y, x)| Coordinate::new(x, y))
    }
}

//! Plain-data description of a maze, for exchanging puzzles with whatever stores or draws them.

use serde::{Deserialize, Serialize};

use crate::coordinate::{Coord, Coordinate};
use crate::error::MazeError;
use crate::maze::Maze;
use crate::modifier::{CellModifier, VertexModifier};

/// An edge whose type differs from the default.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    /// Edge coordinate.
    pub position: Coordinate,
    /// Name of an [`EdgeType`](crate::EdgeType) variant.
    pub kind: String,
}

/// A modifier together with where it is placed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Placed<M> {
    /// Vertex or cell coordinate.
    pub position: Coordinate,
    /// The modifier.
    #[serde(flatten)]
    pub modifier: M,
}

/// Everything needed to rebuild a [`Maze`].
///
/// Converting into a [`Maze`] goes through the same checks as configuring one by hand,
/// so a malformed definition yields the matching [`MazeError`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MazeDefinition {
    /// Cell count along `x`.
    pub width: Coord,
    /// Cell count along `y`.
    pub height: Coord,
    /// Origin vertices.
    #[serde(default)]
    pub origins: Vec<Coordinate>,
    /// Endpoint vertices.
    #[serde(default)]
    pub endpoints: Vec<Coordinate>,
    /// Non-solid edges.
    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,
    /// Modifiers placed on vertices.
    #[serde(default)]
    pub vertex_modifiers: Vec<Placed<VertexModifier>>,
    /// Modifiers placed on cells.
    #[serde(default)]
    pub cell_modifiers: Vec<Placed<CellModifier>>,
}

impl TryFrom<MazeDefinition> for Maze {
    type Error = MazeError;

    fn try_from(definition: MazeDefinition) -> Result<Self, Self::Error> {
        let mut maze = Maze::new(definition.width, definition.height)?;

        for origin in definition.origins {
            maze.add_origin(origin)?;
        }
        for endpoint in definition.endpoints {
            maze.add_endpoint(endpoint)?;
        }
        for EdgeDefinition { position, kind } in definition.edges {
            maze.update_edge_named(position, &kind)?;
        }
        for Placed { position, modifier } in definition.vertex_modifiers {
            maze.update_vertex_modifier(position, modifier)?;
        }
        for Placed { position, modifier } in definition.cell_modifiers {
            maze.update_cell_modifier(position, modifier)?;
        }

        Ok(maze)
    }
}

impl From<&Maze> for MazeDefinition {
    fn from(maze: &Maze) -> Self {
        let mut origins = maze.origins().iter().copied().collect::<Vec<_>>();
        origins.sort_unstable();
        let mut endpoints = maze.endpoints().iter().copied().collect::<Vec<_>>();
        endpoints.sort_unstable();

        let mut edges = maze.edge_types().iter()
            .map(|(position, edge_type)| EdgeDefinition { position: *position, kind: edge_type.to_string() })
            .collect::<Vec<_>>();
        edges.sort_unstable_by_key(|edge| edge.position);

        let mut vertex_modifiers = maze.vertex_modifiers().iter()
            .map(|(position, modifier)| Placed { position: *position, modifier: *modifier })
            .collect::<Vec<_>>();
        vertex_modifiers.sort_unstable_by_key(|placed| placed.position);

        let mut cell_modifiers = maze.cell_modifiers().iter()
            .map(|(position, modifier)| Placed { position: *position, modifier: *modifier })
            .collect::<Vec<_>>();
        cell_modifiers.sort_unstable_by_key(|placed| placed.position);

        Self {
            width: maze.width(),
            height: maze.height(),
            origins,
            endpoints,
            edges,
            vertex_modifiers,
            cell_modifiers,
        }
    }
}

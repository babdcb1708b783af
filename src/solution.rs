use thiserror::Error;

use crate::coordinate::Coordinate;
use crate::geometry::edge_between;
use crate::maze::{EdgeType, Maze};
use crate::modifier::Section;
use crate::path::Path;
use crate::region::Partition;

/// Why a [`Solution`] was rejected, naming the first check it failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Rejection {
    /// The path is too short, repeats a vertex or makes a move other than a single unit step.
    #[error("path is malformed")]
    MalformedPath,
    /// The path does not start at an origin.
    #[error("path starts at {0}, which is not an origin")]
    NotFromOrigin(Coordinate),
    /// The path leaves the maze.
    #[error("vertex {0} is not on the maze")]
    VertexOutOfBounds(Coordinate),
    /// The path runs along an edge that can't be used.
    #[error("edge {edge} is {edge_type}")]
    BlockedEdge {
        /// The offending edge.
        edge: Coordinate,
        /// Its type, never [`EdgeType::Solid`].
        edge_type: EdgeType,
    },
    /// The path does not end on an endpoint.
    #[error("path ends at {0}, which is not an endpoint")]
    NotToEndpoint(Coordinate),
    /// The modifier on this vertex is not satisfied.
    #[error("vertex modifier at {0} is not satisfied")]
    VertexModifier(Coordinate),
    /// The modifier on this cell is not satisfied by its region.
    #[error("cell modifier at {0} is not satisfied")]
    CellModifier(Coordinate),
}

/// A candidate `path` for `maze`, checked on demand.
///
/// Checking never fails loudly: any problem with the path, including vertices off the maze, is a [`Rejection`].
#[derive(Clone, Copy, Debug)]
pub struct Solution<'a> {
    maze: &'a Maze,
    path: &'a Path,
}

impl<'a> Solution<'a> {
    /// Pair a path with the maze it claims to solve.
    pub fn new(maze: &'a Maze, path: &'a Path) -> Self {
        Self { maze, path }
    }

    /// The maze being solved.
    pub fn maze(&self) -> &'a Maze {
        self.maze
    }

    /// The candidate path.
    pub fn path(&self) -> &'a Path {
        self.path
    }

    /// Run every check in order, stopping at the first one to fail.
    ///
    /// 1. the path is valid by itself,
    /// 2. it runs from an origin to an endpoint over solid edges of the maze,
    /// 3. every vertex modifier is satisfied,
    /// 4. every cell modifier is satisfied by its region.
    pub fn verify(&self) -> Result<(), Rejection> {
        let verdict = self.verify_path()
            .and_then(|_| self.verify_vertex_modifiers())
            .and_then(|_| self.verify_cell_modifiers());

        if let Err(rejection) = verdict {
            log::debug!("rejected solution: {rejection}");
        }
        verdict
    }

    /// Whether this is a full solution; see [`Self::verify`] for the reason when it is not.
    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }

    /// Whether the path fits the maze, ignoring modifiers.
    pub fn is_path_valid(&self) -> bool {
        self.verify_path().is_ok()
    }

    /// Whether every vertex modifier is satisfied. Does not look at the path's validity.
    pub fn check_vertex_modifiers(&self) -> bool {
        self.verify_vertex_modifiers().is_ok()
    }

    /// Whether every cell modifier is satisfied. Does not look at the path's validity.
    pub fn check_cell_modifiers(&self) -> bool {
        self.verify_cell_modifiers().is_ok()
    }

    /// The regions the path splits the maze into.
    pub fn regions(&self) -> Partition {
        Partition::new(self.maze, &self.path.edges())
    }

    fn verify_path(&self) -> Result<(), Rejection> {
        if !self.path.is_valid() {
            return Err(Rejection::MalformedPath);
        }

        let vertices = self.path.vertices();
        let (first, last) = match (vertices.first(), vertices.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(Rejection::MalformedPath),
        };

        if !self.maze.origins().contains(&first) {
            return Err(Rejection::NotFromOrigin(first));
        }

        for (step, vertex) in self.path.steps().zip(vertices.iter().skip(1)) {
            if !self.maze.contains_vertex(*vertex) {
                return Err(Rejection::VertexOutOfBounds(*vertex));
            }

            let edge = edge_between(step).ok_or(Rejection::MalformedPath)?;
            let edge_type = self.maze.edge_type(edge);
            if !edge_type.is_passable() {
                return Err(Rejection::BlockedEdge { edge, edge_type });
            }
        }

        if !self.maze.endpoints().contains(&last) {
            return Err(Rejection::NotToEndpoint(last));
        }

        Ok(())
    }

    fn verify_vertex_modifiers(&self) -> Result<(), Rejection> {
        // sorted so the reported vertex doesn't depend on hashing
        let mut modifiers = self.maze.vertex_modifiers().iter().collect::<Vec<_>>();
        modifiers.sort_unstable_by_key(|(position, _)| **position);

        match modifiers.into_iter().find(|(position, modifier)| !modifier.check(**position, self.path)) {
            Some((position, _)) => Err(Rejection::VertexModifier(*position)),
            None => Ok(()),
        }
    }

    fn verify_cell_modifiers(&self) -> Result<(), Rejection> {
        let cell_modifiers = self.maze.cell_modifiers();
        if cell_modifiers.is_empty() {
            return Ok(());
        }

        for region in self.regions().regions() {
            let mut section = Section::new(region.iter()
                .filter_map(|cell| cell_modifiers.get(cell).map(|modifier| (*cell, *modifier))));
            if section.is_empty() {
                continue;
            }

            if let Some(cell) = section.run_checks().first_invalid() {
                return Err(Rejection::CellModifier(cell));
            }
        }

        Ok(())
    }
}

/// Whether `path` solves `maze`.
pub fn verify(maze: &Maze, path: &Path) -> bool {
    Solution::new(maze, path).is_valid()
}

#![warn(missing_docs)]

//! # `mazecheck`
//!
//! A verifier for grid line-drawing puzzles: draw a line from an origin to an exit of a rectangular maze
//! such that every constraint placed on the maze holds.
//! Begin by configuring a [`Maze`] with [`Maze::new`] and its `add_*` and `update_*` methods,
//! draw a [`Path`] through it, then ask a [`Solution`] (or the shorthand [`verify`]) whether the path solves the maze.
//!
//! Verifying is total: any path, however broken, yields a verdict rather than an error.
//! Only mistakes while configuring a maze are errors, reported as [`MazeError`].
//!
//! # Internals
//! The maze is a planar graph on three lattices sharing one coordinate type:
//! vertices `[0, width] x [0, height]` where the path runs, cells `[0, width) x [0, height)` which carry constraints,
//! and edges, numbered by interleaving horizontal and vertical rows as described in [`geometry`].
//!
//! Checking runs in stages, stopping at the first failure:
//! 1. The path must be valid by itself: at least two vertices, none repeated, each one unit step from the last.
//! 2. It must start at an origin, stay on the maze, use only [solid](EdgeType::Solid) edges and end at an endpoint.
//! 3. Every [`VertexModifier`] must hold for the path.
//! 4. The edges of the path split the cells into regions (see [`Partition`]);
//! every [`CellModifier`] must hold among the other modifiers of its region.

pub use coordinate::{Coord, Coordinate};
#[cfg(feature = "serde")]
pub use definition::{EdgeDefinition, MazeDefinition, Placed};
pub use error::MazeError;
pub use maze::{EdgeType, Maze};
pub use modifier::{CellModifier, Color, Section, SectionEntry, VertexModifier};
pub use path::Path;
pub use region::{Partition, Region};
pub use solution::{verify, Rejection, Solution};

pub(crate) mod coordinate;
#[cfg(feature = "serde")]
pub(crate) mod definition;
pub(crate) mod error;
pub mod geometry;
pub(crate) mod maze;
pub(crate) mod modifier;
pub(crate) mod path;
pub(crate) mod region;
pub(crate) mod solution;

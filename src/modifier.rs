//! Constraints attached to vertices and cells of a maze.
//!
//! Adding a constraint means adding a variant and extending the `match` in its `check`.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::coordinate::Coordinate;
use crate::path::Path;

/// Color of a [`CellModifier::Square`]. Any value; only equality matters.
pub type Color = u32;

/// Constraints checked against the path alone.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum VertexModifier {
    /// The path must pass through this vertex.
    Hexagon,
}

impl VertexModifier {
    /// Whether `path` satisfies this modifier placed at `position`.
    pub fn check(&self, position: Coordinate, path: &Path) -> bool {
        match self {
            Self::Hexagon => path.contains(position),
        }
    }
}

/// Constraints checked against the region of cells they end up in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum CellModifier {
    /// Every square sharing a region must share this color.
    Square {
        /// Color of this square.
        color: Color,
    },
}

impl CellModifier {
    /// Modifiers of a region are checked in ascending priority.
    pub fn priority(&self) -> u32 {
        match self {
            Self::Square { .. } => 1,
        }
    }

    /// The color this modifier carries, if it is colored at all.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Square { color } => Some(*color),
        }
    }

    /// Mark the cells of `section` this modifier is responsible for as valid or invalid.
    pub fn check(&self, section: &mut Section) {
        match self {
            Self::Square { color } => {
                let squares = section.entries.iter()
                    .filter_map(|(cell, entry)| entry.modifier.color().map(|other| (*cell, other)))
                    .collect_vec();

                let valid = squares.iter().all(|(_, other)| other == color);
                for (cell, _) in squares {
                    section.mark(cell, valid);
                }
            }
        }
    }
}

/// A modifier-bearing cell of a [`Section`] and whether it has been found satisfied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SectionEntry {
    /// The modifier placed on this cell.
    pub modifier: CellModifier,
    /// Starts out `false`; set by the modifiers' checks.
    pub valid: bool,
}

/// The modifier-bearing cells of a single region.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Section {
    entries: BTreeMap<Coordinate, SectionEntry>,
}

impl Section {
    /// A section over the given cells and their modifiers, all initially invalid.
    pub fn new(modifiers: impl IntoIterator<Item = (Coordinate, CellModifier)>) -> Self {
        Self {
            entries: modifiers.into_iter()
                .map(|(cell, modifier)| (cell, SectionEntry { modifier, valid: false }))
                .collect(),
        }
    }

    /// Modifier-bearing cells, ordered by coordinate.
    pub fn entries(&self) -> impl Iterator<Item = (&Coordinate, &SectionEntry)> {
        self.entries.iter()
    }

    /// Whether no cell of the region carries a modifier.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record the verdict for `cell`. Cells without a modifier are ignored.
    pub fn mark(&mut self, cell: Coordinate, valid: bool) {
        if let Some(entry) = self.entries.get_mut(&cell) {
            entry.valid = valid;
        }
    }

    /// Run every modifier of the section, lowest priority first.
    pub fn run_checks(&mut self) -> &mut Self {
        let order = self.entries.iter()
            .map(|(cell, entry)| (entry.modifier.priority(), *cell, entry.modifier))
            .sorted_by_key(|(priority, cell, _)| (*priority, *cell))
            .collect_vec();

        for (_, _, modifier) in order {
            modifier.check(self);
        }

        self
    }

    /// The first cell left invalid, if any.
    pub fn first_invalid(&self) -> Option<Coordinate> {
        self.entries.iter()
            .find(|(_, entry)| !entry.valid)
            .map(|(cell, _)| *cell)
    }
}

use std::collections::HashSet;

use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Dfs;

use crate::coordinate::Coordinate;
use crate::geometry::{edge_of_cell, Step};
use crate::maze::Maze;

/// A maximal set of cells reachable from one another without crossing a wall, sorted by coordinate.
pub type Region = Vec<Coordinate>;

/// The cells of a maze split into disjoint [`Region`]s.
#[derive(Clone, Debug)]
pub struct Partition {
    regions: Vec<Region>,
    // region index per cell, indexed (y, x)
    labels: Array2<Option<usize>>,
}

#[inline]
fn as_index(cell: Coordinate) -> Option<(usize, usize)> {
    Some((usize::try_from(cell.y).ok()?, usize::try_from(cell.x).ok()?))
}

impl Partition {
    /// Split the cells of `maze` along `walls`, a set of edge coordinates.
    ///
    /// Two neighboring cells share a region iff the edge between them is not a wall.
    /// Every cell ends up in exactly one region.
    pub fn new(maze: &Maze, walls: &HashSet<Coordinate>) -> Self {
        let cell_count = maze.cells().count();
        let mut graph: UnGraphMap<Coordinate, ()> = UnGraphMap::with_capacity(cell_count, cell_count * 2);

        for cell in maze.cells() {
            graph.add_node(cell);
            // the backward neighbors link to us on their own turn
            for step in Step::FORWARD_VARIANTS {
                let Some(neighbor) = step.attempt_from(cell).filter(|neighbor| maze.contains_cell(*neighbor)) else {
                    continue;
                };
                if edge_of_cell(cell, *step).is_some_and(|edge| !walls.contains(&edge)) {
                    graph.add_edge(cell, neighbor, ());
                }
            }
        }

        let mut labels = Array2::from_elem((maze.height().unsigned_abs(), maze.width().unsigned_abs()), None);
        let mut regions = Vec::new();

        for cell in maze.cells() {
            if as_index(cell).and_then(|index| labels.get(index).copied().flatten()).is_some() {
                continue;
            }

            let label = regions.len();
            let mut region = Region::new();
            // explicit stack; region size is bounded only by the maze
            let mut dfs = Dfs::new(&graph, cell);
            while let Some(found) = dfs.next(&graph) {
                if let Some(slot) = as_index(found).and_then(|index| labels.get_mut(index)) {
                    *slot = Some(label);
                }
                region.push(found);
            }

            region.sort_unstable();
            regions.push(region);
        }

        log::trace!("partitioned {cell_count} cells into {} regions", regions.len());
        Self { regions, labels }
    }

    /// All regions, in order of their lowest cell in row-major order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Consume the partition, keeping only the regions.
    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether there are no regions, which never happens for a valid maze.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// The region containing `cell`, or [`None`] if `cell` is off the maze.
    pub fn region_of(&self, cell: Coordinate) -> Option<&Region> {
        let label = as_index(cell).and_then(|index| self.labels.get(index).copied().flatten())?;
        self.regions.get(label)
    }
}

use hashbrown::HashSet;

use strata_blocks::{Block, BlockKind, BlockStore, Cell};
use strata_geom::GridRange;

use crate::height::HeightMap;

/// Materializes ground blocks for horizontal ranges. Each generated column
/// gets `depth` blocks stacked downward (+y) from the grid-aligned
/// surface. Columns are generated at most once per world instance:
/// overlapping range requests are deduplicated, never double-inserted.
pub struct Terrain {
    depth: i32,
    built: HashSet<i32>,
}

impl Terrain {
    pub fn new(depth: i32) -> Self {
        Self {
            depth,
            built: HashSet::new(),
        }
    }

    /// Ground blocks for every not-yet-built column in `[min_x, max_x)`.
    /// Returns the number of columns materialized by this call.
    pub fn create_in_range(
        &mut self,
        range: GridRange,
        heights: &HeightMap,
        store: &mut BlockStore,
    ) -> usize {
        let block = range.step();
        let mut columns = 0usize;
        for gx in range.columns() {
            if !self.built.insert(gx) {
                continue;
            }
            let surface = heights.surface_y(gx);
            for row in 0..self.depth {
                store.insert(
                    Cell::new(gx, surface + row * block),
                    Block::new(BlockKind::Ground),
                );
            }
            columns += 1;
        }
        if columns > 0 {
            log::debug!(
                target: "gen",
                "terrain [{}, {}) built {} column(s)",
                range.min_x(),
                range.max_x(),
                columns
            );
        }
        columns
    }

    /// Whether the column at `gx` has already been materialized.
    #[inline]
    pub fn is_built(&self, gx: i32) -> bool {
        self.built.contains(&gx)
    }
}

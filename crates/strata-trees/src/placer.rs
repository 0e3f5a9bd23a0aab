use hashbrown::{HashMap, HashSet};

use strata_blocks::{Block, BlockKind, BlockStore, Cell};
use strata_geom::GridRange;
use strata_world::rng::{ColumnRng, SALT_CANOPY, SALT_TREE};
use strata_world::worldgen::{Leaves, Trees};
use strata_world::HeightMap;

use crate::leaf::{Leaf, LeafStore};

/// Decides, per grid column, whether a tree stands there and how tall it
/// is, and materializes trunks and canopies for horizontal ranges.
///
/// Trunk heights are memoized per column and the memo only ever grows.
/// When a column rolls a tree, both neighbor columns are force-memoized to
/// zero at that moment. The write is unconditional: whichever column
/// resolves first wins, so the outcome for a neighbor pair depends on
/// query order. That last-write-wins policy is deliberate and matches the
/// behavior consumers already rely on; it never deletes blocks that were
/// already materialized, it only pins future answers.
pub struct TreePlacer {
    seed: i32,
    block: i32,
    trees: Trees,
    leaves: Leaves,
    memo: HashMap<i32, i32>,
    built: HashSet<i32>,
}

impl TreePlacer {
    pub fn new(seed: i32, block: i32, trees: Trees, leaves: Leaves) -> Self {
        Self {
            seed,
            block,
            trees,
            leaves,
            memo: HashMap::new(),
            built: HashSet::new(),
        }
    }

    /// Memoized trunk height for the column at `gx`, in blocks; 0 means no
    /// tree. Safe for any column, including negative. First call rolls the
    /// column; later calls return the pinned answer.
    pub fn column_height(&mut self, gx: i32) -> i32 {
        if let Some(h) = self.memo.get(&gx) {
            return *h;
        }
        let mut rng = ColumnRng::new(gx, self.seed, SALT_TREE);
        if rng.one_in(self.trees.modulus) {
            let h = self.trees.trunk_min + rng.below(self.trees.trunk_span) as i32;
            self.memo.insert(gx, h);
            // Adjacency suppression is written eagerly and overwrites any
            // earlier entry for the neighbors.
            self.memo.insert(gx + self.block, 0);
            self.memo.insert(gx - self.block, 0);
            h
        } else {
            self.memo.insert(gx, 0);
            0
        }
    }

    /// Whether a tree stands at `gx`. Resolves the column lazily.
    pub fn tree_exists_at(&mut self, gx: i32) -> bool {
        self.column_height(gx) > 0
    }

    /// Materializes trunks and canopies for every not-yet-built column in
    /// `[min_x, max_x)`. Returns the number of trees created.
    pub fn create_in_range(
        &mut self,
        range: GridRange,
        heights: &HeightMap,
        trunks: &mut BlockStore,
        leaves: &mut LeafStore,
    ) -> usize {
        let block = self.block;
        let mut trees = 0usize;
        for gx in range.columns() {
            if !self.built.insert(gx) {
                continue;
            }
            let h = self.column_height(gx);
            if h == 0 {
                continue;
            }
            let surface = heights.surface_y(gx);
            for row in 0..h {
                trunks.insert(
                    Cell::new(gx, surface - (row + 1) * block),
                    Block::new(BlockKind::Trunk),
                );
            }
            let top_y = surface - h * block;
            self.grow_canopy(gx, top_y, h, leaves);
            trees += 1;
        }
        if trees > 0 {
            log::debug!(
                target: "gen",
                "trees [{}, {}) planted {} tree(s)",
                range.min_x(),
                range.max_x(),
                trees
            );
        }
        trees
    }

    /// One canopy: a `w x (w + 2)` candidate grid centered above the trunk
    /// top, `w` the trunk height scaled by the canopy ratio and rounded up
    /// to odd. Cells are visited column-major and each keeps a leaf with
    /// probability `1 - 1/leaf_modulus` drawn sequentially from the canopy
    /// stream, so a canopy's shape is a pure function of `(gx, seed)`.
    fn grow_canopy(&self, gx: i32, top_y: i32, trunk_h: i32, leaves: &mut LeafStore) {
        let block = self.block;
        let mut w = (trunk_h as f32 * self.trees.canopy_ratio) as i32;
        if w % 2 == 0 {
            w += 1;
        }
        let rows = w + 2;
        let start_x = gx - (w / 2) * block;
        let start_y = top_y - (rows / 2) * block;
        let mut rng = ColumnRng::new(gx, self.seed, SALT_CANOPY);
        for i in 0..w {
            for j in 0..rows {
                if rng.one_in(self.trees.leaf_modulus) {
                    continue;
                }
                let cell = Cell::new(start_x + i * block, start_y + j * block);
                leaves.spawn(Leaf::new(cell, block, &self.leaves, self.seed));
            }
        }
    }

    /// Whether the column at `gx` has already been materialized.
    #[inline]
    pub fn is_built(&self, gx: i32) -> bool {
        self.built.contains(&gx)
    }

    #[inline]
    pub fn block_size(&self) -> i32 {
        self.block
    }
}

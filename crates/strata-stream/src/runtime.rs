use strata_blocks::BlockStore;
use strata_geom::align_down;
use strata_trees::{LeafStore, TreePlacer};
use strata_world::{HeightMap, Terrain, WorldGenConfig};

use crate::evict::BoundaryEvictor;
use crate::window::WindowController;

/// Viewport dimensions, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Owns the generators, the three terrain registries, the window
/// controller, and the two boundary evictors, and drives them once per
/// tick. Single-threaded; every call completes before it returns.
pub struct WorldRuntime {
    block: i32,
    heights: HeightMap,
    terrain: Terrain,
    trees: TreePlacer,
    ground: BlockStore,
    trunks: BlockStore,
    leaves: LeafStore,
    window: WindowController,
    evict_left: BoundaryEvictor,
    evict_right: BoundaryEvictor,
    viewport: Viewport,
    evicted_total: u64,
    tick: u64,
}

impl WorldRuntime {
    /// Builds the world and materializes the initial window.
    pub fn new(seed: i32, viewport: Viewport, cfg: &WorldGenConfig) -> Self {
        let block = cfg.block_size;
        let heights = HeightMap::new(seed, viewport.height, cfg);
        let window = WindowController::new(
            viewport.width,
            block,
            cfg.window.outside_blocks,
            cfg.window.inset_blocks,
        );
        let mut rt = Self {
            block,
            heights,
            terrain: Terrain::new(cfg.terrain_depth),
            trees: TreePlacer::new(seed, block, cfg.trees.clone(), cfg.leaves.clone()),
            ground: BlockStore::new(),
            trunks: BlockStore::new(),
            leaves: LeafStore::new(),
            window,
            // Parked beyond the viewport until the first movement update.
            evict_left: BoundaryEvictor::new(-viewport.width, block as f32),
            evict_right: BoundaryEvictor::new(2.0 * viewport.width, block as f32),
            viewport,
            evicted_total: 0,
            tick: 0,
        };
        let initial = rt.window.initial_range();
        rt.terrain
            .create_in_range(initial, &rt.heights, &mut rt.ground);
        rt.trees
            .create_in_range(initial, &rt.heights, &mut rt.trunks, &mut rt.leaves);
        log::info!(
            target: "stream",
            "world seed={} window [{}, {}] ground={} trunks={} leaves={}",
            seed,
            initial.min_x(),
            initial.max_x(),
            rt.ground.len(),
            rt.trunks.len(),
            rt.leaves.len()
        );
        rt
    }

    /// One tick: recompute the window for the viewpoint at `vx`, extend
    /// the frontier, sweep the evictors, and advance every leaf.
    pub fn step(&mut self, dt: f32, vx: f32) {
        self.tick += 1;
        let update = self.window.on_move(vx);
        if let Some(range) = update.left_extension {
            self.terrain
                .create_in_range(range, &self.heights, &mut self.ground);
            self.trees
                .create_in_range(range, &self.heights, &mut self.trunks, &mut self.leaves);
            log::info!(
                target: "stream",
                "[tick {}] extended left [{}, {})",
                self.tick,
                range.min_x(),
                range.max_x()
            );
        }
        if let Some(range) = update.right_extension {
            self.terrain
                .create_in_range(range, &self.heights, &mut self.ground);
            self.trees
                .create_in_range(range, &self.heights, &mut self.trunks, &mut self.leaves);
            log::info!(
                target: "stream",
                "[tick {}] extended right [{}, {})",
                self.tick,
                range.min_x(),
                range.max_x()
            );
        }

        self.evict_left
            .set_center(update.left_edge, self.heights.height_at(update.left_edge));
        self.evict_right
            .set_center(update.right_edge, self.heights.height_at(update.right_edge));
        self.evicted_total += self.sweep_evictors() as u64;

        // Leaves fall against the ground surface of their own column.
        let heights = &self.heights;
        let block = self.block;
        for (_, leaf) in self.leaves.iter_mut() {
            let gx = align_down(leaf.pos().x, block);
            leaf.step(dt, heights.surface_y(gx) as f32);
        }
    }

    fn sweep_evictors(&mut self) -> usize {
        self.evict_left.sweep(
            self.block,
            &mut self.ground,
            &mut self.trunks,
            &mut self.leaves,
        ) + self.evict_right.sweep(
            self.block,
            &mut self.ground,
            &mut self.trunks,
            &mut self.leaves,
        )
    }

    /// Ground elevation at world x. Pure; identical across calls.
    #[inline]
    pub fn height_at(&self, x: f32) -> f32 {
        self.heights.height_at(x)
    }

    /// Grid-aligned top of the surface block in the column containing `x`.
    #[inline]
    pub fn surface_y(&self, gx: i32) -> i32 {
        self.heights.surface_y(gx)
    }

    /// Whether a tree stands at column `gx` (resolves the column lazily).
    #[inline]
    pub fn tree_exists_at(&mut self, gx: i32) -> bool {
        self.trees.tree_exists_at(gx)
    }

    /// First column at or after the viewport center where neither it nor
    /// its right neighbor hosts a tree. A safe place to drop the
    /// controllable entity at startup.
    pub fn spawn_column(&mut self) -> i32 {
        let mut gx = align_down(self.viewport.width / 2.0, self.block);
        while self.trees.tree_exists_at(gx) || self.trees.tree_exists_at(gx + self.block) {
            gx += self.block;
        }
        gx
    }

    #[inline]
    pub fn bounds(&self) -> (i32, i32) {
        self.window.bounds()
    }

    #[inline]
    pub fn ground(&self) -> &BlockStore {
        &self.ground
    }

    #[inline]
    pub fn trunks(&self) -> &BlockStore {
        &self.trunks
    }

    #[inline]
    pub fn leaves(&self) -> &LeafStore {
        &self.leaves
    }

    #[inline]
    pub fn evicted_total(&self) -> u64 {
        self.evicted_total
    }

    #[inline]
    pub fn block_size(&self) -> i32 {
        self.block
    }
}

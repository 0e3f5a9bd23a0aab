use strata_blocks::BlockStore;
use strata_geom::Vec2;
use strata_trees::LeafStore;

/// A movable vertical strip, one block wide, parked just outside the
/// viewport. Anything from the three terrain registries that its footprint
/// touches is destroyed; it can reach nothing else, so the controllable
/// entity and background objects are untouchable by construction.
pub struct BoundaryEvictor {
    pos: Vec2,
    half_w: f32,
    /// Where the strip stood on the previous tick; the sweep covers the
    /// ground crossed since then so fast movement cannot carry entities
    /// through the strip between two ticks.
    prev_x: f32,
}

impl BoundaryEvictor {
    pub fn new(x: f32, width: f32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            half_w: width / 2.0,
            prev_x: x,
        }
    }

    /// Repositions the strip. `y` is the terrain height at the edge; it
    /// only matters for observers, the sweep is full-height.
    pub fn set_center(&mut self, x: f32, y: f32) {
        self.prev_x = self.pos.x;
        self.pos = Vec2::new(x, y);
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos
    }

    /// Removes every ground block, trunk block, and leaf overlapping the
    /// area the strip covered since the previous tick. Removing nothing is
    /// fine; entities already gone are a no-op. Returns the number
    /// destroyed.
    pub fn sweep(
        &mut self,
        size: i32,
        ground: &mut BlockStore,
        trunks: &mut BlockStore,
        leaves: &mut LeafStore,
    ) -> usize {
        let lo = self.prev_x.min(self.pos.x) - self.half_w;
        let hi = self.prev_x.max(self.pos.x) + self.half_w;
        self.prev_x = self.pos.x;
        let mut n = 0usize;
        n += ground.remove_overlapping_x(lo, hi, size);
        n += trunks.remove_overlapping_x(lo, hi, size);
        n += leaves.remove_overlapping_x(lo, hi, size);
        if n > 0 {
            log::debug!(target: "stream", "evictor at {:.0} destroyed {} entit(ies)", self.pos.x, n);
        }
        n
    }
}

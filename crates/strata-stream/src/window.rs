use strata_geom::{GridRange, align_down};

/// Result of one window recomputation: the sub-ranges newly exposed at
/// each edge (to be materialized by both generators) and the raw edge
/// positions for the evictors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowUpdate {
    pub left_extension: Option<GridRange>,
    pub right_extension: Option<GridRange>,
    pub left_edge: f32,
    pub right_edge: f32,
}

/// Owns the generation frontier `[min_x, max_x]`, both block-aligned with
/// `min_x <= max_x`. The bounds track where the controller will extend
/// from next, not exactly what is materialized: on a reversal they shrink
/// without destroying anything (eviction is the boundary entities' job),
/// and the generators' own built-column bookkeeping keeps re-expansion
/// into still-materialized ground duplicate-free.
pub struct WindowController {
    block: i32,
    /// Inward safety margin (blocks) between an eviction edge and the
    /// frontier. Also caps how much one movement can extend the window.
    inset: i32,
    viewport_w: f32,
    min_x: i32,
    max_x: i32,
}

impl WindowController {
    /// Initial window: the viewport `[0, viewport_w]` widened by
    /// `outside` blocks on each side, grid-aligned.
    pub fn new(viewport_w: f32, block: i32, outside: i32, inset: i32) -> Self {
        let min_x = -outside * block;
        let max_x = align_down(viewport_w, block) + outside * block;
        Self {
            block,
            inset,
            viewport_w,
            min_x,
            max_x,
        }
    }

    /// Controller with explicit initial bounds (normalized to the grid).
    pub fn with_bounds(viewport_w: f32, block: i32, inset: i32, min_x: i32, max_x: i32) -> Self {
        let r = GridRange::new(min_x, max_x, block);
        Self {
            block,
            inset,
            viewport_w,
            min_x: r.min_x(),
            max_x: r.max_x(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> (i32, i32) {
        (self.min_x, self.max_x)
    }

    /// The full initial range to materialize once at startup.
    pub fn initial_range(&self) -> GridRange {
        GridRange::new(self.min_x, self.max_x, self.block)
    }

    /// Recomputes the window for a viewpoint centered at `vx`. At most one
    /// extension per edge; each covers exactly the newly exposed columns.
    pub fn on_move(&mut self, vx: f32) -> WindowUpdate {
        let left_edge = vx - self.viewport_w;
        let right_edge = vx + self.viewport_w;
        let new_min = align_down(left_edge, self.block) + self.inset * self.block;
        let mut new_max = align_down(right_edge, self.block) - self.inset * self.block;
        if new_max < new_min {
            // Degenerate viewport narrower than the margins.
            new_max = new_min;
        }

        let left_extension = (new_min < self.min_x)
            .then(|| GridRange::new(new_min, self.min_x, self.block));
        let right_extension = (new_max > self.max_x)
            .then(|| GridRange::new(self.max_x, new_max, self.block));

        if left_extension.is_some() || right_extension.is_some() {
            log::debug!(
                target: "stream",
                "window [{}, {}] -> [{}, {}]",
                self.min_x,
                self.max_x,
                new_min,
                new_max
            );
        }
        self.min_x = new_min;
        self.max_x = new_max;

        WindowUpdate {
            left_extension,
            right_extension,
            left_edge,
            right_edge,
        }
    }
}

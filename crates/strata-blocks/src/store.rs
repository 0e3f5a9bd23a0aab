use hashbrown::HashMap;

use crate::types::{Block, Cell};

/// Cell-keyed registry of live blocks. Insertion is first-write-wins per
/// cell (blocks are immovable and never stack); removing an absent cell is
/// a no-op.
#[derive(Default)]
pub struct BlockStore {
    cells: HashMap<Cell, Block>,
}

impl BlockStore {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Inserts a block at `cell` unless one is already there. Returns true
    /// if the block was placed.
    pub fn insert(&mut self, cell: Cell, block: Block) -> bool {
        match self.cells.entry(cell) {
            hashbrown::hash_map::Entry::Occupied(_) => false,
            hashbrown::hash_map::Entry::Vacant(e) => {
                e.insert(block);
                true
            }
        }
    }

    /// Removes the block at `cell` if present.
    pub fn remove(&mut self, cell: Cell) -> Option<Block> {
        self.cells.remove(&cell)
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Block> {
        self.cells.get(&cell).copied()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Block)> + '_ {
        self.cells.iter().map(|(c, b)| (*c, *b))
    }

    /// Topmost occupied cell in column `gx`, if any. Smallest y, since the
    /// axis grows downward.
    pub fn column_top(&self, gx: i32) -> Option<i32> {
        self.cells
            .keys()
            .filter(|c| c.gx == gx)
            .map(|c| c.gy)
            .min()
    }

    /// Removes every block whose horizontal footprint `[gx, gx + size)`
    /// overlaps `[sweep_min, sweep_max)`. Returns the number removed.
    pub fn remove_overlapping_x(&mut self, sweep_min: f32, sweep_max: f32, size: i32) -> usize {
        let before = self.cells.len();
        self.cells.retain(|c, _| {
            let lo = c.gx as f32;
            let hi = (c.gx + size) as f32;
            hi <= sweep_min || lo >= sweep_max
        });
        before - self.cells.len()
    }
}

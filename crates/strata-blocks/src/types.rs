/// Material tag carried by every materialized block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Ground,
    Trunk,
    Leaf,
}

/// Grid cell address. Both coordinates are world units and exact multiples
/// of the block size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub gx: i32,
    pub gy: i32,
}

impl Cell {
    #[inline]
    pub const fn new(gx: i32, gy: i32) -> Self {
        Self { gx, gy }
    }
}

impl From<(i32, i32)> for Cell {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// A fixed-size square block occupying one grid cell. Blocks never move
/// and their footprints never intersect; the store enforces one block per
/// cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
}

impl Block {
    #[inline]
    pub const fn new(kind: BlockKind) -> Self {
        Self { kind }
    }
}

//! Deterministic per-column random streams.
//!
//! Every random decision in the world is a pure function of
//! `(column, seed, salt)`: the tuple is avalanche-hashed into a stream
//! state and draws are taken sequentially. Two streams with different
//! salts are independent even for the same column.

/// Stream salts. One per decision domain.
pub const SALT_TREE: u32 = 0xA53F_9001;
pub const SALT_CANOPY: u32 = 0xC0FF_EE07;
pub const SALT_LEAF_ANIM: u32 = 0x1EAF_0003;

#[derive(Clone, Debug)]
pub struct ColumnRng {
    state: u64,
}

impl ColumnRng {
    pub fn new(column: i32, seed: i32, salt: u32) -> Self {
        let mut h = (column as u32 as u64).wrapping_mul(0x85eb_ca6b)
            ^ (seed as u32 as u64).wrapping_mul(0xc2b2_ae35)
            ^ (salt as u64).wrapping_mul(0x27d4_eb2d);
        h ^= h >> 16;
        h = h.wrapping_mul(0x7feb_352d);
        h ^= h >> 15;
        h = h.wrapping_mul(0x846c_a68b);
        h ^= h >> 16;
        Self {
            state: h.wrapping_add(0x9E37_79B9_7F4A_7C15),
        }
    }

    /// Seed a stream from a pair of grid coordinates (per-cell decisions).
    pub fn for_cell(gx: i32, gy: i32, seed: i32, salt: u32) -> Self {
        Self::new(gx ^ gy.rotate_left(16), seed, salt)
    }

    /// Next draw, splitmix64 step.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform in `[0, 1)` with 24 bits of precision.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        ((self.next_u32() & 0x00FF_FFFF) as f32) / 16_777_216.0
    }

    /// True with probability `1 / modulus`.
    #[inline]
    pub fn one_in(&mut self, modulus: u32) -> bool {
        debug_assert!(modulus > 0);
        self.next_u32() % modulus == 0
    }

    /// Uniform integer in `[0, bound)`.
    #[inline]
    pub fn below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        self.next_u32() % bound
    }
}

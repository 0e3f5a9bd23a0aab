use hashbrown::HashMap;

use strata_blocks::Cell;
use strata_geom::Vec2;
use strata_world::rng::{ColumnRng, SALT_LEAF_ANIM};
use strata_world::worldgen::Leaves;

pub type LeafId = u64;

/// Life-cycle phase of one leaf. The cycle is local to the leaf: sway in
/// place, fall after a one-shot delay, fade out on ground contact, fade
/// back in at the home cell, repeat. An evictor may destroy the leaf in
/// any phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafPhase {
    Swinging,
    Falling,
    FadingOut,
    FadingIn,
}

/// A single canopy leaf with explicit per-instance animation state,
/// advanced once per tick. All randomness is drawn from the leaf's own
/// stream, seeded from its home cell and the world seed.
pub struct Leaf {
    home: Vec2,
    pos: Vec2,
    size: i32,
    phase: LeafPhase,
    rng: ColumnRng,
    /// Elapsed oscillation time; frozen from ground contact until the
    /// cycle restarts.
    osc_t: f32,
    sway_period: f32,
    scale_period: f32,
    fall_delay: f32,
    fade_t: f32,
    alpha: f32,
    params: LeafParams,
}

/// The animation constants a leaf needs, copied out of the worldgen
/// config at spawn.
#[derive(Clone, Copy, Debug)]
struct LeafParams {
    fall_delay_max: f32,
    fall_speed: f32,
    fade_time: f32,
    sway_deg: f32,
    scale_jitter: f32,
    sway_period_max: u32,
}

impl Leaf {
    pub fn new(home: Cell, size: i32, cfg: &Leaves, seed: i32) -> Self {
        let params = LeafParams {
            fall_delay_max: cfg.fall_delay_max,
            fall_speed: cfg.fall_speed,
            fade_time: cfg.fade_time,
            sway_deg: cfg.sway_deg,
            scale_jitter: cfg.scale_jitter,
            sway_period_max: cfg.sway_period_max,
        };
        let mut rng = ColumnRng::for_cell(home.gx, home.gy, seed, SALT_LEAF_ANIM);
        let (sway_period, scale_period, fall_delay) = Self::roll_cycle(&mut rng, &params);
        let home = Vec2::new(home.gx as f32, home.gy as f32);
        Self {
            home,
            pos: home,
            size,
            phase: LeafPhase::Swinging,
            rng,
            osc_t: 0.0,
            sway_period,
            scale_period,
            fall_delay,
            fade_t: 0.0,
            alpha: 1.0,
            params,
        }
    }

    fn roll_cycle(rng: &mut ColumnRng, params: &LeafParams) -> (f32, f32, f32) {
        let sway_period = (1 + rng.below(params.sway_period_max)) as f32;
        let scale_period = (1 + rng.below(params.sway_period_max)) as f32;
        let fall_delay = rng.next_f32() * params.fall_delay_max;
        (sway_period, scale_period, fall_delay)
    }

    /// Advances the state machine by `dt`. `floor_y` is the top of the
    /// ground surface in the leaf's column; contact happens when the
    /// leaf's bottom edge reaches it.
    pub fn step(&mut self, dt: f32, floor_y: f32) {
        match self.phase {
            LeafPhase::Swinging => {
                self.osc_t += dt;
                self.fall_delay -= dt;
                if self.fall_delay <= 0.0 {
                    self.phase = LeafPhase::Falling;
                }
            }
            LeafPhase::Falling => {
                // The sway keeps running while the leaf drifts down; only
                // contact cancels it.
                self.osc_t += dt;
                self.pos.y += self.params.fall_speed * dt;
                if self.pos.y + self.size as f32 >= floor_y {
                    self.pos.y = floor_y - self.size as f32;
                    self.phase = LeafPhase::FadingOut;
                    self.fade_t = 0.0;
                }
            }
            LeafPhase::FadingOut => {
                self.fade_t += dt;
                self.alpha = (1.0 - self.fade_t / self.params.fade_time).max(0.0);
                if self.fade_t >= self.params.fade_time {
                    self.pos = self.home;
                    self.phase = LeafPhase::FadingIn;
                    self.fade_t = 0.0;
                }
            }
            LeafPhase::FadingIn => {
                self.fade_t += dt;
                self.alpha = (self.fade_t / self.params.fade_time).min(1.0);
                if self.fade_t >= self.params.fade_time {
                    let (sway, scale, delay) = Self::roll_cycle(&mut self.rng, &self.params);
                    self.sway_period = sway;
                    self.scale_period = scale;
                    self.fall_delay = delay;
                    self.osc_t = 0.0;
                    self.phase = LeafPhase::Swinging;
                }
            }
        }
    }

    #[inline]
    pub fn phase(&self) -> LeafPhase {
        self.phase
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn home(&self) -> Vec2 {
        self.home
    }

    /// Render opacity in `[0, 1]`.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Current render angle in degrees, oscillating within the sway bound.
    pub fn angle_deg(&self) -> f32 {
        let d = self.params.sway_deg;
        -d + 2.0 * d * triangle(self.osc_t, self.sway_period)
    }

    /// Current render scale, oscillating within the jitter bound.
    pub fn scale(&self) -> f32 {
        let j = self.params.scale_jitter;
        (1.0 - j) + 2.0 * j * triangle(self.osc_t, self.scale_period)
    }
}

/// Linear back-and-forth wave: 0 -> 1 over `period`, back over the next
/// `period`.
fn triangle(t: f32, period: f32) -> f32 {
    let u = (t / (2.0 * period)).fract() * 2.0;
    if u <= 1.0 { u } else { 2.0 - u }
}

/// Id-keyed registry of live leaves.
#[derive(Default)]
pub struct LeafStore {
    leaves: HashMap<LeafId, Leaf>,
    next_id: LeafId,
}

impl LeafStore {
    pub fn new() -> Self {
        Self {
            leaves: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn spawn(&mut self, leaf: Leaf) -> LeafId {
        let id = self.next_id;
        self.next_id += 1;
        self.leaves.insert(id, leaf);
        id
    }

    pub fn remove(&mut self, id: LeafId) -> Option<Leaf> {
        self.leaves.remove(&id)
    }

    #[inline]
    pub fn get(&self, id: LeafId) -> Option<&Leaf> {
        self.leaves.get(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeafId, &Leaf)> {
        self.leaves.iter().map(|(id, l)| (*id, l))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (LeafId, &mut Leaf)> {
        self.leaves.iter_mut().map(|(id, l)| (*id, l))
    }

    /// Removes every leaf whose footprint `[x, x + size)` overlaps
    /// `[sweep_min, sweep_max)`, wherever it is in its cycle. Returns the
    /// number removed.
    pub fn remove_overlapping_x(&mut self, sweep_min: f32, sweep_max: f32, size: i32) -> usize {
        let before = self.leaves.len();
        self.leaves.retain(|_, l| {
            let lo = l.pos.x;
            let hi = l.pos.x + size as f32;
            hi <= sweep_min || lo >= sweep_max
        });
        before - self.leaves.len()
    }
}

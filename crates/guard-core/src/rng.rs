//! Deterministic per-NPC and world-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each NPC gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (npc_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive NPC IDs uniformly across the seed space.
//! This means:
//!
//! - NPCs never share RNG state, so one NPC's idle-roll history never
//!   depends on how many other NPCs exist or in what order they tick.
//! - Adding or removing NPCs at the end of the list does not disturb the
//!   seeds of existing NPCs — runs are reproducible as populations change.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::NpcId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── NpcRng ────────────────────────────────────────────────────────────────────

/// Per-NPC deterministic RNG.
///
/// Create one per NPC at spawn; the behavior layer draws from it for any
/// probabilistic transition (the idle-to-patrol roll).
pub struct NpcRng(SmallRng);

impl NpcRng {
    /// Seed deterministically from the run's global seed and an NPC ID.
    pub fn new(global_seed: u64, npc: NpcId) -> Self {
        let seed = global_seed ^ (npc.0 as u64).wrapping_mul(MIXING_CONSTANT);
        NpcRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A percentile roll in `[0, 100)` — `roll_percent() < 10` is true with
    /// probability exactly 10 %.
    #[inline]
    pub fn roll_percent(&mut self) -> u32 {
        self.0.gen_range(0..100)
    }
}

// ── WorldRng ──────────────────────────────────────────────────────────────────

/// World-level RNG for global operations (scenario generation, scripted
/// target jitter, etc.).  Used only in single-threaded contexts.
pub struct WorldRng(SmallRng);

impl WorldRng {
    pub fn new(seed: u64) -> Self {
        WorldRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `WorldRng` with a different seed offset — useful for
    /// seeding independent streams deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> WorldRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        WorldRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

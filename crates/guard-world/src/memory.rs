//! In-process port implementations.
//!
//! These back the self-contained simulation in `guard-sim` and every test in
//! the workspace.  They are deliberately simple — straight-line kinematics,
//! a trigger set, a play counter — but they honor the port contracts
//! exactly, including the "no destination counts as arrived" rule the first
//! patrol leg relies on.

use rustc_hash::FxHashSet;

use guard_core::Vec3;

use crate::ports::{AudioCue, Navigation, Signals};

// ── MemoryNav ─────────────────────────────────────────────────────────────────

/// Straight-line kinematic navigation.
///
/// Routing is trivial: every destination is reachable in a straight line, so
/// `has_valid_path` is `true` whenever a destination is set, and an agent
/// with no destination reports zero remaining distance.  Position is
/// advanced explicitly by [`advance`][Self::advance] once per tick by the
/// frame driver, mirroring how an engine's agent moves between behavior
/// updates.
#[derive(Debug, Clone)]
pub struct MemoryNav {
    position: Vec3,
    destination: Option<Vec3>,
    speed: f32,
    stopped: bool,
}

impl MemoryNav {
    pub fn new(position: Vec3) -> Self {
        Self { position, destination: None, speed: 0.0, stopped: false }
    }

    /// Current position (authoritative while this nav drives the NPC).
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The current destination, if any.
    #[inline]
    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    /// Normalized horizontal travel direction, or `None` when idle,
    /// stopped, or already at the destination.  The frame driver uses this
    /// to turn the NPC's pose the way it is moving.
    pub fn heading(&self) -> Option<Vec3> {
        if self.stopped {
            return None;
        }
        let dest = self.destination?;
        let dir = (dest - self.position).horizontal();
        if dir.magnitude() <= f32::EPSILON {
            return None;
        }
        Some(dir.normalized())
    }

    /// Integrate one tick of movement: step `speed * dt_secs` toward the
    /// destination, clamped so the agent never overshoots.
    pub fn advance(&mut self, dt_secs: f32) {
        if self.stopped {
            return;
        }
        let Some(dest) = self.destination else { return };
        let to_dest = dest - self.position;
        let dist = to_dest.magnitude();
        let step = self.speed * dt_secs;
        if step >= dist {
            self.position = dest;
        } else if dist > 0.0 {
            self.position = self.position + to_dest * (step / dist);
        }
    }
}

impl Navigation for MemoryNav {
    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }

    fn move_to(&mut self, point: Vec3) {
        self.destination = Some(point);
    }

    fn remaining_distance(&self) -> f32 {
        match self.destination {
            Some(dest) => self.position.distance(dest),
            None => 0.0,
        }
    }

    fn has_valid_path(&self) -> bool {
        self.destination.is_some()
    }
}

// ── MemorySignals ─────────────────────────────────────────────────────────────

/// Records raised animation triggers in a set.
#[derive(Debug, Default)]
pub struct MemorySignals {
    raised: FxHashSet<String>,
}

impl MemorySignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while `signal` is raised and not yet cleared.
    pub fn is_raised(&self, signal: &str) -> bool {
        self.raised.contains(signal)
    }

    /// Number of currently raised triggers.
    pub fn raised_count(&self) -> usize {
        self.raised.len()
    }
}

impl Signals for MemorySignals {
    fn raise(&mut self, signal: &str) {
        self.raised.insert(signal.to_owned());
    }

    fn clear(&mut self, signal: &str) {
        self.raised.remove(signal);
    }
}

// ── MemoryAudio ───────────────────────────────────────────────────────────────

/// Counts cue playbacks.
#[derive(Debug, Default)]
pub struct MemoryAudio {
    plays: u32,
}

impl MemoryAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the cue has been started.
    pub fn play_count(&self) -> u32 {
        self.plays
    }
}

impl AudioCue for MemoryAudio {
    fn play(&mut self) {
        self.plays += 1;
    }
}

//! The `Sim` struct and its tick loop.

use guard_core::{SimConfig, Tick, TickClock};
use guard_world::{Pose, StaticEnvironment, WaypointRegistry};

use crate::{Npc, SimError, SimObserver, SimResult};

// ── TargetTrack ───────────────────────────────────────────────────────────────

/// Supplies the tracked target's pose each tick.
///
/// The target is external to the FSM — a player, a scripted actor, a replay.
/// Implement this trait (closures `FnMut(Tick) -> Pose` work directly) to
/// script its movement.
pub trait TargetTrack {
    fn pose(&mut self, tick: Tick) -> Pose;
}

impl<F: FnMut(Tick) -> Pose> TargetTrack for F {
    fn pose(&mut self, tick: Tick) -> Pose {
        self(tick)
    }
}

/// A target that never moves.
pub struct FixedTarget(pub Pose);

impl TargetTrack for FixedTarget {
    fn pose(&mut self, _tick: Tick) -> Pose {
        self.0
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The frame driver.
///
/// Holds the shared world (environment + waypoint registry, both immutable
/// after build), every NPC, and the target track.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<T: TargetTrack> {
    /// Global configuration (total ticks, seed, tick duration).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: TickClock,

    /// Tagged scene objects, shared read-only by every NPC.
    pub environment: StaticEnvironment,

    /// Patrol checkpoints, built eagerly before the first tick.
    pub waypoints: WaypointRegistry,

    /// All NPCs, indexed by `NpcId`.
    pub npcs: Vec<Npc>,

    /// The target's movement script.
    pub target: T,

    /// The target pose most recently issued by the track.
    pub(crate) target_pose: Pose,
}

impl<T: TargetTrack> Sim<T> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            let now = self.clock.current_tick;
            self.process_tick(now, observer)?;
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.process_tick(now, observer)?;
            self.clock.advance();
        }
        Ok(())
    }

    /// The target pose used on the most recent tick.
    pub fn target_pose(&self) -> Pose {
        self.target_pose
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(now);
        let dt = self.clock.dt_secs;

        // ── Phase 1: target update ────────────────────────────────────────
        self.target_pose = self.target.pose(now);

        // ── Phases 2+3: integrate movement, then behave ───────────────────
        for npc in &mut self.npcs {
            npc.integrate(dt);
            let swapped = npc
                .behave(self.target_pose, &self.waypoints, &self.environment, dt)
                .map_err(|source| SimError::Behavior { npc: npc.id, source })?;
            if let Some((from, to)) = swapped {
                observer.on_transition(npc.id, now, from, to);
            }
        }

        observer.on_tick_end(now, self.npcs.len());
        Ok(())
    }
}

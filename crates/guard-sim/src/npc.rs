//! One simulated NPC: pose, ports, RNG, and controller in a single bundle.
//!
//! The fields stay separate (rather than hiding behind accessors) because
//! the per-tick context needs simultaneous mutable borrows of disjoint
//! parts: the controller drives the state machine while the context borrows
//! the pose, nav, signals, and RNG.  Direct field access lets the borrow
//! checker split them cleanly.

use guard_behavior::{BehaviorKind, BehaviorResult, NpcContext};
use guard_core::{NpcId, NpcRng, Vec3};
use guard_world::{
    AudioCue, Discovery, MemoryAudio, MemoryNav, MemorySignals, Pose, WaypointRegistry,
};

use crate::Controller;

// ── NpcSpec ───────────────────────────────────────────────────────────────────

/// Everything needed to spawn one NPC.
#[derive(Clone, Debug)]
pub struct NpcSpec {
    pub position: Vec3,
    pub forward: Vec3,
    /// Whether the NPC carries an audio source.  Without one it can never
    /// enter Attack (the transition fails as a configuration error).
    pub has_audio: bool,
}

impl NpcSpec {
    /// A spec at `position`, facing +z, with audio.
    pub fn at(position: Vec3) -> Self {
        Self { position, forward: Vec3::FORWARD, has_audio: true }
    }

    pub fn facing(mut self, forward: Vec3) -> Self {
        self.forward = forward;
        self
    }

    pub fn without_audio(mut self) -> Self {
        self.has_audio = false;
        self
    }
}

// ── Npc ───────────────────────────────────────────────────────────────────────

/// A live NPC instance.
pub struct Npc {
    pub id: NpcId,
    pub pose: Pose,
    pub nav: MemoryNav,
    pub signals: MemorySignals,
    pub audio: Option<MemoryAudio>,
    pub rng: NpcRng,
    pub controller: Controller,
}

impl Npc {
    /// Spawn from a spec.  The RNG is seeded deterministically from the
    /// run's global seed and the NPC's ID; the controller starts in Idle.
    pub fn spawn(id: NpcId, spec: &NpcSpec, global_seed: u64) -> Self {
        Self {
            id,
            pose: Pose::new(spec.position, spec.forward),
            nav: MemoryNav::new(spec.position),
            signals: MemorySignals::new(),
            audio: spec.has_audio.then(MemoryAudio::new),
            rng: NpcRng::new(global_seed, id),
            controller: Controller::spawn(),
        }
    }

    /// Advance navigation kinematics by one tick and sync the pose: the nav
    /// owns the position while it drives, and a moving NPC faces the way it
    /// travels (a stopped one keeps whatever facing behavior set).
    pub(crate) fn integrate(&mut self, dt_secs: f32) {
        self.nav.advance(dt_secs);
        self.pose.position = self.nav.position();
        if let Some(heading) = self.nav.heading() {
            self.pose.forward = heading;
        }
    }

    /// Run one controller tick against the shared world state.
    pub(crate) fn behave(
        &mut self,
        target: Pose,
        waypoints: &WaypointRegistry,
        discovery: &dyn Discovery,
        dt_secs: f32,
    ) -> BehaviorResult<Option<(BehaviorKind, BehaviorKind)>> {
        let mut ctx = NpcContext {
            npc: &mut self.pose,
            target,
            nav: &mut self.nav,
            signals: &mut self.signals,
            audio: self.audio.as_mut().map(|a| a as &mut dyn AudioCue),
            waypoints,
            discovery,
            rng: &mut self.rng,
            dt_secs,
        };
        self.controller.tick(&mut ctx)
    }
}

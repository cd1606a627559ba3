//! Per-tick context handed to the state machine.

use guard_core::NpcRng;
use guard_world::{AudioCue, Discovery, Navigation, Pose, Signals, WaypointRegistry};

/// Everything one tick of one NPC's state machine may touch.
///
/// Built fresh each tick by the frame driver from the NPC's own ports (split
/// borrows of disjoint fields) plus the world's shared read-only resources.
/// The state machine owns nothing behind these references; their lifetimes
/// all exceed any single state instance.
pub struct NpcContext<'a> {
    /// The NPC's own pose.  Mutable: attacking rotates the facing in place.
    pub npc: &'a mut Pose,

    /// The tracked target's pose this tick, by value — perception reads it,
    /// nothing writes it.
    pub target: Pose,

    /// Movement capability.
    pub nav: &'a mut dyn Navigation,

    /// Animation-trigger capability.
    pub signals: &'a mut dyn Signals,

    /// Audio capability, absent on NPCs without an audio source.  Attack
    /// requires it at construction time.
    pub audio: Option<&'a mut dyn AudioCue>,

    /// Shared, read-only patrol checkpoints.
    pub waypoints: &'a WaypointRegistry,

    /// Scene lookup, used at state construction (safe-location resolution).
    pub discovery: &'a dyn Discovery,

    /// This NPC's deterministic RNG (idle-to-patrol roll).
    pub rng: &'a mut NpcRng,

    /// Seconds covered by this tick; scales rates (facing rotation).
    pub dt_secs: f32,
}

impl NpcContext<'_> {
    /// `true` if this NPC carries an audio cue port.
    #[inline]
    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }
}

//! Capability traits consumed by the behavior core.
//!
//! Each trait is one seam of the host contract: destination-seeking movement
//! ([`Navigation`]), animation triggers ([`Signals`]), and one-shot audio
//! ([`AudioCue`]).  States depend on these abstractions only; the simulation
//! layer decides which concrete implementation backs each NPC.

use guard_core::Vec3;

// ── Pose ──────────────────────────────────────────────────────────────────────

/// An entity's spatial handle: where it is and which way it faces.
///
/// `forward` is kept unit length by convention; perception math tolerates
/// non-unit inputs but facing rotation re-normalizes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Vec3,
    pub forward: Vec3,
}

impl Pose {
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward: forward.normalized() }
    }

    /// A pose at `position` facing +z.
    pub fn at(position: Vec3) -> Self {
        Self { position, forward: Vec3::FORWARD }
    }
}

// ── Navigation ────────────────────────────────────────────────────────────────

/// Destination-seeking movement capability (the navigation-mesh stand-in).
///
/// The behavior core issues commands and reads two queries; pathfinding
/// itself is the implementation's problem.  All methods are expected to
/// complete within the tick — nothing here blocks.
pub trait Navigation {
    /// Set the movement speed in units per second.
    fn set_speed(&mut self, speed: f32);

    /// Halt (`true`) or resume (`false`) movement without clearing the
    /// current destination.
    fn set_stopped(&mut self, stopped: bool);

    /// Set or replace the current destination.
    fn move_to(&mut self, point: Vec3);

    /// Distance still to travel to the current destination.
    ///
    /// Implementations with no destination set must report `0.0` ("nowhere
    /// to go, nothing remaining") — patrol behavior relies on a fresh agent
    /// counting as arrived so its first checkpoint advance fires.
    fn remaining_distance(&self) -> f32;

    /// `true` while a routable destination is set.
    fn has_valid_path(&self) -> bool;
}

// ── Signals ───────────────────────────────────────────────────────────────────

/// Animation-trigger capability.
///
/// Signal names are opaque to this crate; the behavior core defines the
/// ones it raises (`isIdle`, `isWalking`, `isRunning`, `isShooting`).
pub trait Signals {
    /// Raise a named trigger.
    fn raise(&mut self, signal: &str);

    /// Clear a previously raised trigger.  Clearing a signal that was never
    /// raised is a no-op.
    fn clear(&mut self, signal: &str);
}

// ── AudioCue ──────────────────────────────────────────────────────────────────

/// One-shot audio capability (weapon-fire cue).
///
/// Modeled as a separate trait because not every NPC carries an audio
/// source; a behavior that requires one fails construction when the NPC has
/// none, per the configuration-error contract.
pub trait AudioCue {
    /// Start the cue.
    fn play(&mut self);
}

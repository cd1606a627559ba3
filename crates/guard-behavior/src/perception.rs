//! Geometric perception predicates.
//!
//! Pure functions over current poses — no side effects, no persisted state.
//! All thresholds are exclusive: a target at exactly the vision radius or
//! exactly on the cone boundary is **not** perceived.
//!
//! The constants are fixed tuning parameters of this component, not derived
//! quantities.

use guard_core::Vec3;
use guard_world::Pose;

/// Straight-line distance under which a target can be seen.
pub const VISION_RADIUS: f32 = 10.0;

/// Half-angle of the vision cone, degrees.
pub const VISION_HALF_ANGLE_DEG: f32 = 30.0;

/// Straight-line distance under which a target can be attacked.
pub const ATTACK_RADIUS: f32 = 7.0;

/// Distance under which a rear approach registers.
pub const BEHIND_RADIUS: f32 = 2.0;

/// Half-angle of the rear-approach cone, degrees.
pub const BEHIND_HALF_ANGLE_DEG: f32 = 30.0;

/// `true` iff `target` is inside the NPC's vision cone: closer than
/// [`VISION_RADIUS`] and within [`VISION_HALF_ANGLE_DEG`] of the forward
/// facing.
pub fn can_see_target(npc: &Pose, target: Vec3) -> bool {
    let direction = target - npc.position;
    let angle = direction.angle_between_deg(npc.forward);
    direction.magnitude() < VISION_RADIUS && angle < VISION_HALF_ANGLE_DEG
}

/// `true` iff `target` is closer than [`ATTACK_RADIUS`].  No angle
/// requirement — the NPC turns to face while attacking.
pub fn can_attack_target(npc_position: Vec3, target: Vec3) -> bool {
    (target - npc_position).magnitude() < ATTACK_RADIUS
}

/// `true` iff `target` is right behind the NPC: the target-to-NPC direction
/// is shorter than [`BEHIND_RADIUS`] and within [`BEHIND_HALF_ANGLE_DEG`]
/// of the NPC's forward facing (i.e. the target is very close and roughly
/// facing the NPC's back).
pub fn is_target_behind(npc: &Pose, target: Vec3) -> bool {
    let direction = npc.position - target;
    let angle = direction.angle_between_deg(npc.forward);
    direction.magnitude() < BEHIND_RADIUS && angle < BEHIND_HALF_ANGLE_DEG
}

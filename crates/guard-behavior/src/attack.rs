//! Attack — stand and shoot, tracking the target's bearing.

use crate::context::NpcContext;
use crate::error::BehaviorResult;
use crate::perception;
use crate::state::BehaviorState;

/// Animation trigger raised while shooting.
pub const SHOOT_SIGNAL: &str = "isShooting";

/// Facing rotation rate — interpolation factor per second toward the
/// target bearing.
const ROTATE_RATE: f32 = 2.0;

pub(crate) fn enter(ctx: &mut NpcContext<'_>) {
    ctx.signals.raise(SHOOT_SIGNAL);
    ctx.nav.set_stopped(true);

    // Construction verified the port exists; `if let` keeps the borrow local.
    if let Some(audio) = &mut ctx.audio {
        audio.play();
    }
}

pub(crate) fn update(ctx: &mut NpcContext<'_>) -> BehaviorResult<Option<BehaviorState>> {
    // Turn toward the target on the ground plane only — aim never pitches.
    let bearing = (ctx.target.position - ctx.npc.position).horizontal();
    ctx.npc.forward = ctx.npc.forward.rotate_toward(bearing, ROTATE_RATE * ctx.dt_secs);

    if !perception::can_attack_target(ctx.npc.position, ctx.target.position) {
        return Ok(Some(BehaviorState::idle()));
    }
    Ok(None)
}

pub(crate) fn exit(ctx: &mut NpcContext<'_>) {
    ctx.signals.clear(SHOOT_SIGNAL);
}

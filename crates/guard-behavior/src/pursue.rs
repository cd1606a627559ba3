//! Pursue — chase the target at speed until close enough to attack or the
//! target slips out of sight.

use crate::context::NpcContext;
use crate::error::BehaviorResult;
use crate::perception;
use crate::state::BehaviorState;

/// Animation trigger raised while running.
pub const RUN_SIGNAL: &str = "isRunning";

/// Chasing speed, units per second.
const PURSUE_SPEED: f32 = 5.0;

pub(crate) fn enter(ctx: &mut NpcContext<'_>) {
    ctx.nav.set_speed(PURSUE_SPEED);
    ctx.nav.set_stopped(false);
    ctx.signals.raise(RUN_SIGNAL);
}

pub(crate) fn update(ctx: &mut NpcContext<'_>) -> BehaviorResult<Option<BehaviorState>> {
    // Re-target every tick — the target moves.
    ctx.nav.move_to(ctx.target.position);

    // Transition decisions only count while the path is routable; with no
    // valid path the NPC keeps chasing blind.
    if ctx.nav.has_valid_path() {
        if perception::can_attack_target(ctx.npc.position, ctx.target.position) {
            return BehaviorState::attack(ctx).map(Some);
        }
        if !perception::can_see_target(ctx.npc, ctx.target.position) {
            return Ok(Some(BehaviorState::patrol()));
        }
    }
    Ok(None)
}

pub(crate) fn exit(ctx: &mut NpcContext<'_>) {
    ctx.signals.clear(RUN_SIGNAL);
}

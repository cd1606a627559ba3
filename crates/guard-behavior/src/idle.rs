//! Idle — stand still, look for the target, occasionally wander off.

use crate::context::NpcContext;
use crate::error::BehaviorResult;
use crate::perception;
use crate::state::BehaviorState;

/// Animation trigger raised while idling.
pub const IDLE_SIGNAL: &str = "isIdle";

/// Chance per tick of drifting into patrol, percent.  Memoryless — each
/// tick rolls independently.
const PATROL_ROLL_PERCENT: u32 = 10;

pub(crate) fn enter(ctx: &mut NpcContext<'_>) {
    ctx.signals.raise(IDLE_SIGNAL);
}

pub(crate) fn update(ctx: &mut NpcContext<'_>) -> BehaviorResult<Option<BehaviorState>> {
    if perception::can_see_target(ctx.npc, ctx.target.position) {
        return Ok(Some(BehaviorState::pursue()));
    }
    if ctx.rng.roll_percent() < PATROL_ROLL_PERCENT {
        return Ok(Some(BehaviorState::patrol()));
    }
    Ok(None)
}

pub(crate) fn exit(ctx: &mut NpcContext<'_>) {
    ctx.signals.clear(IDLE_SIGNAL);
}

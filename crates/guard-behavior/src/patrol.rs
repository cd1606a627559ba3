//! Patrol — walk the checkpoint circuit, watching for the target.

use crate::context::NpcContext;
use crate::error::BehaviorResult;
use crate::perception;
use crate::state::BehaviorState;

/// Animation trigger raised while walking the circuit.
pub const WALK_SIGNAL: &str = "isWalking";

/// Walking speed, units per second.
const PATROL_SPEED: f32 = 2.0;

/// A checkpoint counts as reached inside this distance.
const ARRIVE_RADIUS: f32 = 1.0;

/// Patrol's between-tick payload: the checkpoint cursor.
#[derive(Debug)]
pub(crate) struct PatrolData {
    /// Index of the checkpoint last issued as destination.  `None` until
    /// Enter runs, and permanently `None` when the registry is empty (the
    /// NPC then holds position instead of faulting).
    index: Option<usize>,
}

impl PatrolData {
    pub(crate) fn new() -> Self {
        Self { index: None }
    }
}

pub(crate) fn enter(data: &mut PatrolData, ctx: &mut NpcContext<'_>) {
    ctx.nav.set_speed(PATROL_SPEED);
    ctx.nav.set_stopped(false);

    // Seed the cursor with the *predecessor* of the nearest checkpoint:
    // the first arrival check in Update advances the cursor before issuing
    // a destination, so the first leg targets exactly the nearest one.
    data.index = ctx
        .waypoints
        .nearest_index(ctx.npc.position)
        .map(|nearest| ctx.waypoints.prev_index(nearest));

    ctx.signals.raise(WALK_SIGNAL);
}

pub(crate) fn update(
    data: &mut PatrolData,
    ctx: &mut NpcContext<'_>,
) -> BehaviorResult<Option<BehaviorState>> {
    if ctx.nav.remaining_distance() < ARRIVE_RADIUS {
        if let Some(index) = data.index {
            let next = ctx.waypoints.next_index(index);
            data.index = Some(next);
            ctx.nav.move_to(ctx.waypoints.position(next));
        }
    }

    // Ordered evaluation: a visible target wins over one sneaking up from
    // behind.
    if perception::can_see_target(ctx.npc, ctx.target.position) {
        return Ok(Some(BehaviorState::pursue()));
    }
    if perception::is_target_behind(ctx.npc, ctx.target.position) {
        return BehaviorState::runaway(ctx).map(Some);
    }
    Ok(None)
}

pub(crate) fn exit(ctx: &mut NpcContext<'_>) {
    ctx.signals.clear(WALK_SIGNAL);
}

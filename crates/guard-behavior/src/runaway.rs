//! Runaway — sprint to the nearest safe location, then calm down.

use guard_core::Vec3;

use crate::context::NpcContext;
use crate::error::{BehaviorError, BehaviorResult};
use crate::pursue::RUN_SIGNAL;
use crate::state::BehaviorState;

/// The tag safe-location objects carry in the environment.
pub const SAFE_TAG: &str = "Safe";

/// Fleeing speed, units per second — faster than pursuit.
const RUNAWAY_SPEED: f32 = 6.0;

/// The safe location counts as reached inside this distance.
const ARRIVE_RADIUS: f32 = 1.0;

/// Runaway's payload: the safe location, resolved once at construction.
#[derive(Debug)]
pub(crate) struct RunawayData {
    safe: Vec3,
}

impl RunawayData {
    /// Look up the nearest "Safe"-tagged object.  Absence is a
    /// configuration error — there is no sensible fallback destination.
    pub(crate) fn resolve(ctx: &NpcContext<'_>) -> BehaviorResult<Self> {
        let safe = ctx
            .discovery
            .find_nearest_tagged(SAFE_TAG, ctx.npc.position)
            .ok_or(BehaviorError::NoSafeLocation)?;
        Ok(Self { safe: safe.position })
    }
}

pub(crate) fn enter(data: &mut RunawayData, ctx: &mut NpcContext<'_>) {
    ctx.signals.raise(RUN_SIGNAL);
    ctx.nav.set_stopped(false);
    ctx.nav.set_speed(RUNAWAY_SPEED);
    ctx.nav.move_to(data.safe);
}

pub(crate) fn update(
    _data: &mut RunawayData,
    ctx: &mut NpcContext<'_>,
) -> BehaviorResult<Option<BehaviorState>> {
    if ctx.nav.remaining_distance() < ARRIVE_RADIUS {
        return Ok(Some(BehaviorState::idle()));
    }
    Ok(None)
}

pub(crate) fn exit(ctx: &mut NpcContext<'_>) {
    ctx.signals.clear(RUN_SIGNAL);
}

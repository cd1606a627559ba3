//! The per-NPC behavior controller.

use guard_behavior::{BehaviorKind, BehaviorResult, BehaviorState, NpcContext, Stage};

/// Owns exactly one live [`BehaviorState`] and drives its lifecycle once per
/// tick, swapping in the successor when the state exits.
///
/// Created once per NPC at spawn (starting in Idle) and destroyed with it.
/// If a transition fails — a successor's construction reported a
/// configuration error — the current state is left untouched (still live,
/// still in Update) and the error is passed up; the NPC never occupies a
/// half-initialized state.
#[derive(Debug)]
pub struct Controller {
    state: BehaviorState,
}

impl Controller {
    /// A fresh controller in the spawn state, Idle.
    pub fn spawn() -> Self {
        Self { state: BehaviorState::idle() }
    }

    /// The active state's behavioral mode.
    #[inline]
    pub fn kind(&self) -> BehaviorKind {
        self.state.kind()
    }

    /// The active state's lifecycle phase.
    #[inline]
    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    /// Run one tick.  Returns `Some((from, to))` when the state was swapped
    /// for its successor this tick.
    pub fn tick(
        &mut self,
        ctx: &mut NpcContext<'_>,
    ) -> BehaviorResult<Option<(BehaviorKind, BehaviorKind)>> {
        let from = self.state.kind();
        match self.state.process(ctx)? {
            Some(successor) => {
                let to = successor.kind();
                self.state = successor;
                Ok(Some((from, to)))
            }
            None => Ok(None),
        }
    }
}

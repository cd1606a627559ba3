use guard_behavior::BehaviorError;
use guard_core::{GuardError, NpcId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid run configuration.
    #[error(transparent)]
    Config(#[from] GuardError),

    /// A state transition failed for one NPC.  The NPC is still live, in
    /// its prior state.
    #[error("behavior error for {npc}: {source}")]
    Behavior {
        npc: NpcId,
        #[source]
        source: BehaviorError,
    },
}

pub type SimResult<T> = Result<T, SimError>;

use thiserror::Error;

use crate::BehaviorKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BehaviorError {
    /// Attack requires an audio cue port; the NPC has none.
    #[error("cannot enter attack: NPC has no audio cue port")]
    MissingAudioCue,

    /// Runaway requires a "Safe"-tagged object; the environment has none.
    #[error("cannot enter runaway: no safe location in the environment")]
    NoSafeLocation,

    /// `process()` was called on a state that already exited.  States are
    /// single-use; this is always a driver bug.
    #[error("state {0} already exited and must not be processed again")]
    SpentState(BehaviorKind),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;

//! Lifecycle phase and state tags.

use std::fmt;

// ── Stage ─────────────────────────────────────────────────────────────────────

/// Where in its Enter→Update→Exit lifecycle a state instance currently is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    /// Entry side effects not yet run.  Every fresh state starts here.
    Enter,
    /// Per-tick decision logic runs until a transition is decided.
    Update,
    /// Exit side effects run; the successor is handed back.  Terminal.
    Exit,
}

// ── BehaviorKind ──────────────────────────────────────────────────────────────

/// Discrete tag identifying one of the five behavioral modes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorKind {
    Idle,
    Patrol,
    Pursue,
    Attack,
    Runaway,
}

impl BehaviorKind {
    /// Human-readable label, useful for logs and observer output.
    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorKind::Idle    => "idle",
            BehaviorKind::Patrol  => "patrol",
            BehaviorKind::Pursue  => "pursue",
            BehaviorKind::Attack  => "attack",
            BehaviorKind::Runaway => "runaway",
        }
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

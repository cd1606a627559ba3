//! `guard-behavior` — the behavior finite-state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`perception`] | Pure geometric predicates (vision cone, attack range…)  |
//! | [`stage`]      | `Stage` lifecycle phase, `BehaviorKind` state tags      |
//! | [`context`]    | `NpcContext<'a>` — per-tick borrowed port bundle        |
//! | [`state`]      | `BehaviorState` and the Enter→Update→Exit protocol      |
//! | [`idle`], [`patrol`], [`pursue`], [`attack`], [`runaway`] | the five behaviors |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                    |
//!
//! # The lifecycle protocol
//!
//! Every `BehaviorState` runs **Enter → Update× → Exit**, driven by one
//! [`process`][state::BehaviorState::process] call per tick.  Phases cascade
//! within a call: a fresh state runs its entry effects and its first update
//! in the same tick, and a state that decides a transition runs its exit
//! effects and hands back the successor in the same tick.  A state is
//! single-use — once it has exited, it is replaced, never re-entered.
//!
//! Transitions are decided in Update by evaluating perception predicates in
//! a fixed order; the first match wins.  That ordering is a behavioral
//! contract (a target that is both visible and close behind triggers
//! pursuit, not flight), so the update functions return at the first firing
//! condition rather than scoring alternatives.
//!
//! # Failure semantics
//!
//! Constructing a successor can fail when a required capability is absent
//! (no audio cue for Attack, no "Safe"-tagged object for Runaway).  The
//! error aborts the transition: the current state stays live in Update and
//! the error surfaces to the driver.  Nothing half-enters.

pub mod attack;
pub mod context;
pub mod error;
pub mod idle;
pub mod patrol;
pub mod perception;
pub mod pursue;
pub mod runaway;
pub mod stage;
pub mod state;

#[cfg(test)]
mod tests;

pub use context::NpcContext;
pub use error::{BehaviorError, BehaviorResult};
pub use stage::{BehaviorKind, Stage};
pub use state::BehaviorState;

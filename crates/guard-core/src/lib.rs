//! `guard-core` — foundational types for the guard NPC behavior framework.
//!
//! This crate is a dependency of every other `guard-*` crate.  It
//! intentionally has no `guard-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `NpcId`, `ObjectId`                               |
//! | [`vec`]    | `Vec3`, distance/angle helpers, facing rotation   |
//! | [`time`]   | `Tick`, `TickClock`                               |
//! | [`rng`]    | `NpcRng` (per-NPC), `WorldRng` (global)           |
//! | [`config`] | `SimConfig`                                       |
//! | [`error`]  | `GuardError`, `GuardResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{GuardError, GuardResult};
pub use ids::{NpcId, ObjectId};
pub use rng::{NpcRng, WorldRng};
pub use time::{Tick, TickClock};
pub use vec::Vec3;

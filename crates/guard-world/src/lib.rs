//! `guard-world` — the boundary between the behavior core and the host
//! environment.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ports`]       | `Navigation`, `Signals`, `AudioCue` capability traits; `Pose` |
//! | [`environment`] | `Discovery` trait + `StaticEnvironment` (tagged objects)  |
//! | [`waypoints`]   | `WaypointRegistry` — immutable patrol checkpoint list     |
//! | [`memory`]      | In-process port implementations (`MemoryNav`, …)          |
//! | [`error`]       | `WorldError`, `WorldResult<T>`                            |
//!
//! # Design notes
//!
//! The behavior core never touches a concrete engine type: every side effect
//! it performs goes through one of the capability traits in [`ports`], and
//! every scene lookup goes through [`environment::Discovery`].  The `memory`
//! module provides self-contained implementations good enough to run whole
//! scenarios (and all tests) without a game engine; a real host swaps in its
//! own navigation mesh and animation controller behind the same traits.

pub mod environment;
pub mod error;
pub mod memory;
pub mod ports;
pub mod waypoints;


pub use environment::{Discovery, StaticEnvironment, TaggedObject};
pub use error::{WorldError, WorldResult};
pub use memory::{MemoryAudio, MemoryNav, MemorySignals};
pub use ports::{AudioCue, Navigation, Pose, Signals};
pub use waypoints::WaypointRegistry;

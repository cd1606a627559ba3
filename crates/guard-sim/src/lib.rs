//! `guard-sim` — frame driver for guard NPCs.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Target    — ask the TargetTrack for the target's pose this tick.
//!   ② Integrate — advance each NPC's navigation kinematics and sync its
//!                 pose (position from the nav, facing from the heading).
//!   ③ Behave    — run each NPC's controller: one `process()` call on the
//!                 live BehaviorState; adopt the successor if one is
//!                 returned and report the transition to the observer.
//! ```
//!
//! Strictly single-threaded and sequential: each NPC's controller and state
//! chain is owned exclusively by that NPC, and the only shared resources
//! (environment, waypoint registry) are built eagerly by [`SimBuilder`]
//! before the first tick and never mutated afterward.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let sim = SimBuilder::new(SimConfig::default(), FixedTarget(Pose::at(target)))
//!     .environment(env)
//!     .spawn(NpcSpec::at(Vec3::ZERO))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod controller;
pub mod error;
pub mod npc;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use controller::Controller;
pub use error::{SimError, SimResult};
pub use npc::{Npc, NpcSpec};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{FixedTarget, Sim, TargetTrack};

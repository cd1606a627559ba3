//! Simulation observer trait for progress reporting and transition logging.

use guard_behavior::BehaviorKind;
use guard_core::{NpcId, Tick};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — transition printer
///
/// ```rust,ignore
/// struct TransitionPrinter;
///
/// impl SimObserver for TransitionPrinter {
///     fn on_transition(&mut self, npc: NpcId, tick: Tick, from: BehaviorKind, to: BehaviorKind) {
///         println!("{tick} {npc}: {from} -> {to}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called whenever an NPC's controller swaps states this tick.
    fn on_transition(&mut self, _npc: NpcId, _tick: Tick, _from: BehaviorKind, _to: BehaviorKind) {}

    /// Called at the end of each tick.  `npc_count` is the number of NPCs
    /// that were processed.
    fn on_tick_end(&mut self, _tick: Tick, _npc_count: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

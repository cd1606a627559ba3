//! The patrol checkpoint registry.
//!
//! The registry is built **once**, eagerly, from discovery — before any NPC
//! ticks — and is immutable for the life of the process.  Every patrolling
//! NPC reads the same `&WaypointRegistry`, so there is no initialization
//! race and no hidden global: whoever builds the simulation constructs the
//! registry and passes it down by reference.

use guard_core::Vec3;

use crate::environment::{Discovery, TaggedObject};

/// The tag checkpoint objects carry in the environment.
pub const CHECKPOINT_TAG: &str = "Checkpoint";

/// Ordered, read-only list of patrol checkpoints.
///
/// Order is discovery (registration) order; identities are unique because
/// the environment enforces unique `ObjectId`s.  An empty registry is a
/// legal degenerate configuration — patrol behavior holds position instead
/// of faulting.
#[derive(Clone, Debug)]
pub struct WaypointRegistry {
    checkpoints: Vec<TaggedObject>,
}

impl WaypointRegistry {
    /// Populate from every `"Checkpoint"`-tagged object in the environment.
    pub fn from_discovery(discovery: &dyn Discovery) -> Self {
        Self { checkpoints: discovery.find_tagged(CHECKPOINT_TAG) }
    }

    /// Build directly from a checkpoint list (tests, scripted scenarios).
    pub fn from_objects(checkpoints: Vec<TaggedObject>) -> Self {
        Self { checkpoints }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Position of checkpoint `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; callers index only with values
    /// produced by [`nearest_index`][Self::nearest_index] and
    /// [`next_index`][Self::next_index].
    #[inline]
    pub fn position(&self, index: usize) -> Vec3 {
        self.checkpoints[index].position
    }

    /// Index of the checkpoint nearest to `from`, or `None` when empty.
    /// Linear scan — registries are a handful of points.
    pub fn nearest_index(&self, from: Vec3) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, cp) in self.checkpoints.iter().enumerate() {
            let d = from.distance(cp.position);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// The index after `index`, wrapping to the first checkpoint after the
    /// last.
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        if index >= self.checkpoints.len() - 1 { 0 } else { index + 1 }
    }

    /// The index before `index`, wrapping to the last checkpoint before the
    /// first.  Patrol entry seeds its cursor with the predecessor of the
    /// nearest checkpoint so that the first advance lands exactly on it.
    #[inline]
    pub fn prev_index(&self, index: usize) -> usize {
        if index == 0 { self.checkpoints.len() - 1 } else { index - 1 }
    }
}

//! Tagged-object discovery.
//!
//! The host environment exposes its scene through tags ("Checkpoint",
//! "Safe", …).  The behavior layer looks objects up through the [`Discovery`]
//! trait; [`StaticEnvironment`] is the concrete implementation for
//! self-contained simulations, holding a tag index and a per-tag R-tree
//! (via `rstar`) for nearest-object queries.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use guard_core::{ObjectId, Vec3};

use crate::{WorldError, WorldResult};

// ── TaggedObject ──────────────────────────────────────────────────────────────

/// A scene object visible to discovery queries: an identity and a position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedObject {
    pub id: ObjectId,
    pub position: Vec3,
}

// ── Discovery ─────────────────────────────────────────────────────────────────

/// Scene lookup capability.
///
/// Both operations are intended for one-time use (registry population, safe
/// location resolution at state construction), not per-tick polling.
pub trait Discovery {
    /// All objects carrying `tag`, in registration order.  Unknown tags
    /// yield an empty list.
    fn find_tagged(&self, tag: &str) -> Vec<TaggedObject>;

    /// The object carrying `tag` nearest to `from`, or `None` if the tag
    /// has no objects.
    fn find_nearest_tagged(&self, tag: &str, from: Vec3) -> Option<TaggedObject>;
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in a per-tag R-tree: a 3-D point with the associated object.
#[derive(Clone)]
struct ObjectEntry {
    point: [f32; 3],
    object: TaggedObject,
}

impl RTreeObject for ObjectEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ObjectEntry {
    /// Squared Euclidean distance — monotonic with true distance, so
    /// nearest-neighbor ordering is exact.
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── StaticEnvironment ─────────────────────────────────────────────────────────

/// A fixed set of tagged objects with O(log n) nearest queries.
///
/// Built once before the first tick and never mutated afterward, so sharing
/// `&StaticEnvironment` across every NPC is free of synchronization concerns.
pub struct StaticEnvironment {
    /// Registration-ordered objects per tag.
    by_tag: FxHashMap<String, Vec<TaggedObject>>,

    /// Per-tag spatial index for nearest-object queries.
    trees: FxHashMap<String, RTree<ObjectEntry>>,

    /// All registered identities, for duplicate detection.
    ids: FxHashMap<ObjectId, ()>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self {
            by_tag: FxHashMap::default(),
            trees: FxHashMap::default(),
            ids: FxHashMap::default(),
        }
    }

    /// Register one object under `tag`.
    ///
    /// Object identities must be unique across the whole environment;
    /// re-registering an `ObjectId` is rejected.
    pub fn register(&mut self, tag: &str, object: TaggedObject) -> WorldResult<()> {
        if self.ids.insert(object.id, ()).is_some() {
            return Err(WorldError::DuplicateObject(object.id));
        }
        self.by_tag.entry(tag.to_owned()).or_default().push(object);
        self.trees.entry(tag.to_owned()).or_insert_with(RTree::new).insert(ObjectEntry {
            point: [object.position.x, object.position.y, object.position.z],
            object,
        });
        Ok(())
    }

    /// Register `positions` under `tag`, assigning sequential `ObjectId`s
    /// starting at `first_id`.  Returns the assigned objects.
    pub fn register_all(
        &mut self,
        tag: &str,
        first_id: u32,
        positions: &[Vec3],
    ) -> WorldResult<Vec<TaggedObject>> {
        let mut objects = Vec::with_capacity(positions.len());
        for (i, &position) in positions.iter().enumerate() {
            let object = TaggedObject { id: ObjectId(first_id + i as u32), position };
            self.register(tag, object)?;
            objects.push(object);
        }
        Ok(objects)
    }

    /// Number of objects registered under `tag`.
    pub fn count_tagged(&self, tag: &str) -> usize {
        self.by_tag.get(tag).map_or(0, Vec::len)
    }
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Discovery for StaticEnvironment {
    fn find_tagged(&self, tag: &str) -> Vec<TaggedObject> {
        self.by_tag.get(tag).cloned().unwrap_or_default()
    }

    fn find_nearest_tagged(&self, tag: &str, from: Vec3) -> Option<TaggedObject> {
        self.trees
            .get(tag)?
            .nearest_neighbor(&[from.x, from.y, from.z])
            .map(|entry| entry.object)
    }
}

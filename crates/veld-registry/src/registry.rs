//! Concurrent id→entity mapping with snapshot enumeration.
//!
//! [`EntityRegistry`] is the membership authority for a zone: one
//! instance tracks participants, another tracks mobs. It supports
//! add-if-absent, remove-if-present, lookup, and a point-in-time
//! enumeration for broadcast fan-out.
//!
//! # Locking
//!
//! Backed by a sharded concurrent map, so unrelated add/remove/lookup
//! operations do not serialize against each other and there is no
//! zone-wide lock. [`snapshot`](EntityRegistry::snapshot) copies the
//! live entries into a `Vec` so callers iterate without holding any
//! shard lock — mandatory, because broadcast iteration calls into
//! network-facing notifier code.

use std::hash::Hash;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Concurrent mapping from entity id to entity.
///
/// `V` is typically `Arc<Participant>` or `Arc<Mob>`; cloning a value
/// out of the map is a reference-count bump, not a deep copy.
#[derive(Debug)]
pub struct EntityRegistry<K: Eq + Hash, V> {
    entries: DashMap<K, V>,
}

impl<K, V> EntityRegistry<K, V>
where
    K: Copy + Eq + Hash,
    V: Clone,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Insert `entity` under `id` only if `id` is absent.
    ///
    /// Returns whether the insertion occurred. `false` carries no
    /// error meaning — a duplicate id is a normal admission conflict
    /// the caller decides how to handle. The check and the insert are
    /// one atomic step on the owning shard.
    pub fn try_add(&self, id: K, entity: V) -> bool {
        match self.entries.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(entity);
                true
            }
        }
    }

    /// Remove and return the entity under `id`, if present.
    ///
    /// `None` means the id was not a member; not an error. The removed
    /// value is returned so departure handling can still reference the
    /// entity after it stopped being a member.
    pub fn try_remove(&self, id: K) -> Option<V> {
        self.entries.remove(&id).map(|(_, entity)| entity)
    }

    /// Look up the entity under `id`.
    pub fn get(&self, id: K) -> Option<V> {
        self.entries.get(&id).map(|entry| entry.value().clone())
    }

    /// Whether `id` is currently a member.
    pub fn contains(&self, id: K) -> bool {
        self.entries.contains_key(&id)
    }

    /// Point-in-time copy of all entries for lock-free iteration.
    ///
    /// Enumeration order is unspecified and must not be relied on.
    /// Concurrent mutation during the copy yields a valid snapshot of
    /// *some* interleaving: an entity added or removed mid-copy may or
    /// may not appear, which is the accepted audience relaxation for
    /// broadcast fan-out.
    pub fn snapshot(&self) -> Vec<(K, V)> {
        self.entries
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }

    /// Number of current members.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for EntityRegistry<K, V>
where
    K: Copy + Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

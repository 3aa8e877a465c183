//! Transient entity (mob) representation.

use std::fmt;
use std::sync::{Arc, OnceLock};

use veld_core::{MobId, MobKindId, Position};

/// A non-participant actor spawned and owned by a zone.
///
/// Created by spawning logic with a template kind and an initial
/// position; the in-zone id is assigned exactly once by the zone at
/// spawn time. A mob never migrates between zones, so its id is only
/// meaningful within the zone that assigned it.
pub struct Mob {
    id: OnceLock<MobId>,
    kind: MobKindId,
    position: Position,
}

impl Mob {
    /// Create an unspawned mob of the given kind at `position`.
    pub fn new(kind: MobKindId, position: Position) -> Arc<Self> {
        Arc::new(Self {
            id: OnceLock::new(),
            kind,
            position,
        })
    }

    /// The in-zone id, or `None` before the mob has been spawned.
    pub fn id(&self) -> Option<MobId> {
        self.id.get().copied()
    }

    /// Template (kind) identifier; shared by all mobs of this kind.
    pub fn kind(&self) -> MobKindId {
        self.kind
    }

    /// Spawn position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Assign the in-zone id. Returns `false` if an id was already
    /// assigned — a mob cannot be spawned twice.
    pub(crate) fn assign_id(&self, id: MobId) -> bool {
        self.id.set(id).is_ok()
    }
}

impl fmt::Debug for Mob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mob")
            .field("id", &self.id.get())
            .field("kind", &self.kind)
            .field("position", &self.position)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspawned_mob_has_no_id() {
        let mob = Mob::new(MobKindId(1002), Position::new(10, 20));
        assert_eq!(mob.id(), None);
        assert_eq!(mob.kind(), MobKindId(1002));
        assert_eq!(mob.position(), Position::new(10, 20));
    }

    #[test]
    fn id_assignment_is_once_only() {
        let mob = Mob::new(MobKindId(1002), Position::new(0, 0));
        assert!(mob.assign_id(MobId(1)));
        assert!(!mob.assign_id(MobId(2)));
        assert_eq!(mob.id(), Some(MobId(1)));
    }
}

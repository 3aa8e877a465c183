//! Participant (player) representation inside a zone.
//!
//! Participants are created and destroyed by the session layer; this
//! crate only attaches and detaches zone membership. The zone reads a
//! participant's id and destination handle and subscribes to its change
//! sources — it never mutates participant attributes.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use veld_core::{
    AutoAttacked, BuffApplied, CastStarted, Died, EquipmentChanged, EventSource, ItemUsed,
    MaxHpChanged, Motion, Moved, PartyRoleChanged, PlayerId, SessionHandle, SkillUsed,
    SpeedChanged, VitalChanged,
};

use crate::zone::Zone;

/// The per-participant change-notification sources.
///
/// Game logic (movement handling, combat resolution, stat computation)
/// emits into these; while the participant is a zone member, each
/// source carries one listener forwarding into that zone's dispatch
/// handlers. HP, MP, and SP are distinct sources even though they feed
/// one notifier send — emitters fire exactly the pool that changed.
#[derive(Debug, Default)]
pub struct ChangeSources {
    /// Position changes.
    pub position: EventSource<Moved>,
    /// Visual motions (sit, stand, gestures).
    pub motion: EventSource<Motion>,
    /// Equipment slot changes.
    pub equipment: EventSource<EquipmentChanged>,
    /// Party role changes.
    pub party: EventSource<PartyRoleChanged>,
    /// Attack/movement speed changes.
    pub speed: EventSource<SpeedChanged>,
    /// Targeted skill use.
    pub skill: EventSource<SkillUsed>,
    /// Auto-attacks.
    pub auto_attack: EventSource<AutoAttacked>,
    /// Death.
    pub death: EventSource<Died>,
    /// Buff application.
    pub buff: EventSource<BuffApplied>,
    /// Cast start.
    pub cast: EventSource<CastStarted>,
    /// Usable-item consumption.
    pub item: EventSource<ItemUsed>,
    /// Current HP changes.
    pub hp: EventSource<VitalChanged>,
    /// Current MP changes.
    pub mp: EventSource<VitalChanged>,
    /// Current SP changes.
    pub sp: EventSource<VitalChanged>,
    /// Maximum HP changes.
    pub max_hp: EventSource<MaxHpChanged>,
}

/// A connected, externally-authenticated actor inside at most one zone.
///
/// Shared as `Arc<Participant>`: the owning zone's player registry
/// holds one strong reference while the participant is a member, and
/// the session layer holds another for the connection's lifetime. The
/// zone back-reference is `Weak`, so registries remain the only strong
/// owners of zones.
pub struct Participant {
    id: PlayerId,
    session: SessionHandle,
    zone: Mutex<Option<Weak<Zone>>>,
    sources: ChangeSources,
}

impl Participant {
    /// Create a participant with its externally assigned identity and
    /// notification destination.
    pub fn new(id: PlayerId, session: SessionHandle) -> Arc<Self> {
        Arc::new(Self {
            id,
            session,
            zone: Mutex::new(None),
            sources: ChangeSources::default(),
        })
    }

    /// World-unique participant id.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Notification destination handle.
    pub fn session(&self) -> SessionHandle {
        self.session
    }

    /// The change sources game logic emits into.
    pub fn events(&self) -> &ChangeSources {
        &self.sources
    }

    /// The zone this participant currently belongs to, if any.
    ///
    /// `None` either outside any zone or, transiently, once the owning
    /// zone itself has been dropped.
    pub fn current_zone(&self) -> Option<Arc<Zone>> {
        self.zone.lock().as_ref().and_then(Weak::upgrade)
    }

    /// Record the owning zone. Called only from the zone's join path,
    /// after registry admission.
    pub(crate) fn set_zone(&self, zone: &Arc<Zone>) {
        *self.zone.lock() = Some(Arc::downgrade(zone));
    }

    /// Clear the owning zone. Called only from the zone's leave path,
    /// after registry removal.
    pub(crate) fn clear_zone(&self) {
        *self.zone.lock() = None;
    }
}

impl fmt::Debug for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("id", &self.id)
            .field("session", &self.session)
            .field("in_zone", &self.zone.lock().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_participant_is_in_no_zone() {
        let p = Participant::new(PlayerId(1), SessionHandle(100));
        assert_eq!(p.id(), PlayerId(1));
        assert_eq!(p.session(), SessionHandle(100));
        assert!(p.current_zone().is_none());
    }

    #[test]
    fn sources_start_with_no_listeners() {
        let p = Participant::new(PlayerId(1), SessionHandle(100));
        assert_eq!(p.events().position.listener_count(), 0);
        assert_eq!(p.events().max_hp.listener_count(), 0);
    }

    #[test]
    fn debug_impl_doesnt_panic() {
        let p = Participant::new(PlayerId(1), SessionHandle(100));
        let debug = format!("{p:?}");
        assert!(debug.contains("Participant"));
        assert!(debug.contains("in_zone"));
    }
}

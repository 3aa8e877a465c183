//! The zone orchestrator and its broadcast dispatch handlers.
//!
//! One [`Zone`] per world region, created at startup and alive for the
//! process duration. Many independent threads (one per connected client
//! plus background simulation activity) call into a shared `Arc<Zone>`
//! concurrently; every operation takes `&self`.
//!
//! # Locking
//!
//! The registries and the id allocator are the only shared mutable
//! state, and each synchronizes internally with narrow critical
//! sections. Broadcast fan-out always iterates a registry snapshot, so
//! no lock is ever held while calling into the notifier. The audience
//! of any single event is therefore a best-effort point-in-time view: a
//! participant joining or leaving mid-fan-out may miss or still receive
//! that one event. The join protocol's own introduction pass guarantees
//! complete mutual knowledge at join completion regardless.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, error};

use veld_core::{
    AutoAttacked, BuffApplied, CastStarted, Died, EquipmentChanged, ItemUsed, MaxHpChanged,
    MobId, Motion, Moved, PartyRoleChanged, PlayerId, SessionHandle, SkillUsed, SpeedChanged,
    VitalChanged, ZoneId,
};
use veld_registry::{EntityRegistry, MobIdAllocator};

use crate::mob::Mob;
use crate::notifier::Notifier;
use crate::participant::Participant;
use crate::subscription::SubscriptionManager;

// Compile-time assertion: Zone is Send + Sync — it is shared across
// client threads as Arc<Zone>. Fails to compile if any field is not.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<Zone>();
    }
};

/// Whether a broadcast reaches the originating participant.
///
/// Motion and vitals notices include the sender (the client renders its
/// own gesture and refreshed bars from the broadcast); every other
/// category excludes it, since the source already knows its own change.
/// This asymmetry is observed protocol behavior, not an oversight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Audience {
    Others,
    Everyone,
}

/// Authoritative per-region state container.
///
/// Owns the player and mob registries, the mob id allocator, and the
/// subscription wiring; consumes a [`Notifier`] for all outward
/// delivery. See the crate docs for the membership protocol.
pub struct Zone {
    id: ZoneId,
    players: EntityRegistry<PlayerId, Arc<Participant>>,
    mobs: EntityRegistry<MobId, Arc<Mob>>,
    mob_ids: MobIdAllocator,
    subscriptions: SubscriptionManager,
    notifier: Arc<dyn Notifier>,
}

impl Zone {
    /// Create an empty zone delivering through `notifier`.
    pub fn new(id: ZoneId, notifier: Arc<dyn Notifier>) -> Arc<Self> {
        Arc::new(Self {
            id,
            players: EntityRegistry::new(),
            mobs: EntityRegistry::new(),
            mob_ids: MobIdAllocator::new(),
            subscriptions: SubscriptionManager::new(),
            notifier,
        })
    }

    /// This zone's region id.
    pub fn id(&self) -> ZoneId {
        self.id
    }

    /// Number of current participant members.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of currently tracked mobs.
    pub fn mob_count(&self) -> usize {
        self.mobs.len()
    }

    // ── membership ─────────────────────────────────────────────

    /// Admit `participant` into this zone.
    ///
    /// On success: records the zone back-reference, wires the
    /// participant's change sources to this zone's dispatch handlers,
    /// then runs the bidirectional introduction — every existing member
    /// is told of the newcomer and the newcomer of every existing
    /// member — before returning. A fully-joined participant therefore
    /// has complete knowledge of, and is known to, everyone present at
    /// join completion.
    ///
    /// Returns `false` with no state change and no notifications if the
    /// participant's id is already a member. The registry add is the
    /// sole admission authority; concurrent joins of the same id admit
    /// exactly one.
    pub fn join(self: &Arc<Self>, participant: &Arc<Participant>) -> bool {
        if !self.players.try_add(participant.id(), Arc::clone(participant)) {
            debug!(zone = %self.id, player = %participant.id(), "join rejected, id already present");
            return false;
        }

        participant.set_zone(self);
        if let Err(err) = self.subscriptions.attach(self, participant) {
            // Unreachable while join/leave stay paired; a stale wiring
            // entry would misdeliver events, so surface it loudly.
            error!(zone = %self.id, %err, "subscription attach failed");
        }

        // Snapshot taken after insertion: anyone admitted before this
        // point is introduced here; anyone after is introduced by their
        // own join's pass.
        for (id, other) in self.players.snapshot() {
            if id == participant.id() {
                continue;
            }
            self.notifier.arrival(other.session(), participant);
            self.notifier.arrival(participant.session(), &other);
        }

        debug!(zone = %self.id, player = %participant.id(), "participant joined");
        true
    }

    /// Remove `participant` from this zone.
    ///
    /// On success: clears the zone back-reference, announces the
    /// departure to every remaining member, then unwires the change
    /// sources. Returns `false` if the participant was not a member.
    pub fn leave(&self, participant: &Participant) -> bool {
        let Some(gone) = self.players.try_remove(participant.id()) else {
            return false;
        };

        gone.clear_zone();

        // Snapshot taken after removal — the departing participant is
        // not in its own departure audience.
        for (_, other) in self.players.snapshot() {
            self.notifier.departure(other.session(), &gone);
        }

        if let Err(err) = self.subscriptions.detach(&gone) {
            error!(zone = %self.id, %err, "subscription detach failed");
        }

        debug!(zone = %self.id, player = %gone.id(), "participant left");
        true
    }

    /// Look up a member participant by id.
    pub fn player(&self, id: PlayerId) -> Option<Arc<Participant>> {
        self.players.get(id)
    }

    /// Look up a tracked mob by in-zone id.
    pub fn mob(&self, id: MobId) -> Option<Arc<Mob>> {
        self.mobs.get(id)
    }

    // ── spawning ───────────────────────────────────────────────

    /// Spawn `mob` into this zone.
    ///
    /// Allocates a fresh in-zone id, assigns it to the mob, registers
    /// it, and announces the spawn to every current member. Returns
    /// whether registration occurred.
    ///
    /// With monotonic fresh ids, registration cannot conflict; a
    /// collision means the allocator or registry state is corrupt and
    /// is logged as a defect rather than handled. Spawning a mob that
    /// already carries an id is likewise a caller defect.
    pub fn spawn_mob(&self, mob: &Arc<Mob>) -> bool {
        let id = self.mob_ids.next();
        if !mob.assign_id(id) {
            error!(zone = %self.id, mob = %id, "spawn rejected, mob already spawned");
            return false;
        }
        if !self.mobs.try_add(id, Arc::clone(mob)) {
            debug_assert!(false, "mob id {id} collision in zone {}", self.id);
            error!(zone = %self.id, mob = %id, "mob id collision, allocator state corrupt");
            return false;
        }

        for (_, member) in self.players.snapshot() {
            self.notifier.mob_spawned(member.session(), mob);
        }

        debug!(zone = %self.id, mob = %id, kind = %mob.kind(), "mob spawned");
        true
    }

    // ── broadcast dispatch ─────────────────────────────────────

    /// Fan a send out to the current membership snapshot.
    ///
    /// Never holds a lock across `send`: the snapshot is a detached
    /// copy and the notifier may be arbitrarily slow.
    fn broadcast<F>(&self, origin: PlayerId, audience: Audience, send: F)
    where
        F: Fn(SessionHandle),
    {
        for (id, member) in self.players.snapshot() {
            if audience == Audience::Others && id == origin {
                continue;
            }
            send(member.session());
        }
    }

    pub(crate) fn dispatch_moved(&self, who: &Arc<Participant>, ev: &Moved) {
        self.broadcast(who.id(), Audience::Others, |dst| {
            self.notifier.moved(dst, who, ev.to);
        });
    }

    pub(crate) fn dispatch_motion(&self, who: &Arc<Participant>, ev: &Motion) {
        self.broadcast(who.id(), Audience::Everyone, |dst| {
            self.notifier.motion(dst, who.id(), ev.code);
        });
    }

    pub(crate) fn dispatch_equipment_changed(&self, who: &Arc<Participant>, ev: &EquipmentChanged) {
        self.broadcast(who.id(), Audience::Others, |dst| {
            self.notifier.equipment_changed(dst, who.id(), ev.item, ev.slot);
        });
    }

    pub(crate) fn dispatch_party_role_changed(&self, who: &Arc<Participant>, ev: &PartyRoleChanged) {
        self.broadcast(who.id(), Audience::Others, |dst| {
            self.notifier.party_role_changed(dst, who.id(), ev.role);
        });
    }

    pub(crate) fn dispatch_speed_changed(&self, who: &Arc<Participant>, _ev: &SpeedChanged) {
        self.broadcast(who.id(), Audience::Others, |dst| {
            self.notifier.speed_changed(dst, who);
        });
    }

    pub(crate) fn dispatch_skill_used(&self, who: &Arc<Participant>, ev: &SkillUsed) {
        self.broadcast(who.id(), Audience::Others, |dst| {
            self.notifier.skill_used(dst, who, ev.target, ev.skill, ev.result);
        });
    }

    pub(crate) fn dispatch_auto_attack(&self, who: &Arc<Participant>, ev: &AutoAttacked) {
        self.broadcast(who.id(), Audience::Others, |dst| {
            self.notifier.auto_attack(dst, who, ev.target, ev.result);
        });
    }

    pub(crate) fn dispatch_died(&self, who: &Arc<Participant>, ev: &Died) {
        self.broadcast(who.id(), Audience::Others, |dst| {
            self.notifier.killed(dst, who, ev.killer);
        });
    }

    pub(crate) fn dispatch_buff_applied(&self, who: &Arc<Participant>, ev: &BuffApplied) {
        self.broadcast(who.id(), Audience::Others, |dst| {
            self.notifier.buff_applied(dst, who, ev.target, ev.buff);
        });
    }

    pub(crate) fn dispatch_cast_started(&self, who: &Arc<Participant>, ev: &CastStarted) {
        self.broadcast(who.id(), Audience::Others, |dst| {
            self.notifier.cast_started(dst, who, ev.target, ev.skill);
        });
    }

    pub(crate) fn dispatch_item_used(&self, who: &Arc<Participant>, ev: &ItemUsed) {
        self.broadcast(who.id(), Audience::Others, |dst| {
            self.notifier.item_used(dst, who, ev.item);
        });
    }

    pub(crate) fn dispatch_vital_changed(&self, who: &Arc<Participant>, _ev: &VitalChanged) {
        // HP, MP, and SP sources all funnel into the one recovery
        // notice; the notifier reads current values from `who`.
        self.broadcast(who.id(), Audience::Everyone, |dst| {
            self.notifier.vitals_recovered(dst, who);
        });
    }

    pub(crate) fn dispatch_max_hp_changed(&self, who: &Arc<Participant>, ev: &MaxHpChanged) {
        self.broadcast(who.id(), Audience::Everyone, |dst| {
            self.notifier.max_hp_changed(dst, who.id(), ev.value);
        });
    }
}

impl fmt::Debug for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zone")
            .field("id", &self.id)
            .field("players", &self.players.len())
            .field("mobs", &self.mobs.len())
            .field("wired", &self.subscriptions.attached_count())
            .finish()
    }
}

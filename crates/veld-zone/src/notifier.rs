//! The outward notification boundary.
//!
//! A [`Notifier`] turns semantic events into deliveries to one
//! destination. Serialization, transport, retries, and teardown of dead
//! destinations are entirely its concern: the zone core calls it
//! fire-and-forget while holding no locks, and a notifier failure never
//! rolls back the membership or state mutation that triggered it.
//! Should a notifier block, the dispatching caller blocks with it.

use veld_core::{
    ActorRef, BuffId, EquipSlot, ItemId, MotionCode, PartyRole, PlayerId, Position,
    SessionHandle, SkillId,
};

use crate::mob::Mob;
use crate::participant::Participant;

/// Delivers semantic events to a participant's destination handle.
///
/// One method per event category the zone broadcasts. Implementations
/// must be callable from any thread: dispatch handlers run on whichever
/// thread emitted the underlying change.
pub trait Notifier: Send + Sync {
    /// `who` became a member of the destination's zone.
    fn arrival(&self, dst: SessionHandle, who: &Participant);
    /// `who` stopped being a member of the destination's zone.
    fn departure(&self, dst: SessionHandle, who: &Participant);
    /// `who` moved to `to`.
    fn moved(&self, dst: SessionHandle, who: &Participant, to: Position);
    /// `who` performed a visual motion.
    fn motion(&self, dst: SessionHandle, who: PlayerId, code: MotionCode);
    /// `who` changed the item in an equipment slot.
    fn equipment_changed(&self, dst: SessionHandle, who: PlayerId, item: ItemId, slot: EquipSlot);
    /// `who`'s party role changed.
    fn party_role_changed(&self, dst: SessionHandle, who: PlayerId, role: PartyRole);
    /// `who`'s attack or movement speed changed; current values are
    /// read from the participant's own state.
    fn speed_changed(&self, dst: SessionHandle, who: &Participant);
    /// `caster` used `skill` on `target` with the given protocol result.
    fn skill_used(
        &self,
        dst: SessionHandle,
        caster: &Participant,
        target: ActorRef,
        skill: SkillId,
        result: i32,
    );
    /// `attacker` auto-attacked `target` with the given protocol result.
    fn auto_attack(&self, dst: SessionHandle, attacker: &Participant, target: ActorRef, result: i32);
    /// `victim` died to `killer`.
    fn killed(&self, dst: SessionHandle, victim: &Participant, killer: ActorRef);
    /// `caster` applied `buff` to `target`.
    fn buff_applied(&self, dst: SessionHandle, caster: &Participant, target: ActorRef, buff: BuffId);
    /// `caster` began casting `skill` at `target`.
    fn cast_started(&self, dst: SessionHandle, caster: &Participant, target: ActorRef, skill: SkillId);
    /// `who` consumed a usable item.
    fn item_used(&self, dst: SessionHandle, who: &Participant, item: ItemId);
    /// One or more of `who`'s HP/MP/SP pools refreshed; current values
    /// are read from the participant's own state.
    fn vitals_recovered(&self, dst: SessionHandle, who: &Participant);
    /// `who`'s maximum HP changed to `new_max_hp`.
    fn max_hp_changed(&self, dst: SessionHandle, who: PlayerId, new_max_hp: u32);
    /// `mob` spawned in the destination's zone.
    fn mob_spawned(&self, dst: SessionHandle, mob: &Mob);
}

/// A [`Notifier`] that discards every notification.
///
/// For headless tools and tests that exercise zone membership without
/// a transport behind it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn arrival(&self, _dst: SessionHandle, _who: &Participant) {}
    fn departure(&self, _dst: SessionHandle, _who: &Participant) {}
    fn moved(&self, _dst: SessionHandle, _who: &Participant, _to: Position) {}
    fn motion(&self, _dst: SessionHandle, _who: PlayerId, _code: MotionCode) {}
    fn equipment_changed(
        &self,
        _dst: SessionHandle,
        _who: PlayerId,
        _item: ItemId,
        _slot: EquipSlot,
    ) {
    }
    fn party_role_changed(&self, _dst: SessionHandle, _who: PlayerId, _role: PartyRole) {}
    fn speed_changed(&self, _dst: SessionHandle, _who: &Participant) {}
    fn skill_used(
        &self,
        _dst: SessionHandle,
        _caster: &Participant,
        _target: ActorRef,
        _skill: SkillId,
        _result: i32,
    ) {
    }
    fn auto_attack(
        &self,
        _dst: SessionHandle,
        _attacker: &Participant,
        _target: ActorRef,
        _result: i32,
    ) {
    }
    fn killed(&self, _dst: SessionHandle, _victim: &Participant, _killer: ActorRef) {}
    fn buff_applied(
        &self,
        _dst: SessionHandle,
        _caster: &Participant,
        _target: ActorRef,
        _buff: BuffId,
    ) {
    }
    fn cast_started(
        &self,
        _dst: SessionHandle,
        _caster: &Participant,
        _target: ActorRef,
        _skill: SkillId,
    ) {
    }
    fn item_used(&self, _dst: SessionHandle, _who: &Participant, _item: ItemId) {}
    fn vitals_recovered(&self, _dst: SessionHandle, _who: &Participant) {}
    fn max_hp_changed(&self, _dst: SessionHandle, _who: PlayerId, _new_max_hp: u32) {}
    fn mob_spawned(&self, _dst: SessionHandle, _mob: &Mob) {}
}

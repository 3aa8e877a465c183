//! Change-event payloads emitted by participant change sources.
//!
//! One payload type per change category. Game logic (stat computation,
//! movement handling, combat resolution) constructs these and emits them
//! through the participant's [`EventSource`](crate::source::EventSource)
//! fields; the zone forwards them to the current audience.
//!
//! Payloads are small copy types — the emitting entity keeps ownership
//! of its own state, the event carries only what the notifier needs.

use crate::types::{
    ActorRef, BuffId, EquipSlot, ItemId, MotionCode, PartyRole, Position, SkillId, Vital,
};

/// The participant moved to a new position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Moved {
    /// Destination tile.
    pub to: Position,
}

/// The participant performed a visual motion (sit, gesture, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    /// Protocol motion code.
    pub code: MotionCode,
}

/// The participant changed what is worn in an equipment slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipmentChanged {
    /// The affected slot.
    pub slot: EquipSlot,
    /// The item now occupying the slot.
    pub item: ItemId,
}

/// The participant's party role changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartyRoleChanged {
    /// The new role.
    pub role: PartyRole,
}

/// The participant's attack or movement speed changed.
///
/// The recomputed values live on the participant's stat block, which
/// the notifier reads directly; the event itself carries nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpeedChanged;

/// The participant used a targeted skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillUsed {
    /// The skill used.
    pub skill: SkillId,
    /// The target actor.
    pub target: ActorRef,
    /// Protocol result value (damage, heal amount, or failure code).
    pub result: i32,
}

/// The participant performed an auto-attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoAttacked {
    /// The target actor.
    pub target: ActorRef,
    /// Protocol result value (damage dealt or miss code).
    pub result: i32,
}

/// The participant died.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Died {
    /// The actor credited with the kill.
    pub killer: ActorRef,
}

/// A buff was applied by the participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuffApplied {
    /// The actor receiving the buff.
    pub target: ActorRef,
    /// The applied buff.
    pub buff: BuffId,
}

/// The participant began casting a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastStarted {
    /// The cast target.
    pub target: ActorRef,
    /// The skill being cast.
    pub skill: SkillId,
}

/// The participant consumed a usable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemUsed {
    /// The consumed item.
    pub item: ItemId,
}

/// One of the participant's vital pools (HP/MP/SP) changed.
///
/// Each vital has its own change source; all three feed the notifier's
/// single vitals-recovered send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VitalChanged {
    /// Which pool changed.
    pub vital: Vital,
    /// The new current value.
    pub value: i32,
}

/// The participant's maximum HP changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxHpChanged {
    /// The new maximum.
    pub value: u32,
}

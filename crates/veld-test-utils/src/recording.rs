//! A notifier that records every send for test assertions.

use crossbeam_channel::{unbounded, Receiver, Sender};

use veld_core::{
    ActorRef, BuffId, EquipSlot, ItemId, MobId, MobKindId, MotionCode, PartyRole, PlayerId,
    Position, SessionHandle, SkillId,
};
use veld_zone::{Mob, Notifier, Participant};

/// One recorded notifier call, with entity references flattened to ids
/// so records are plain comparable values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Recorded {
    Arrival { dst: SessionHandle, who: PlayerId },
    Departure { dst: SessionHandle, who: PlayerId },
    Moved { dst: SessionHandle, who: PlayerId, to: Position },
    Motion { dst: SessionHandle, who: PlayerId, code: MotionCode },
    EquipmentChanged { dst: SessionHandle, who: PlayerId, item: ItemId, slot: EquipSlot },
    PartyRoleChanged { dst: SessionHandle, who: PlayerId, role: PartyRole },
    SpeedChanged { dst: SessionHandle, who: PlayerId },
    SkillUsed { dst: SessionHandle, caster: PlayerId, target: ActorRef, skill: SkillId, result: i32 },
    AutoAttack { dst: SessionHandle, attacker: PlayerId, target: ActorRef, result: i32 },
    Killed { dst: SessionHandle, victim: PlayerId, killer: ActorRef },
    BuffApplied { dst: SessionHandle, caster: PlayerId, target: ActorRef, buff: BuffId },
    CastStarted { dst: SessionHandle, caster: PlayerId, target: ActorRef, skill: SkillId },
    ItemUsed { dst: SessionHandle, who: PlayerId, item: ItemId },
    VitalsRecovered { dst: SessionHandle, who: PlayerId },
    MaxHpChanged { dst: SessionHandle, who: PlayerId, new_max_hp: u32 },
    MobSpawned { dst: SessionHandle, mob: Option<MobId>, kind: MobKindId },
}

impl Recorded {
    /// The destination this record was sent to.
    pub fn dst(&self) -> SessionHandle {
        match *self {
            Self::Arrival { dst, .. }
            | Self::Departure { dst, .. }
            | Self::Moved { dst, .. }
            | Self::Motion { dst, .. }
            | Self::EquipmentChanged { dst, .. }
            | Self::PartyRoleChanged { dst, .. }
            | Self::SpeedChanged { dst, .. }
            | Self::SkillUsed { dst, .. }
            | Self::AutoAttack { dst, .. }
            | Self::Killed { dst, .. }
            | Self::BuffApplied { dst, .. }
            | Self::CastStarted { dst, .. }
            | Self::ItemUsed { dst, .. }
            | Self::VitalsRecovered { dst, .. }
            | Self::MaxHpChanged { dst, .. }
            | Self::MobSpawned { dst, .. } => dst,
        }
    }
}

/// [`Notifier`] that pushes a [`Recorded`] value per call into an
/// unbounded channel.
///
/// The channel (rather than a locked `Vec`) keeps recording safe and
/// wait-free under the concurrent fan-out the zone core performs; tests
/// drain it between steps. Dropped sends are impossible — the receiver
/// lives as long as the notifier.
pub struct RecordingNotifier {
    tx: Sender<Recorded>,
    rx: Receiver<Recorded>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Remove and return everything recorded so far, in send order per
    /// sending thread.
    pub fn drain(&self) -> Vec<Recorded> {
        self.rx.try_iter().collect()
    }

    /// Drain and keep only records addressed to `dst`.
    ///
    /// Records addressed to other destinations stay queued for a
    /// later drain.
    pub fn drain_to(&self, dst: SessionHandle) -> Vec<Recorded> {
        let (matched, rest): (Vec<_>, Vec<_>) =
            self.drain().into_iter().partition(|r| r.dst() == dst);
        for r in rest {
            let _ = self.tx.send(r);
        }
        matched
    }

    /// Number of records currently waiting.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    fn record(&self, rec: Recorded) {
        // Unbounded channel with a held receiver: send cannot fail.
        let _ = self.tx.send(rec);
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for RecordingNotifier {
    fn arrival(&self, dst: SessionHandle, who: &Participant) {
        self.record(Recorded::Arrival { dst, who: who.id() });
    }
    fn departure(&self, dst: SessionHandle, who: &Participant) {
        self.record(Recorded::Departure { dst, who: who.id() });
    }
    fn moved(&self, dst: SessionHandle, who: &Participant, to: Position) {
        self.record(Recorded::Moved {
            dst,
            who: who.id(),
            to,
        });
    }
    fn motion(&self, dst: SessionHandle, who: PlayerId, code: MotionCode) {
        self.record(Recorded::Motion { dst, who, code });
    }
    fn equipment_changed(&self, dst: SessionHandle, who: PlayerId, item: ItemId, slot: EquipSlot) {
        self.record(Recorded::EquipmentChanged {
            dst,
            who,
            item,
            slot,
        });
    }
    fn party_role_changed(&self, dst: SessionHandle, who: PlayerId, role: PartyRole) {
        self.record(Recorded::PartyRoleChanged { dst, who, role });
    }
    fn speed_changed(&self, dst: SessionHandle, who: &Participant) {
        self.record(Recorded::SpeedChanged { dst, who: who.id() });
    }
    fn skill_used(
        &self,
        dst: SessionHandle,
        caster: &Participant,
        target: ActorRef,
        skill: SkillId,
        result: i32,
    ) {
        self.record(Recorded::SkillUsed {
            dst,
            caster: caster.id(),
            target,
            skill,
            result,
        });
    }
    fn auto_attack(
        &self,
        dst: SessionHandle,
        attacker: &Participant,
        target: ActorRef,
        result: i32,
    ) {
        self.record(Recorded::AutoAttack {
            dst,
            attacker: attacker.id(),
            target,
            result,
        });
    }
    fn killed(&self, dst: SessionHandle, victim: &Participant, killer: ActorRef) {
        self.record(Recorded::Killed {
            dst,
            victim: victim.id(),
            killer,
        });
    }
    fn buff_applied(&self, dst: SessionHandle, caster: &Participant, target: ActorRef, buff: BuffId) {
        self.record(Recorded::BuffApplied {
            dst,
            caster: caster.id(),
            target,
            buff,
        });
    }
    fn cast_started(
        &self,
        dst: SessionHandle,
        caster: &Participant,
        target: ActorRef,
        skill: SkillId,
    ) {
        self.record(Recorded::CastStarted {
            dst,
            caster: caster.id(),
            target,
            skill,
        });
    }
    fn item_used(&self, dst: SessionHandle, who: &Participant, item: ItemId) {
        self.record(Recorded::ItemUsed {
            dst,
            who: who.id(),
            item,
        });
    }
    fn vitals_recovered(&self, dst: SessionHandle, who: &Participant) {
        self.record(Recorded::VitalsRecovered { dst, who: who.id() });
    }
    fn max_hp_changed(&self, dst: SessionHandle, who: PlayerId, new_max_hp: u32) {
        self.record(Recorded::MaxHpChanged {
            dst,
            who,
            new_max_hp,
        });
    }
    fn mob_spawned(&self, dst: SessionHandle, mob: &Mob) {
        self.record(Recorded::MobSpawned {
            dst,
            mob: mob.id(),
            kind: mob.kind(),
        });
    }
}

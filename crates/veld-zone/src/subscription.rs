//! Subscription wiring between participants and a zone's dispatch
//! handlers.
//!
//! [`SubscriptionManager`] owns the wiring table: per attached
//! participant, the listener handle registered on each of its fifteen
//! change sources. Attach and detach are **not** idempotent — the
//! zone's join and leave paths are the only callers and always pair
//! them, so an unpaired call is reported as a [`WiringError`] defect
//! rather than silently absorbed.
//!
//! Listeners capture the zone and the originating participant as
//! `Weak` references. The strong ownership chain runs session layer →
//! participant and zone → registry → participant only; a subscription
//! that somehow outlives either end upgrades to `None` and fires into
//! nothing instead of a dangling reference. The leave path still always
//! detaches before the registry drops its `Arc` — the weak upgrade is a
//! backstop, not the protocol.

use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use parking_lot::Mutex;
use tracing::warn;

use veld_core::{ListenerId, PlayerId, WiringError};

use crate::participant::Participant;
use crate::zone::Zone;

/// Listener handles for one attached participant, one per change source.
#[derive(Debug)]
struct Wiring {
    position: ListenerId,
    motion: ListenerId,
    equipment: ListenerId,
    party: ListenerId,
    speed: ListenerId,
    skill: ListenerId,
    auto_attack: ListenerId,
    death: ListenerId,
    buff: ListenerId,
    cast: ListenerId,
    item: ListenerId,
    hp: ListenerId,
    mp: ListenerId,
    sp: ListenerId,
    max_hp: ListenerId,
}

/// Wires and unwires a zone's dispatch handlers to participant change
/// sources.
///
/// The table preserves attach order, which keeps diagnostics of a
/// wiring leak deterministic. The mutex guarding it is narrow: event
/// emission never touches the table, only join/leave do.
#[derive(Debug, Default)]
pub struct SubscriptionManager {
    wired: Mutex<IndexMap<PlayerId, Wiring>>,
}

/// Build a listener forwarding `E` into a zone dispatch handler.
///
/// Captures weak references only; if either the zone or the originating
/// participant is gone by delivery time, the event is dropped.
fn forward<E, F>(
    zone: &Arc<Zone>,
    actor: &Arc<Participant>,
    handler: F,
) -> impl Fn(&E) + Send + Sync + 'static
where
    F: Fn(&Zone, &Arc<Participant>, &E) + Send + Sync + 'static,
{
    let zone: Weak<Zone> = Arc::downgrade(zone);
    let actor: Weak<Participant> = Arc::downgrade(actor);
    move |event| {
        if let (Some(zone), Some(actor)) = (zone.upgrade(), actor.upgrade()) {
            handler(&zone, &actor, event);
        }
    }
}

impl SubscriptionManager {
    /// Create an empty wiring table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire all of `participant`'s change sources to `zone`'s dispatch
    /// handlers.
    ///
    /// Must be called exactly once per join, after registry admission.
    /// Fails with [`WiringError::AlreadyAttached`] if wiring for this
    /// participant already exists, leaving the existing wiring intact.
    pub fn attach(
        &self,
        zone: &Arc<Zone>,
        participant: &Arc<Participant>,
    ) -> Result<(), WiringError> {
        let mut wired = self.wired.lock();
        if wired.contains_key(&participant.id()) {
            return Err(WiringError::AlreadyAttached {
                player: participant.id(),
            });
        }

        let sources = participant.events();
        let wiring = Wiring {
            position: sources
                .position
                .subscribe(forward(zone, participant, |z, a, ev| z.dispatch_moved(a, ev))),
            motion: sources
                .motion
                .subscribe(forward(zone, participant, |z, a, ev| z.dispatch_motion(a, ev))),
            equipment: sources.equipment.subscribe(forward(
                zone,
                participant,
                |z, a, ev| z.dispatch_equipment_changed(a, ev),
            )),
            party: sources.party.subscribe(forward(zone, participant, |z, a, ev| {
                z.dispatch_party_role_changed(a, ev)
            })),
            speed: sources.speed.subscribe(forward(zone, participant, |z, a, ev| {
                z.dispatch_speed_changed(a, ev)
            })),
            skill: sources
                .skill
                .subscribe(forward(zone, participant, |z, a, ev| z.dispatch_skill_used(a, ev))),
            auto_attack: sources.auto_attack.subscribe(forward(
                zone,
                participant,
                |z, a, ev| z.dispatch_auto_attack(a, ev),
            )),
            death: sources
                .death
                .subscribe(forward(zone, participant, |z, a, ev| z.dispatch_died(a, ev))),
            buff: sources.buff.subscribe(forward(zone, participant, |z, a, ev| {
                z.dispatch_buff_applied(a, ev)
            })),
            cast: sources.cast.subscribe(forward(zone, participant, |z, a, ev| {
                z.dispatch_cast_started(a, ev)
            })),
            item: sources
                .item
                .subscribe(forward(zone, participant, |z, a, ev| z.dispatch_item_used(a, ev))),
            hp: sources
                .hp
                .subscribe(forward(zone, participant, |z, a, ev| z.dispatch_vital_changed(a, ev))),
            mp: sources
                .mp
                .subscribe(forward(zone, participant, |z, a, ev| z.dispatch_vital_changed(a, ev))),
            sp: sources
                .sp
                .subscribe(forward(zone, participant, |z, a, ev| z.dispatch_vital_changed(a, ev))),
            max_hp: sources.max_hp.subscribe(forward(zone, participant, |z, a, ev| {
                z.dispatch_max_hp_changed(a, ev)
            })),
        };

        wired.insert(participant.id(), wiring);
        Ok(())
    }

    /// Unwire all of `participant`'s change sources.
    ///
    /// Must be called exactly once per leave, after registry removal
    /// and departure notification. Fails with
    /// [`WiringError::NotAttached`] if no wiring is recorded.
    pub fn detach(&self, participant: &Participant) -> Result<(), WiringError> {
        let wiring = self
            .wired
            .lock()
            .shift_remove(&participant.id())
            .ok_or(WiringError::NotAttached {
                player: participant.id(),
            })?;

        let sources = participant.events();
        let removed = [
            sources.position.unsubscribe(wiring.position),
            sources.motion.unsubscribe(wiring.motion),
            sources.equipment.unsubscribe(wiring.equipment),
            sources.party.unsubscribe(wiring.party),
            sources.speed.unsubscribe(wiring.speed),
            sources.skill.unsubscribe(wiring.skill),
            sources.auto_attack.unsubscribe(wiring.auto_attack),
            sources.death.unsubscribe(wiring.death),
            sources.buff.unsubscribe(wiring.buff),
            sources.cast.unsubscribe(wiring.cast),
            sources.item.unsubscribe(wiring.item),
            sources.hp.unsubscribe(wiring.hp),
            sources.mp.unsubscribe(wiring.mp),
            sources.sp.unsubscribe(wiring.sp),
            sources.max_hp.unsubscribe(wiring.max_hp),
        ];
        if removed.iter().any(|ok| !ok) {
            // The table said we were wired but a source disagreed —
            // someone deregistered behind our back.
            warn!(player = %participant.id(), "wiring table out of sync with change sources");
        }
        Ok(())
    }

    /// Whether wiring is currently recorded for `player`.
    pub fn is_attached(&self, player: PlayerId) -> bool {
        self.wired.lock().contains_key(&player)
    }

    /// Number of participants currently wired.
    pub fn attached_count(&self) -> usize {
        self.wired.lock().len()
    }
}

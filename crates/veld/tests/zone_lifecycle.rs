//! End-to-end membership and broadcast behavior through the facade.

use std::sync::Arc;

use veld::prelude::*;
use veld_test_utils::{participant, Recorded, RecordingNotifier};

fn zone_with_recorder(id: u16) -> (Arc<Zone>, Arc<RecordingNotifier>) {
    let recorder = Arc::new(RecordingNotifier::new());
    let zone = Zone::new(ZoneId(id), Arc::clone(&recorder) as Arc<dyn Notifier>);
    (zone, recorder)
}

// ── introduction protocol ──────────────────────────────────────

#[test]
fn mutual_introduction_on_join() {
    let (zone, recorder) = zone_with_recorder(1);
    let (a, b, c, d) = (participant(1), participant(2), participant(3), participant(4));
    zone.join(&a);
    zone.join(&b);
    zone.join(&c);
    recorder.drain();

    assert!(zone.join(&d));

    // D learns of A, B, C — exactly one arrival notice each.
    let to_d = recorder.drain_to(d.session());
    assert_eq!(to_d.len(), 3);
    let mut introduced: Vec<PlayerId> = to_d
        .iter()
        .map(|r| match r {
            Recorded::Arrival { who, .. } => *who,
            other => panic!("expected arrival, got {other:?}"),
        })
        .collect();
    introduced.sort();
    assert_eq!(introduced, vec![a.id(), b.id(), c.id()]);

    // Each of A, B, C learns of D exactly once. (drain_to consumed
    // D's records above, so a fresh drain holds only these.)
    let rest = recorder.drain();
    assert_eq!(rest.len(), 3);
    for member in [&a, &b, &c] {
        let about_d: Vec<_> = rest
            .iter()
            .filter(|r| {
                matches!(r, Recorded::Arrival { dst, who }
                    if *dst == member.session() && *who == d.id())
            })
            .collect();
        assert_eq!(about_d.len(), 1);
    }
}

#[test]
fn first_join_sends_nothing() {
    let (zone, recorder) = zone_with_recorder(1);
    assert!(zone.join(&participant(1)));
    assert!(recorder.drain().is_empty());
}

#[test]
fn rejected_join_has_no_side_effects() {
    let (zone, recorder) = zone_with_recorder(1);
    let p1 = participant(1);
    let p2 = participant(2);
    zone.join(&p1);
    zone.join(&p2);
    recorder.drain();

    assert!(!zone.join(&p1));
    assert!(recorder.drain().is_empty());
    assert_eq!(zone.player_count(), 2);
}

// ── broadcast completeness ─────────────────────────────────────

#[test]
fn move_reaches_everyone_but_the_mover() {
    let (zone, recorder) = zone_with_recorder(1);
    let (a, b, c) = (participant(1), participant(2), participant(3));
    zone.join(&a);
    zone.join(&b);
    zone.join(&c);
    recorder.drain();

    let dest = Position::new(42, 17);
    a.events().position.emit(&Moved { to: dest });

    let sent = recorder.drain();
    assert_eq!(sent.len(), 2);
    for member in [&b, &c] {
        assert!(sent.contains(&Recorded::Moved {
            dst: member.session(),
            who: a.id(),
            to: dest,
        }));
    }
    assert!(sent.iter().all(|r| r.dst() != a.session()));
}

#[test]
fn payloads_pass_through_unmodified() {
    let (zone, recorder) = zone_with_recorder(1);
    let (a, b) = (participant(1), participant(2));
    zone.join(&a);
    zone.join(&b);
    recorder.drain();

    let target = ActorRef::Mob(MobId(9));
    a.events().skill.emit(&SkillUsed {
        skill: SkillId(28),
        target,
        result: -1,
    });
    a.events().equipment.emit(&EquipmentChanged {
        slot: EquipSlot(16),
        item: ItemId(1108),
    });
    a.events().death.emit(&Died { killer: target });
    a.events().max_hp.emit(&MaxHpChanged { value: 4242 });

    let sent = recorder.drain_to(b.session());
    assert_eq!(
        sent,
        vec![
            Recorded::SkillUsed {
                dst: b.session(),
                caster: a.id(),
                target,
                skill: SkillId(28),
                result: -1,
            },
            Recorded::EquipmentChanged {
                dst: b.session(),
                who: a.id(),
                item: ItemId(1108),
                slot: EquipSlot(16),
            },
            Recorded::Killed {
                dst: b.session(),
                victim: a.id(),
                killer: target,
            },
            Recorded::MaxHpChanged {
                dst: b.session(),
                who: a.id(),
                new_max_hp: 4242,
            },
        ]
    );
    // Max-HP notices include the sender as well.
    assert_eq!(
        recorder.drain_to(a.session()),
        vec![Recorded::MaxHpChanged {
            dst: a.session(),
            who: a.id(),
            new_max_hp: 4242,
        }]
    );
}

// ── departure ──────────────────────────────────────────────────

#[test]
fn departure_notice_to_each_remaining_member() {
    let (zone, recorder) = zone_with_recorder(1);
    let (a, b, c) = (participant(1), participant(2), participant(3));
    zone.join(&a);
    zone.join(&b);
    zone.join(&c);
    recorder.drain();

    assert!(zone.leave(&b));

    let sent = recorder.drain();
    assert_eq!(sent.len(), 2);
    for member in [&a, &c] {
        assert!(sent.contains(&Recorded::Departure {
            dst: member.session(),
            who: b.id(),
        }));
    }
    assert!(zone.player(b.id()).is_none());
    assert!(b.current_zone().is_none());
}

#[test]
fn join_leave_symmetry() {
    let (zone, _recorder) = zone_with_recorder(1);
    let p = participant(7);
    assert_eq!(zone.player_count(), 0);
    assert!(zone.join(&p));
    assert!(zone.leave(&p));
    assert_eq!(zone.player_count(), 0);
    assert!(!zone.leave(&p));
}

// ── the full admission scenario ────────────────────────────────

#[test]
fn empty_zone_lifecycle_scenario() {
    let (zone, recorder) = zone_with_recorder(5);
    let p1 = participant(1);
    let p2 = participant(2);

    // join(P1): true, zero notifications (no other members).
    assert!(zone.join(&p1));
    assert!(recorder.drain().is_empty());

    // join(P2): true, one arrival notice each way.
    assert!(zone.join(&p2));
    let sent = recorder.drain();
    assert_eq!(sent.len(), 2);
    assert!(sent.contains(&Recorded::Arrival {
        dst: p1.session(),
        who: p2.id(),
    }));
    assert!(sent.contains(&Recorded::Arrival {
        dst: p2.session(),
        who: p1.id(),
    }));

    // spawn(goblin): id 1, both members notified once.
    let goblin = Mob::new(MobKindId(1002), Position::new(3, 3));
    assert!(zone.spawn_mob(&goblin));
    assert_eq!(goblin.id(), Some(MobId(1)));
    let sent = recorder.drain();
    assert_eq!(sent.len(), 2);
    for p in [&p1, &p2] {
        assert!(sent.contains(&Recorded::MobSpawned {
            dst: p.session(),
            mob: Some(MobId(1)),
            kind: MobKindId(1002),
        }));
    }

    // spawn(orc): id 2.
    let orc = Mob::new(MobKindId(1023), Position::new(9, 9));
    assert!(zone.spawn_mob(&orc));
    assert_eq!(orc.id(), Some(MobId(2)));
    recorder.drain();

    // leave(P1): true, P2 notified once, lookup now absent.
    assert!(zone.leave(&p1));
    assert_eq!(
        recorder.drain(),
        vec![Recorded::Departure {
            dst: p2.session(),
            who: p1.id(),
        }]
    );
    assert!(zone.player(p1.id()).is_none());
    assert!(zone.player(p2.id()).is_some());
    assert!(zone.mob(MobId(1)).is_some());
}

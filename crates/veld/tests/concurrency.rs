//! Multi-threaded admission, spawning, and broadcast behavior.
//!
//! These tests drive a shared zone from many threads at once and assert
//! the invariants that survive any interleaving: single admission per
//! id, unique mob ids, and well-formed notifier records throughout
//! churn.

use std::sync::Arc;
use std::thread;

use veld::prelude::*;
use veld_test_utils::{mob, participant, Recorded, RecordingNotifier};

fn zone_with_recorder(id: u16) -> (Arc<Zone>, Arc<RecordingNotifier>) {
    let recorder = Arc::new(RecordingNotifier::new());
    let zone = Zone::new(ZoneId(id), Arc::clone(&recorder) as Arc<dyn Notifier>);
    (zone, recorder)
}

#[test]
fn racing_joins_of_the_same_id_admit_exactly_one() {
    const RACERS: usize = 8;
    let (zone, recorder) = zone_with_recorder(1);

    let admitted: Vec<bool> = thread::scope(|scope| {
        let handles: Vec<_> = (0..RACERS)
            .map(|_| {
                let zone = Arc::clone(&zone);
                // Distinct Participant objects sharing one player id.
                scope.spawn(move || zone.join(&participant(1)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(admitted.iter().filter(|ok| **ok).count(), 1);
    assert_eq!(zone.player_count(), 1);
    // Sole member of an otherwise empty zone: no introductions.
    assert!(recorder.drain().is_empty());
}

#[test]
fn concurrent_joins_of_distinct_ids_all_admit() {
    const PLAYERS: u32 = 16;
    let (zone, recorder) = zone_with_recorder(1);

    thread::scope(|scope| {
        for n in 1..=PLAYERS {
            let zone = Arc::clone(&zone);
            scope.spawn(move || assert!(zone.join(&participant(n))));
        }
    });

    assert_eq!(zone.player_count(), PLAYERS as usize);
    for n in 1..=PLAYERS {
        assert!(zone.player(PlayerId(n)).is_some());
    }
    // Introduction completeness: every member was told of every other
    // member at least once (overlapping join passes may duplicate a
    // notice, never drop one), and nobody was introduced to themselves.
    let arrivals: Vec<(SessionHandle, PlayerId)> = recorder
        .drain()
        .into_iter()
        .filter_map(|r| match r {
            Recorded::Arrival { dst, who } => Some((dst, who)),
            _ => None,
        })
        .collect();
    for n in 1..=PLAYERS {
        let dst = SessionHandle(u64::from(n) * 100);
        for m in 1..=PLAYERS {
            if n == m {
                assert!(!arrivals.contains(&(dst, PlayerId(m))));
            } else {
                assert!(arrivals.contains(&(dst, PlayerId(m))));
            }
        }
    }
}

#[test]
fn concurrent_spawns_get_unique_sequential_block_of_ids() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;
    let (zone, _recorder) = zone_with_recorder(1);

    let mut ids: Vec<MobId> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let zone = Arc::clone(&zone);
                scope.spawn(move || {
                    let mut got = Vec::with_capacity(PER_THREAD);
                    for _ in 0..PER_THREAD {
                        let m = mob(1002);
                        assert!(zone.spawn_mob(&m));
                        got.push(m.id().unwrap());
                    }
                    got
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    ids.sort();
    let expected: Vec<MobId> = (1..=(THREADS * PER_THREAD) as u32).map(MobId).collect();
    assert_eq!(ids, expected);
    assert_eq!(zone.mob_count(), THREADS * PER_THREAD);
}

#[test]
fn broadcast_during_membership_churn_stays_well_formed() {
    const MOVES: usize = 200;
    const CHURNERS: u32 = 4;
    let (zone, recorder) = zone_with_recorder(1);

    // One stable member emits moves throughout.
    let mover = participant(100);
    assert!(zone.join(&mover));

    thread::scope(|scope| {
        {
            let mover = Arc::clone(&mover);
            scope.spawn(move || {
                for step in 0..MOVES {
                    mover.events().position.emit(&Moved {
                        to: Position::new(step as u16, 0),
                    });
                }
            });
        }
        for n in 1..=CHURNERS {
            let zone = Arc::clone(&zone);
            scope.spawn(move || {
                let p = participant(n);
                for _ in 0..20 {
                    assert!(zone.join(&p));
                    assert!(zone.leave(&p));
                }
            });
        }
    });

    // Churners are all gone; only the mover remains.
    assert_eq!(zone.player_count(), 1);
    assert!(zone.player(mover.id()).is_some());

    // Every move record names the mover and was addressed to a churner
    // session; none was addressed to the mover itself.
    for rec in recorder.drain() {
        if let Recorded::Moved { dst, who, .. } = rec {
            assert_eq!(who, mover.id());
            assert_ne!(dst, mover.session());
        }
    }

    // A quiet zone still delivers: the audience view is consistent
    // once churn has settled.
    let late = participant(99);
    assert!(zone.join(&late));
    recorder.drain();
    mover.events().position.emit(&Moved {
        to: Position::new(7, 7),
    });
    assert_eq!(
        recorder.drain(),
        vec![Recorded::Moved {
            dst: late.session(),
            who: mover.id(),
            to: Position::new(7, 7),
        }]
    );
}

#[test]
fn participant_hops_between_zones_cleanly() {
    const ROUNDS: usize = 30;
    let (zone_a, rec_a) = zone_with_recorder(1);
    let (zone_b, rec_b) = zone_with_recorder(2);
    let p = participant(1);

    // Bounce one participant between two zones; membership and wiring
    // must stay consistent after every hop.
    for _ in 0..ROUNDS {
        assert!(zone_a.join(&p));
        p.events().motion.emit(&Motion { code: MotionCode(2) });
        assert!(zone_a.leave(&p));

        assert!(zone_b.join(&p));
        p.events().motion.emit(&Motion { code: MotionCode(3) });
        assert!(zone_b.leave(&p));
    }

    assert_eq!(zone_a.player_count(), 0);
    assert_eq!(zone_b.player_count(), 0);
    assert!(p.current_zone().is_none());

    // Sole member each time: motion includes the sender, so each hop
    // produced exactly one record in the zone it was emitted in.
    let motions = |records: Vec<Recorded>, code: MotionCode| {
        records
            .into_iter()
            .filter(|r| matches!(r, Recorded::Motion { code: c, .. } if *c == code))
            .count()
    };
    assert_eq!(motions(rec_a.drain(), MotionCode(2)), ROUNDS);
    assert_eq!(motions(rec_b.drain(), MotionCode(3)), ROUNDS);
}

//! Fixture constructors for test scenarios.

use std::sync::Arc;

use veld_core::{MobKindId, PlayerId, Position, SessionHandle};
use veld_zone::{Mob, Participant};

/// A participant with id `n` and a session handle derived from it
/// (`n * 100`), so assertions can tell destinations apart at a glance.
pub fn participant(n: u32) -> Arc<Participant> {
    Participant::new(PlayerId(n), SessionHandle(u64::from(n) * 100))
}

/// An unspawned mob of `kind` at the origin tile.
pub fn mob(kind: u16) -> Arc<Mob> {
    Mob::new(MobKindId(kind), Position::new(0, 0))
}

/// Install a test tracing subscriber honoring `RUST_LOG`.
///
/// Call at the top of a test to see zone transition logs while
/// debugging. Safe to call from multiple tests; only the first
/// installation wins.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

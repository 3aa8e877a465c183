//! Veld: per-region membership and broadcast core for real-time
//! multiplayer simulations.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Veld sub-crates. For most users, adding `veld` as a single
//! dependency is sufficient.
//!
//! A [`zone::Zone`] is the authoritative state container for one world
//! region: it tracks which participants and mobs are present and turns
//! every subscribed state change into a multicast to the current
//! membership, delivered through a caller-supplied
//! [`zone::Notifier`].
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use veld::prelude::*;
//!
//! // A zone with no transport behind it.
//! let zone = Zone::new(ZoneId(5), Arc::new(NullNotifier));
//!
//! let p1 = Participant::new(PlayerId(1), SessionHandle(100));
//! let p2 = Participant::new(PlayerId(2), SessionHandle(200));
//! assert!(zone.join(&p1));
//! assert!(zone.join(&p2));
//! assert!(!zone.join(&p2)); // duplicate id: rejected, no side effects
//!
//! let goblin = Mob::new(MobKindId(1002), Position::new(5, 5));
//! assert!(zone.spawn_mob(&goblin));
//! assert_eq!(goblin.id(), Some(MobId(1)));
//!
//! // Game logic emits into the participant's change sources; the zone
//! // fans each event out to the current membership.
//! p1.events().position.emit(&Moved { to: Position::new(6, 5) });
//!
//! assert!(zone.leave(&p1));
//! assert!(zone.player(PlayerId(1)).is_none());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `veld-core` | IDs, value types, event payloads, `EventSource` |
//! | [`registry`] | `veld-registry` | Concurrent entity registry, mob id allocator |
//! | [`zone`] | `veld-zone` | `Zone`, `Participant`, `Mob`, `Notifier`, wiring |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, change-event payloads, and the event-source primitive
/// (`veld-core`).
pub use veld_core as types;

/// Concurrent entity registry and mob id allocation (`veld-registry`).
pub use veld_registry as registry;

/// Zone orchestration, membership, and broadcast dispatch
/// (`veld-zone`).
pub use veld_zone as zone;

/// Common imports for typical Veld usage.
///
/// ```rust
/// use veld::prelude::*;
/// ```
pub mod prelude {
    // IDs and value types
    pub use veld_core::{
        ActorRef, BuffId, EquipSlot, ItemId, MobId, MobKindId, MotionCode, PartyRole, PlayerId,
        Position, SessionHandle, SkillId, Vital, ZoneId,
    };

    // Event payloads and sources
    pub use veld_core::{
        AutoAttacked, BuffApplied, CastStarted, Died, EquipmentChanged, EventSource, ItemUsed,
        ListenerId, MaxHpChanged, Motion, Moved, PartyRoleChanged, SkillUsed, SpeedChanged,
        VitalChanged,
    };

    // Errors
    pub use veld_core::WiringError;

    // Storage leaves
    pub use veld_registry::{EntityRegistry, MobIdAllocator};

    // Zone layer
    pub use veld_zone::{Mob, Notifier, NullNotifier, Participant, Zone};
}

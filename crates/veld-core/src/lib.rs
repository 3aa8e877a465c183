//! Core types for the Veld zone server.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Veld workspace:
//! typed IDs, domain value types, change-event payloads, the
//! [`EventSource`] publish/subscribe primitive, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod id;
pub mod source;
pub mod types;

pub use error::WiringError;
pub use event::{
    AutoAttacked, BuffApplied, CastStarted, Died, EquipmentChanged, ItemUsed, MaxHpChanged, Motion,
    Moved, PartyRoleChanged, SkillUsed, SpeedChanged, VitalChanged,
};
pub use id::{MobId, MobKindId, PlayerId, SessionHandle, ZoneId};
pub use source::{EventSource, ListenerId};
pub use types::{
    ActorRef, BuffId, EquipSlot, ItemId, MotionCode, PartyRole, Position, SkillId, Vital,
};

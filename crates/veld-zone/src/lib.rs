//! Zone orchestration for the Veld zone server.
//!
//! A [`Zone`] is the authoritative per-region state container: it owns
//! the player and mob registries, the mob id allocator, and the
//! subscription wiring that turns one participant's state change into
//! a multicast to every current zone occupant. The only outward
//! boundary is the [`Notifier`] trait — wire encoding and transport
//! live behind it, never here.
//!
//! # Membership protocol
//!
//! `join` admits a participant (registry add is the authority), wires
//! its change sources to the zone's dispatch handlers, and performs the
//! bidirectional introduction before returning. `leave` reverses it:
//! remove, announce departure, unwire. Attach and detach happen
//! synchronously inside those transitions — there is no intermediate
//! membership state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod mob;
pub mod notifier;
pub mod participant;
pub mod subscription;
pub mod zone;

pub use mob::Mob;
pub use notifier::{Notifier, NullNotifier};
pub use participant::{ChangeSources, Participant};
pub use subscription::SubscriptionManager;
pub use zone::Zone;

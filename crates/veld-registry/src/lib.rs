//! Concurrent entity storage for the Veld zone server.
//!
//! Provides the two shared-state leaves a zone owns: the
//! [`EntityRegistry`] id→entity map (one instance for players, one for
//! mobs) and the [`MobIdAllocator`] monotonic id counter. Both are safe
//! under arbitrary concurrent use with narrow, internal synchronization
//! only — no caller-visible locks, and nothing here ever blocks on
//! network-facing code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod registry;

pub use allocator::MobIdAllocator;
pub use registry::EntityRegistry;

//! Test utilities and mock types for Veld development.
//!
//! Provides [`RecordingNotifier`], a [`Notifier`] implementation that
//! records every send for assertion, plus participant/mob fixtures and
//! an opt-in tracing setup for debugging tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;
mod recording;

pub use fixtures::{init_test_logging, mob, participant};
pub use recording::{Recorded, RecordingNotifier};

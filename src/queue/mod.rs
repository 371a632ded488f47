//! The mutable triage queue.
//!
//! [`TriageQueue`] is the single entry point the presentation shell talks
//! to: `register`, `snapshot_ordered`, `remove`. The internal store is
//! deliberately unordered — only a snapshot defines the externally visible
//! order, so a newly registered patient simply joins the store and appears
//! at its correct rank on the next snapshot.

mod engine;

pub use engine::{SequenceGenerator, TriageQueue};

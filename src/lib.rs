//! Hospital triage queue core.
//!
//! Orders a dynamically-changing patient population by a composite,
//! multi-key, stable priority:
//!
//! - **Clinical severity**: the risk color (RED most severe) always
//!   dominates every other criterion.
//! - **Legal priority**: statutory precedence groups (elderly, pregnant,
//!   nursing, disability, infant-in-arms, obesity) break ties within a
//!   severity level, as a strictly boolean secondary criterion.
//! - **Arrival order**: assigned once at registration, never recomputed,
//!   and the sole tie-breaker after severity and legal rank.
//!
//! # Architecture
//!
//! - [`patient`]: domain value types — risk colors, legal flags, drafts.
//! - [`policy`]: derives the comparable [`PriorityKey`] from a patient;
//!   pure, total, side-effect free.
//! - [`sort`]: stable merge sort generic over the key, plus the
//!   patient-specific entry point and [`SortMetrics`].
//! - [`queue`]: the mutable [`TriageQueue`] exposed to the presentation
//!   shell.
//!
//! The crate performs no I/O and defines no wire protocol or UI. Rendering
//! and user interaction belong to an external presentation layer that calls
//! [`TriageQueue::register`], [`TriageQueue::snapshot_ordered`] and
//! [`TriageQueue::remove`] and displays the returned ordered list.

pub mod error;
pub mod patient;
pub mod policy;
pub mod queue;
pub mod sort;

pub use error::TriageError;
pub use patient::{
    ArrivalSequence, LegalFlag, LegalFlagSet, Patient, PatientDraft, PatientId, RiskColor,
};
pub use policy::PriorityKey;
pub use queue::TriageQueue;
pub use sort::{merge_sort_by_key, sort_patients, SortMetrics};

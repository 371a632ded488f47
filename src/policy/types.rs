//! The derived priority key.

use crate::patient::ArrivalSequence;

/// Composite sort key: `(severity, legal, arrival)`.
///
/// The derived `Ord` compares fields lexicographically in declaration
/// order, which is exactly the queue invariant: patient A precedes B iff
/// A's tuple is lexicographically less than B's. Because every patient
/// carries a unique arrival sequence, keys of distinct patients never
/// compare equal.
///
/// Keys are recomputed from scratch on every queue snapshot; they are
/// cheap, `Copy`, and never stored across mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityKey {
    /// Clinical severity rank, 0 (RED) through 4 (WHITE).
    pub severity: u8,

    /// 0 when the patient holds any legal-priority flag, else 1.
    pub legal: u8,

    /// Registration order; the sole tie-breaker.
    pub arrival: ArrivalSequence,
}

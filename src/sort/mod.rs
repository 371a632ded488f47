//! Stable queue sorting.
//!
//! The engine is a classic top-down merge sort: O(n log n) time, O(n)
//! auxiliary space, and stable by construction — the merge step takes from
//! the left run when keys compare less *or equal*. Stability is a
//! first-class correctness requirement here (arrival-order fairness), not
//! an implementation nicety, which is why a genuinely stable algorithm is
//! used even though the arrival sequence embedded in the key already
//! disambiguates true ties.
//!
//! Any stable O(n log n) sort would satisfy the ordering contract
//! bit-for-bit; merge sort is what ships because it provides stability
//! natively, with no extra tie-break bookkeeping.
//!
//! [`merge_sort_by_key`] is domain-agnostic; [`sort_patients`] binds it to
//! the triage [`PriorityKey`](crate::policy::PriorityKey) and enforces the
//! arrival-uniqueness invariant.

mod engine;

pub use engine::{merge_sort_by_key, sort_patients, SortMetrics};

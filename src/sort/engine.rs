//! Merge sort engine and instrumentation.

use crate::error::TriageError;
use crate::patient::Patient;
use crate::policy;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Instrumentation from a single sort pass.
///
/// Surfaced so a presentation layer can show what the sort did (algorithm,
/// comparison count, wall time) next to the ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortMetrics {
    /// Name of the algorithm that produced the ordering.
    pub algorithm: &'static str,

    /// Number of key comparisons performed by the merge steps.
    pub comparisons: u64,

    /// Wall time of the sort pass, key derivation included.
    pub elapsed: Duration,

    /// Whether the algorithm guarantees stability. Always `true` here.
    pub stable: bool,
}

const ALGORITHM_NAME: &str = "merge sort (stable)";

/// Stable merge sort over arbitrary items, keyed once per item.
///
/// Keys are computed exactly once per item before sorting
/// (decorate-sort-undecorate), never per comparison. Items whose keys
/// compare equal retain their relative input order.
///
/// # Examples
///
/// ```
/// use ordena_triage::merge_sort_by_key;
///
/// let (sorted, metrics) = merge_sort_by_key(vec![3, 1, 2], |n| *n);
/// assert_eq!(sorted, vec![1, 2, 3]);
/// assert!(metrics.stable);
/// ```
pub fn merge_sort_by_key<T, K, F>(items: Vec<T>, key: F) -> (Vec<T>, SortMetrics)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let start = Instant::now();
    let mut comparisons = 0u64;

    let keyed: Vec<(K, T)> = items.into_iter().map(|item| (key(&item), item)).collect();
    let sorted = sort_run(keyed, &mut comparisons);

    let metrics = SortMetrics {
        algorithm: ALGORITHM_NAME,
        comparisons,
        elapsed: start.elapsed(),
        stable: true,
    };
    (sorted.into_iter().map(|(_, item)| item).collect(), metrics)
}

fn sort_run<K: Ord, T>(mut run: Vec<(K, T)>, comparisons: &mut u64) -> Vec<(K, T)> {
    if run.len() <= 1 {
        return run;
    }
    let right = run.split_off(run.len() / 2);
    let left = sort_run(run, comparisons);
    let right = sort_run(right, comparisons);
    merge(left, right, comparisons)
}

fn merge<K: Ord, T>(
    left: Vec<(K, T)>,
    right: Vec<(K, T)>,
    comparisons: &mut u64,
) -> Vec<(K, T)> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left_iter = left.into_iter();
    let mut right_iter = right.into_iter();
    let mut left_head = left_iter.next();
    let mut right_head = right_iter.next();

    loop {
        match (left_head, right_head) {
            (Some(l), Some(r)) => {
                *comparisons += 1;
                // `<=` takes the left run first on equal keys; this is
                // what makes the merge stable.
                if l.0 <= r.0 {
                    out.push(l);
                    left_head = left_iter.next();
                    right_head = Some(r);
                } else {
                    out.push(r);
                    right_head = right_iter.next();
                    left_head = Some(l);
                }
            }
            (Some(l), None) => {
                out.push(l);
                out.extend(left_iter);
                break;
            }
            (None, Some(r)) => {
                out.push(r);
                out.extend(right_iter);
                break;
            }
            (None, None) => break,
        }
    }
    out
}

/// Orders a patient population by the triage priority key.
///
/// Derives each patient's [`PriorityKey`](crate::policy::PriorityKey) once,
/// rejects duplicate arrival sequences with [`TriageError::InvalidState`]
/// before any reordering happens (a duplicate would make the order
/// nondeterministic), then runs the stable merge sort.
///
/// Empty input yields empty output; a single patient is returned unchanged.
pub fn sort_patients(
    patients: Vec<Patient>,
) -> Result<(Vec<Patient>, SortMetrics), TriageError> {
    let mut seen = BTreeSet::new();
    for patient in &patients {
        if !seen.insert(patient.arrival()) {
            return Err(TriageError::invalid_state(format!(
                "duplicate arrival sequence {}",
                patient.arrival()
            )));
        }
    }
    Ok(merge_sort_by_key(patients, policy::priority_key))
}

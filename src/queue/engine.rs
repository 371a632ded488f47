//! Queue state, registration, and snapshots.

use crate::error::TriageError;
use crate::patient::{ArrivalSequence, Patient, PatientDraft, PatientId};
use crate::sort::{sort_patients, SortMetrics};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Mints strictly increasing arrival sequences.
///
/// Owned by the queue rather than living as process-wide state; the
/// "read, increment" pair is only ever executed inside the queue's
/// critical section, so no value is skipped, reused, or handed out twice.
#[derive(Debug)]
pub struct SequenceGenerator {
    next: u64,
}

impl SequenceGenerator {
    /// Starts at sequence 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next sequence and advances the counter.
    pub fn next(&mut self) -> ArrivalSequence {
        let value = ArrivalSequence(self.next);
        self.next += 1;
        value
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct QueueState {
    patients: Vec<Patient>,
    sequence: SequenceGenerator,
}

/// The triage queue: an unordered patient store plus the sequence
/// generator, behind one mutex.
///
/// Thread-safe: `register` runs "mint sequence, build patient, insert" as
/// one atomic unit under the lock, and `snapshot_ordered` sorts a
/// point-in-time copy taken under the lock, never the live store. The
/// queue itself does no I/O and never blocks beyond the mutex.
///
/// # Examples
///
/// ```
/// use ordena_triage::{PatientDraft, RiskColor, TriageQueue};
///
/// let queue = TriageQueue::new();
/// queue.register(PatientDraft::new("Ana", RiskColor::Yellow))?;
/// queue.register(PatientDraft::new("Caio", RiskColor::Red))?;
///
/// let ordered = queue.snapshot_ordered()?;
/// assert_eq!(ordered[0].name(), "Caio"); // RED outranks YELLOW
/// # Ok::<(), ordena_triage::TriageError>(())
/// ```
#[derive(Debug)]
pub struct TriageQueue {
    state: Mutex<QueueState>,
}

impl TriageQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                patients: Vec::new(),
                sequence: SequenceGenerator::new(),
            }),
        }
    }

    // A poisoned lock only means another thread panicked while holding
    // it; state mutations are single-assignment inside the critical
    // section, so the inner state is still consistent.
    fn lock(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a new patient from a draft.
    ///
    /// Validates the draft first: a missing risk color is rejected with
    /// [`TriageError::InvalidPatientData`] and no state is touched. On
    /// success the patient receives the next arrival sequence (and an id
    /// minted from the same counter) and joins the unordered store.
    pub fn register(&self, draft: PatientDraft) -> Result<Patient, TriageError> {
        let risk_color = draft
            .risk_color
            .ok_or_else(|| TriageError::invalid_data("missing risk color"))?;

        let mut state = self.lock();
        let arrival = state.sequence.next();
        let patient = Patient::new(
            PatientId(arrival.0),
            draft.name,
            arrival,
            risk_color,
            draft.legal_flags,
        );
        state.patients.push(patient.clone());
        Ok(patient)
    }

    /// Returns the current population in triage order.
    ///
    /// Recomputes every priority key and re-sorts on each call; the
    /// internal store order is never mutated and never observable.
    /// Idempotent between `register`/`remove` calls.
    pub fn snapshot_ordered(&self) -> Result<Vec<Patient>, TriageError> {
        self.snapshot_ordered_with_metrics()
            .map(|(patients, _)| patients)
    }

    /// Like [`snapshot_ordered`](TriageQueue::snapshot_ordered), also
    /// returning the sort instrumentation for display.
    pub fn snapshot_ordered_with_metrics(
        &self,
    ) -> Result<(Vec<Patient>, SortMetrics), TriageError> {
        let snapshot = self.lock().patients.clone();
        // Lock released; the sort runs on the copy.
        sort_patients(snapshot)
    }

    /// Removes a patient (attended, discharged) and returns the record.
    ///
    /// An unknown id is an error, not a no-op: the call returns
    /// [`TriageError::NotFound`] and the store is unchanged.
    pub fn remove(&self, id: PatientId) -> Result<Patient, TriageError> {
        let mut state = self.lock();
        match state.patients.iter().position(|p| p.id() == id) {
            Some(index) => Ok(state.patients.remove(index)),
            None => Err(TriageError::NotFound { id }),
        }
    }

    /// Empties the store. The sequence counter keeps advancing — arrival
    /// sequences are never reused, even across a clear.
    pub fn clear(&self) {
        self.lock().patients.clear();
    }

    /// Number of patients currently held.
    pub fn len(&self) -> usize {
        self.lock().patients.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().patients.is_empty()
    }
}

impl Default for TriageQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::{LegalFlag, RiskColor};
    use std::sync::Arc;

    #[test]
    fn test_register_assigns_increasing_sequences() {
        let queue = TriageQueue::new();
        let a = queue
            .register(PatientDraft::new("a", RiskColor::Green))
            .unwrap();
        let b = queue
            .register(PatientDraft::new("b", RiskColor::Green))
            .unwrap();
        let c = queue
            .register(PatientDraft::new("c", RiskColor::Green))
            .unwrap();
        assert_eq!(a.arrival(), ArrivalSequence(1));
        assert_eq!(b.arrival(), ArrivalSequence(2));
        assert_eq!(c.arrival(), ArrivalSequence(3));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_register_rejects_missing_color() {
        let queue = TriageQueue::new();
        let draft = PatientDraft {
            name: "nameless".into(),
            risk_color: None,
            legal_flags: Default::default(),
        };
        let err = queue.register(draft).unwrap_err();
        assert!(matches!(err, TriageError::InvalidPatientData { .. }));
        // No partial state, and the next registration still gets sequence 1.
        assert!(queue.is_empty());
        let p = queue
            .register(PatientDraft::new("first", RiskColor::Blue))
            .unwrap();
        assert_eq!(p.arrival(), ArrivalSequence(1));
    }

    #[test]
    fn test_invalid_color_string_rejected_before_registration() {
        let queue = TriageQueue::new();
        let err = PatientDraft::parse("Eva", "PURPLE", &[]).unwrap_err();
        assert!(matches!(err, TriageError::InvalidPatientData { .. }));
        // Store untouched; snapshots unaffected.
        assert!(queue.snapshot_ordered().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_orders_severity_legal_arrival() {
        let queue = TriageQueue::new();
        queue
            .register(PatientDraft::new("plain yellow", RiskColor::Yellow))
            .unwrap();
        queue
            .register(PatientDraft::new("red", RiskColor::Red))
            .unwrap();
        queue
            .register(
                PatientDraft::new("elderly yellow", RiskColor::Yellow)
                    .with_flag(LegalFlag::Elderly60Plus),
            )
            .unwrap();

        let ordered = queue.snapshot_ordered().unwrap();
        let names: Vec<&str> = ordered.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["red", "elderly yellow", "plain yellow"]);
    }

    #[test]
    fn test_equal_priority_preserves_arrival() {
        let queue = TriageQueue::new();
        let first = queue
            .register(PatientDraft::new("first red", RiskColor::Red))
            .unwrap();
        let second = queue
            .register(PatientDraft::new("second red", RiskColor::Red))
            .unwrap();

        let ordered = queue.snapshot_ordered().unwrap();
        assert_eq!(ordered[0].id(), first.id());
        assert_eq!(ordered[1].id(), second.id());
    }

    #[test]
    fn test_snapshot_empty_queue() {
        let queue = TriageQueue::new();
        assert!(queue.snapshot_ordered().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_is_idempotent_and_nonmutating() {
        let queue = TriageQueue::new();
        for (name, color) in [
            ("w", RiskColor::White),
            ("r", RiskColor::Red),
            ("g", RiskColor::Green),
        ] {
            queue.register(PatientDraft::new(name, color)).unwrap();
        }
        let once = queue.snapshot_ordered().unwrap();
        let twice = queue.snapshot_ordered().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_snapshot_metrics() {
        let queue = TriageQueue::new();
        queue
            .register(PatientDraft::new("a", RiskColor::Blue))
            .unwrap();
        queue
            .register(PatientDraft::new("b", RiskColor::Red))
            .unwrap();
        let (_, metrics) = queue.snapshot_ordered_with_metrics().unwrap();
        assert!(metrics.stable);
        assert_eq!(metrics.comparisons, 1);
    }

    #[test]
    fn test_remove_attended_patient() {
        let queue = TriageQueue::new();
        let ana = queue
            .register(PatientDraft::new("Ana", RiskColor::Red))
            .unwrap();
        queue
            .register(PatientDraft::new("Beto", RiskColor::Green))
            .unwrap();

        let removed = queue.remove(ana.id()).unwrap();
        assert_eq!(removed.name(), "Ana");
        assert_eq!(queue.len(), 1);

        let ordered = queue.snapshot_ordered().unwrap();
        assert_eq!(ordered[0].name(), "Beto");
    }

    #[test]
    fn test_remove_unknown_id() {
        let queue = TriageQueue::new();
        let err = queue.remove(PatientId(99)).unwrap_err();
        assert_eq!(err, TriageError::NotFound { id: PatientId(99) });
    }

    #[test]
    fn test_clear_keeps_sequence_monotonic() {
        let queue = TriageQueue::new();
        queue
            .register(PatientDraft::new("a", RiskColor::Green))
            .unwrap();
        queue
            .register(PatientDraft::new("b", RiskColor::Green))
            .unwrap();
        queue.clear();
        assert!(queue.is_empty());

        let c = queue
            .register(PatientDraft::new("c", RiskColor::Green))
            .unwrap();
        assert_eq!(c.arrival(), ArrivalSequence(3));
    }

    #[test]
    fn test_new_registration_joins_rank_on_next_snapshot() {
        let queue = TriageQueue::new();
        queue
            .register(PatientDraft::new("green", RiskColor::Green))
            .unwrap();
        let before = queue.snapshot_ordered().unwrap();
        assert_eq!(before[0].name(), "green");

        queue
            .register(PatientDraft::new("red", RiskColor::Red))
            .unwrap();
        let after = queue.snapshot_ordered().unwrap();
        assert_eq!(after[0].name(), "red");
        assert_eq!(after[1].name(), "green");
    }

    #[test]
    fn test_concurrent_registration_yields_unique_sequences() {
        let queue = Arc::new(TriageQueue::new());
        let mut handles = Vec::new();
        for t in 0..8 {
            let queue = Arc::clone(&queue);
            handles.push(std::thread::spawn(move || {
                for i in 0..50 {
                    queue
                        .register(PatientDraft::new(
                            format!("t{t}-{i}"),
                            RiskColor::Green,
                        ))
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let ordered = queue.snapshot_ordered().unwrap();
        assert_eq!(ordered.len(), 400);
        let mut sequences: Vec<u64> = ordered.iter().map(|p| p.arrival().0).collect();
        sequences.sort_unstable();
        sequences.dedup();
        assert_eq!(sequences.len(), 400);
        // No value skipped either: 1..=400 exactly.
        assert_eq!(sequences.first(), Some(&1));
        assert_eq!(sequences.last(), Some(&400));
    }
}

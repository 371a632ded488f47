//! Error taxonomy for the triage core.

use crate::patient::PatientId;
use thiserror::Error;

/// Errors returned by the triage core.
///
/// The core never retries or silently corrects invalid input; every failure
/// is reported synchronously to the caller of the offending operation. The
/// presentation shell is responsible for translating these into user-facing
/// messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    /// Registration input was missing or unrecognized (no risk color, or a
    /// malformed legal-flag value). The registration is rejected and no
    /// partial state is created.
    #[error("invalid patient data: {reason}")]
    InvalidPatientData {
        /// What made the input unacceptable.
        reason: String,
    },

    /// An internal invariant was violated, such as two patients carrying
    /// the same arrival sequence. Fatal to the call that detected it; the
    /// queue store is left untouched.
    #[error("invalid queue state: {reason}")]
    InvalidState {
        /// The violated invariant.
        reason: String,
    },

    /// [`remove`](crate::queue::TriageQueue::remove) was given an id not
    /// present in the queue. Local and non-fatal.
    #[error("patient {id} not found")]
    NotFound {
        /// The unknown id.
        id: PatientId,
    },
}

impl TriageError {
    /// Shorthand for [`TriageError::InvalidPatientData`].
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        TriageError::InvalidPatientData {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`TriageError::InvalidState`].
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        TriageError::InvalidState {
            reason: reason.into(),
        }
    }
}

//! Rank derivation functions.

use super::types::PriorityKey;
use crate::patient::{LegalFlagSet, Patient, RiskColor};

/// Clinical severity rank for a color, per the fixed table
/// RED=0, YELLOW=1, GREEN=2, BLUE=3, WHITE=4.
pub fn severity_rank(color: RiskColor) -> u8 {
    color.severity_rank()
}

/// Legal rank: 0 for any non-empty flag set, 1 otherwise.
///
/// Deliberately insensitive to how many or which flags are present.
pub fn legal_rank(flags: &LegalFlagSet) -> u8 {
    if flags.is_empty() {
        1
    } else {
        0
    }
}

/// Derives the full [`PriorityKey`] for a patient.
///
/// Total, deterministic, side-effect free. Callers that sort should
/// compute the key once per patient per pass rather than per comparison;
/// [`sort_patients`](crate::sort::sort_patients) does exactly that.
pub fn priority_key(patient: &Patient) -> PriorityKey {
    PriorityKey {
        severity: severity_rank(patient.risk_color()),
        legal: legal_rank(patient.legal_flags()),
        arrival: patient.arrival(),
    }
}

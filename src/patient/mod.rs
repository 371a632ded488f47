//! Patient domain types.
//!
//! A [`Patient`] enters the system as a [`PatientDraft`] supplied by the
//! presentation shell. Registration (see
//! [`TriageQueue::register`](crate::queue::TriageQueue::register)) validates
//! the draft, stamps it with a [`PatientId`] and an [`ArrivalSequence`], and
//! from that point on the patient record is immutable.
//!
//! Clinical severity is a fixed five-level [`RiskColor`] classification.
//! Legal priority attributes are a fixed enumerated [`LegalFlagSet`], not a
//! free-form attribute bag, so rank computation stays total and exhaustive.

mod flags;
mod types;

pub use flags::{LegalFlag, LegalFlagSet};
pub use types::{ArrivalSequence, Patient, PatientDraft, PatientId, RiskColor};

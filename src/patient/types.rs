//! Core patient value types.

use super::flags::{LegalFlag, LegalFlagSet};
use crate::error::TriageError;
use std::fmt;
use std::str::FromStr;

/// Opaque unique patient identifier, minted at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientId(pub u64);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonically increasing registration order.
///
/// Assigned exactly once when the patient is registered, strictly
/// increasing across the lifetime of a queue, never reused. It is the sole
/// tie-breaker of the priority order and is never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalSequence(pub u64);

impl fmt::Display for ArrivalSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Clinical severity classification, five fixed levels.
///
/// Declaration order is severity order: `Red` is the most severe. The
/// numeric rank used by the priority policy comes from
/// [`severity_rank`](RiskColor::severity_rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RiskColor {
    /// Critical.
    Red,
    /// Urgent.
    Yellow,
    /// Semi-urgent.
    Green,
    /// Non-urgent.
    Blue,
    /// Administrative.
    White,
}

impl RiskColor {
    /// All colors, most severe first.
    pub const ALL: [RiskColor; 5] = [
        RiskColor::Red,
        RiskColor::Yellow,
        RiskColor::Green,
        RiskColor::Blue,
        RiskColor::White,
    ];

    /// Fixed severity table: Red=0, Yellow=1, Green=2, Blue=3, White=4.
    /// Lower means earlier in the queue.
    pub fn severity_rank(self) -> u8 {
        match self {
            RiskColor::Red => 0,
            RiskColor::Yellow => 1,
            RiskColor::Green => 2,
            RiskColor::Blue => 3,
            RiskColor::White => 4,
        }
    }

    /// Human-readable label for display layers.
    pub fn label(self) -> &'static str {
        match self {
            RiskColor::Red => "Red (critical)",
            RiskColor::Yellow => "Yellow (urgent)",
            RiskColor::Green => "Green (semi-urgent)",
            RiskColor::Blue => "Blue (non-urgent)",
            RiskColor::White => "White (administrative)",
        }
    }

    /// Canonical identifier, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            RiskColor::Red => "RED",
            RiskColor::Yellow => "YELLOW",
            RiskColor::Green => "GREEN",
            RiskColor::Blue => "BLUE",
            RiskColor::White => "WHITE",
        }
    }
}

impl fmt::Display for RiskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskColor {
    type Err = TriageError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(RiskColor::Red),
            "yellow" => Ok(RiskColor::Yellow),
            "green" => Ok(RiskColor::Green),
            "blue" => Ok(RiskColor::Blue),
            "white" => Ok(RiskColor::White),
            _ => Err(TriageError::invalid_data(format!(
                "unknown risk color {s:?}"
            ))),
        }
    }
}

/// Registration input collected by the presentation shell.
///
/// A draft carries no identity and no arrival order; both are assigned by
/// [`TriageQueue::register`](crate::queue::TriageQueue::register). The risk
/// color is optional here so that a shell can hand over unvalidated form
/// input; registration rejects a missing color.
///
/// # Examples
///
/// ```
/// use ordena_triage::{LegalFlag, PatientDraft, RiskColor};
///
/// let draft = PatientDraft::new("Ana Souza", RiskColor::Yellow)
///     .with_flag(LegalFlag::Elderly60Plus);
/// assert_eq!(draft.legal_flags.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientDraft {
    /// Display name. Not used for ordering.
    pub name: String,

    /// Clinical severity. `None` is rejected at registration.
    pub risk_color: Option<RiskColor>,

    /// Legal-priority attributes, possibly empty.
    pub legal_flags: LegalFlagSet,
}

impl PatientDraft {
    /// Creates a draft with a known risk color and no legal flags.
    pub fn new(name: impl Into<String>, risk_color: RiskColor) -> Self {
        Self {
            name: name.into(),
            risk_color: Some(risk_color),
            legal_flags: LegalFlagSet::EMPTY,
        }
    }

    /// Adds one legal flag.
    pub fn with_flag(mut self, flag: LegalFlag) -> Self {
        self.legal_flags.insert(flag);
        self
    }

    /// Replaces the flag set.
    pub fn with_flags(mut self, flags: LegalFlagSet) -> Self {
        self.legal_flags = flags;
        self
    }

    /// Builds a draft from raw string input.
    ///
    /// Rejects unknown colors and unknown flags with
    /// [`TriageError::InvalidPatientData`]; nothing is constructed on
    /// failure.
    pub fn parse(
        name: impl Into<String>,
        risk_color: &str,
        legal_flags: &[&str],
    ) -> Result<Self, TriageError> {
        let color: RiskColor = risk_color.parse()?;
        let flags = legal_flags
            .iter()
            .map(|s| s.parse::<LegalFlag>())
            .collect::<Result<LegalFlagSet, _>>()?;
        Ok(Self {
            name: name.into(),
            risk_color: Some(color),
            legal_flags: flags,
        })
    }
}

/// A registered patient.
///
/// Immutable once enqueued: all fields are fixed at registration time and
/// only exposed through accessors. Equality is by full value, which keeps
/// the type usable in permutation checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patient {
    id: PatientId,
    name: String,
    arrival: ArrivalSequence,
    risk_color: RiskColor,
    legal_flags: LegalFlagSet,
}

impl Patient {
    /// Assembles a patient record. Intended for the queue's registration
    /// path and for tests that need hand-built populations.
    pub fn new(
        id: PatientId,
        name: impl Into<String>,
        arrival: ArrivalSequence,
        risk_color: RiskColor,
        legal_flags: LegalFlagSet,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            arrival,
            risk_color,
            legal_flags,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> PatientId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registration order.
    pub fn arrival(&self) -> ArrivalSequence {
        self.arrival
    }

    /// Clinical severity.
    pub fn risk_color(&self) -> RiskColor {
        self.risk_color
    }

    /// Legal-priority attributes.
    pub fn legal_flags(&self) -> &LegalFlagSet {
        &self.legal_flags
    }

    /// Whether the patient holds any legal priority.
    pub fn has_legal_priority(&self) -> bool {
        !self.legal_flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_table() {
        assert_eq!(RiskColor::Red.severity_rank(), 0);
        assert_eq!(RiskColor::Yellow.severity_rank(), 1);
        assert_eq!(RiskColor::Green.severity_rank(), 2);
        assert_eq!(RiskColor::Blue.severity_rank(), 3);
        assert_eq!(RiskColor::White.severity_rank(), 4);
    }

    #[test]
    fn test_severity_ranks_distinct_and_ordered() {
        let ranks: Vec<u8> = RiskColor::ALL.iter().map(|c| c.severity_rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("RED".parse::<RiskColor>().unwrap(), RiskColor::Red);
        assert_eq!(" yellow ".parse::<RiskColor>().unwrap(), RiskColor::Yellow);
        assert_eq!("White".parse::<RiskColor>().unwrap(), RiskColor::White);
    }

    #[test]
    fn test_parse_unknown_color() {
        let err = "PURPLE".parse::<RiskColor>().unwrap_err();
        assert!(matches!(err, TriageError::InvalidPatientData { .. }));
    }

    #[test]
    fn test_draft_parse() {
        let draft =
            PatientDraft::parse("Ana", "yellow", &["elderly_60plus", "pregnant"]).unwrap();
        assert_eq!(draft.risk_color, Some(RiskColor::Yellow));
        assert_eq!(draft.legal_flags.len(), 2);
    }

    #[test]
    fn test_draft_parse_bad_flag() {
        let err = PatientDraft::parse("Ana", "yellow", &["frequent_flyer"]).unwrap_err();
        assert!(matches!(err, TriageError::InvalidPatientData { .. }));
    }

    #[test]
    fn test_draft_parse_bad_color() {
        let err = PatientDraft::parse("Ana", "PURPLE", &[]).unwrap_err();
        assert!(matches!(err, TriageError::InvalidPatientData { .. }));
    }

    #[test]
    fn test_patient_accessors() {
        let p = Patient::new(
            PatientId(7),
            "Caio",
            ArrivalSequence(3),
            RiskColor::Red,
            LegalFlagSet::new().with(LegalFlag::Disability),
        );
        assert_eq!(p.id(), PatientId(7));
        assert_eq!(p.name(), "Caio");
        assert_eq!(p.arrival(), ArrivalSequence(3));
        assert_eq!(p.risk_color(), RiskColor::Red);
        assert!(p.has_legal_priority());
    }
}

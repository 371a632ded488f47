//! Legal-priority flags and their set representation.

use crate::error::TriageError;
use std::fmt;
use std::str::FromStr;

/// A statutory priority group.
///
/// Membership in any of these groups grants legal priority. The groups are
/// a closed enumeration; unknown values are rejected at parse time rather
/// than carried around as opaque strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegalFlag {
    /// Person with a disability.
    Disability,
    /// Aged 60 or older.
    Elderly60Plus,
    /// Pregnant.
    Pregnant,
    /// Nursing an infant.
    Nursing,
    /// Carrying an infant in arms.
    InfantInArms,
    /// Person with obesity.
    Obesity,
}

impl LegalFlag {
    /// All flags, in declaration order.
    pub const ALL: [LegalFlag; 6] = [
        LegalFlag::Disability,
        LegalFlag::Elderly60Plus,
        LegalFlag::Pregnant,
        LegalFlag::Nursing,
        LegalFlag::InfantInArms,
        LegalFlag::Obesity,
    ];

    fn bit(self) -> u8 {
        match self {
            LegalFlag::Disability => 1 << 0,
            LegalFlag::Elderly60Plus => 1 << 1,
            LegalFlag::Pregnant => 1 << 2,
            LegalFlag::Nursing => 1 << 3,
            LegalFlag::InfantInArms => 1 << 4,
            LegalFlag::Obesity => 1 << 5,
        }
    }

    /// Canonical identifier, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            LegalFlag::Disability => "DISABILITY",
            LegalFlag::Elderly60Plus => "ELDERLY_60PLUS",
            LegalFlag::Pregnant => "PREGNANT",
            LegalFlag::Nursing => "NURSING",
            LegalFlag::InfantInArms => "INFANT_IN_ARMS",
            LegalFlag::Obesity => "OBESITY",
        }
    }
}

impl fmt::Display for LegalFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegalFlag {
    type Err = TriageError;

    /// Case-insensitive; `_` and `-` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "disability" => Ok(LegalFlag::Disability),
            "elderly60plus" => Ok(LegalFlag::Elderly60Plus),
            "pregnant" => Ok(LegalFlag::Pregnant),
            "nursing" => Ok(LegalFlag::Nursing),
            "infantinarms" => Ok(LegalFlag::InfantInArms),
            "obesity" => Ok(LegalFlag::Obesity),
            _ => Err(TriageError::invalid_data(format!(
                "unknown legal flag {s:?}"
            ))),
        }
    }
}

/// A set of [`LegalFlag`]s, stored as a bitmask.
///
/// Rank computation only ever asks [`is_empty`](LegalFlagSet::is_empty);
/// the count and kind of flags never influence ordering. The full set is
/// still kept so the shell can display why a patient holds legal priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<LegalFlag>", from = "Vec<LegalFlag>")
)]
pub struct LegalFlagSet(u8);

impl LegalFlagSet {
    /// The empty set.
    pub const EMPTY: LegalFlagSet = LegalFlagSet(0);

    /// Creates an empty set.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a flag. Idempotent.
    pub fn insert(&mut self, flag: LegalFlag) {
        self.0 |= flag.bit();
    }

    /// Builder form of [`insert`](LegalFlagSet::insert).
    pub fn with(mut self, flag: LegalFlag) -> Self {
        self.insert(flag);
        self
    }

    /// Whether the flag is present.
    pub fn contains(&self, flag: LegalFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Whether no flag is present.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of flags present.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates flags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = LegalFlag> + '_ {
        let mask = self.0;
        LegalFlag::ALL
            .into_iter()
            .filter(move |f| mask & f.bit() != 0)
    }
}

impl FromIterator<LegalFlag> for LegalFlagSet {
    fn from_iter<I: IntoIterator<Item = LegalFlag>>(iter: I) -> Self {
        let mut set = LegalFlagSet::new();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl From<LegalFlagSet> for Vec<LegalFlag> {
    fn from(set: LegalFlagSet) -> Self {
        set.iter().collect()
    }
}

impl From<Vec<LegalFlag>> for LegalFlagSet {
    fn from(flags: Vec<LegalFlag>) -> Self {
        flags.into_iter().collect()
    }
}

impl fmt::Display for LegalFlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        let mut first = true;
        f.write_str("{")?;
        for flag in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{flag}")?;
            first = false;
        }
        f.write_str("}")
    }
}

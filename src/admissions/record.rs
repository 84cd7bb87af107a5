//! Patient records and their triage levels.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::ordering::{compare, ArrivalCounter, PriorityClass, Triaged};

use super::error::AdmissionsError;

/// Urgency assigned at intake. RED is served before YELLOW, YELLOW before GREEN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriageLevel {
    Red,
    Yellow,
    Green,
}

impl TriageLevel {
    /// All levels, most urgent first.
    pub const ALL: [TriageLevel; 3] = [TriageLevel::Red, TriageLevel::Yellow, TriageLevel::Green];
}

impl PriorityClass for TriageLevel {
    fn rank(&self) -> u8 {
        match self {
            TriageLevel::Red => 0,
            TriageLevel::Yellow => 1,
            TriageLevel::Green => 2,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TriageLevel::Red => "RED",
            TriageLevel::Yellow => "YELLOW",
            TriageLevel::Green => "GREEN",
        }
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TriageLevel {
    type Err = AdmissionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TriageLevel::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s))
            .ok_or_else(AdmissionsError::invalid_triage)
    }
}

/// Patient gender as recorded at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// Returns the single-letter code: `F`, `M` or `X`.
    pub fn code(&self) -> char {
        match self {
            Gender::Female => 'F',
            Gender::Male => 'M',
            Gender::Other => 'X',
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Gender {
    type Err = AdmissionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().map(|c| c.to_ascii_uppercase()), chars.next()) {
            (Some('F'), None) => Ok(Gender::Female),
            (Some('M'), None) => Ok(Gender::Male),
            (Some('X'), None) => Ok(Gender::Other),
            _ => Err(AdmissionsError::invalid_gender()),
        }
    }
}

/// A patient waiting for, or already given, care.
///
/// The arrival sequence is fixed at construction. Ordering follows
/// [`compare`]: triage level first, then arrival. Demographics and the seen
/// flag do not take part in comparisons.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientRecord {
    age: u32,
    gender: Gender,
    triage: TriageLevel,
    arrival: u64,
    seen: bool,
}

impl PatientRecord {
    /// Creates an unseen record, taking its arrival number from `arrivals`.
    pub fn new(age: u32, gender: Gender, triage: TriageLevel, arrivals: &mut ArrivalCounter) -> Self {
        Self {
            age,
            gender,
            triage,
            arrival: arrivals.issue(),
            seen: false,
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn triage(&self) -> TriageLevel {
        self.triage
    }

    pub fn arrival(&self) -> u64 {
        self.arrival
    }

    /// Returns true once the patient has been seen.
    pub fn is_seen(&self) -> bool {
        self.seen
    }

    /// Marks the patient as seen.
    pub fn mark_seen(&mut self) {
        self.seen = true;
    }
}

impl Triaged for PatientRecord {
    type Class = TriageLevel;

    fn priority_class(&self) -> TriageLevel {
        self.triage
    }

    fn arrival_sequence(&self) -> u64 {
        self.arrival
    }
}

impl PartialEq for PatientRecord {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for PatientRecord {}

impl PartialOrd for PatientRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PatientRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl fmt::Display for PatientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.seen { "seen" } else { "not seen" };
        write!(
            f,
            "{}: {}{} ({}) - {}",
            self.arrival, self.age, self.gender, self.triage, status
        )
    }
}

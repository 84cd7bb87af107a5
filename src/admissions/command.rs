//! Operator command parsing.

use super::error::AdmissionsError;
use super::record::{Gender, TriageLevel};

/// One line of operator input.
///
/// Commands are selected by the number in the first token:
///
/// | Input | Command |
/// |-------|---------|
/// | `1 <age> <M/F/X> <RED/YELLOW/GREEN>` | [`Command::Admit`] |
/// | `2` | [`Command::ShowNext`] |
/// | `3` | [`Command::SeeNext`] |
/// | `4` | [`Command::ListUnseen`] |
/// | `5` | [`Command::ListSeen`] |
/// | `6` | [`Command::Clear`] |
/// | `7` | [`Command::Exit`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add a new patient to the waiting queue.
    Admit {
        age: u32,
        gender: Gender,
        triage: TriageLevel,
    },
    /// Show the next patient without removing them.
    ShowNext,
    /// Remove the next patient and mark them seen.
    SeeNext,
    /// List waiting patients in service order.
    ListUnseen,
    /// List seen patients, most recent first.
    ListSeen,
    /// Empty the waiting queue.
    Clear,
    /// End the session.
    Exit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Extra trailing tokens after a complete command are ignored.
    pub fn parse(line: &str) -> Result<Self, AdmissionsError> {
        let mut tokens = line.split_whitespace();
        let command = match tokens.next() {
            Some("1") => Self::parse_admit(tokens)?,
            Some("2") => Command::ShowNext,
            Some("3") => Command::SeeNext,
            Some("4") => Command::ListUnseen,
            Some("5") => Command::ListSeen,
            Some("6") => Command::Clear,
            Some("7") => Command::Exit,
            _ => return Err(AdmissionsError::syntax()),
        };
        Ok(command)
    }

    fn parse_admit<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Self, AdmissionsError> {
        let (Some(age), Some(gender), Some(triage)) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(AdmissionsError::syntax());
        };

        let age = age.parse().map_err(|_| AdmissionsError::invalid_age())?;
        let gender = gender.parse()?;
        let triage = triage.parse()?;
        Ok(Command::Admit {
            age,
            gender,
            triage,
        })
    }
}

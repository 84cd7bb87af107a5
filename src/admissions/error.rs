//! Admissions error kinds.

use thiserror::Error;

use crate::heap::HeapError;

/// Failure of an admissions command.
#[derive(Debug, Error)]
pub enum AdmissionsError {
    /// The command line could not be parsed.
    #[error("Syntax Error: Please enter a valid command!{hint}")]
    Syntax { hint: &'static str },

    /// The waiting queue rejected the operation.
    #[error(transparent)]
    Queue(#[from] HeapError),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading commands or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AdmissionsError {
    pub(crate) fn syntax() -> Self {
        Self::Syntax { hint: "" }
    }

    pub(crate) fn invalid_age() -> Self {
        Self::Syntax {
            hint: " Invalid age!",
        }
    }

    pub(crate) fn invalid_gender() -> Self {
        Self::Syntax {
            hint: " Gender can be M (for Male), F (for Female), or X (for Other), only.",
        }
    }

    pub(crate) fn invalid_triage() -> Self {
        Self::Syntax {
            hint: " Invalid triage level! Should be either RED/YELLOW/GREEN",
        }
    }

    /// Returns the message shown to the operator for this error.
    pub fn operator_message(&self) -> String {
        match self {
            Self::Queue(HeapError::QueueFull { .. }) => "Warning: Full Admissions Queue!".into(),
            Self::Queue(HeapError::EmptyQueue) => "Warning: Empty Admissions Queue!".into(),
            other => other.to_string(),
        }
    }
}

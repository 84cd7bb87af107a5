//! Priority care admissions.
//!
//! A thin layer over [`BoundedMinHeap`](crate::heap::BoundedMinHeap) that
//! models an urgent care waiting room:
//!
//! - **Records**: [`PatientRecord`] carries age, gender, a [`TriageLevel`]
//!   and an arrival sequence number.
//! - **Commands**: [`Command`] parses operator input lines from the menu.
//! - **Desk**: [`AdmissionsDesk`] owns the waiting queue, the arrival
//!   counter and the list of patients already seen, and runs the
//!   interactive loop.
//!
//! Heap failures are caught here, reported to the operator, and the loop
//! continues. This is the only layer that logs.

mod command;
mod config;
mod desk;
mod error;
mod record;

pub use command::Command;
pub use config::AdmissionsConfig;
pub use desk::{AdmissionsDesk, Outcome};
pub use error::AdmissionsError;
pub use record::{Gender, PatientRecord, TriageLevel};

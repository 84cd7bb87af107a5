//! The admissions desk: queue, seen list, and the interactive loop.

use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::heap::BoundedMinHeap;
use crate::ordering::ArrivalCounter;

use super::command::Command;
use super::config::AdmissionsConfig;
use super::error::AdmissionsError;
use super::record::{Gender, PatientRecord, TriageLevel};

const WELCOME_MSG: &str = "--- Welcome to the Priority Care Admissions App! ----";
const GOOD_BYE_MSG: &str = "---------- BYE! Thanks for using our App! ----------";
const CLOSED_MSG: &str = "Sorry! We are closed due to out of control circumstances!";
const PROMPT: &str = "ENTER COMMAND: ";

const MENU: &str = "\n==================== MENU ====================
Enter one of the following options:
[1 <age> <M/F/X> <RED/YELLOW/GREEN>] Add a new patient record
[2] Show next patient
[3] See next patient
[4] List all unseen patient records
[5] List seen patients
[6] Clear the care admission queue
[7] Logout and EXIT
----------------------------------------------";

/// Result of a successfully executed [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A patient joined the queue with this arrival number.
    Admitted { arrival: u64 },
    /// The next patient, still waiting.
    Next(PatientRecord),
    /// The patient just seen, removed from the queue.
    Seen(PatientRecord),
    /// Rendered waiting list, one line per patient in service order.
    Unseen(String),
    /// Rendered seen list, most recent first.
    SeenList(String),
    /// The waiting queue was emptied.
    Cleared,
    /// The operator asked to leave.
    Exit,
}

impl Outcome {
    /// Returns the text printed to the operator, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Admitted { .. } | Outcome::Exit => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Admitted { arrival } => write!(f, "admitted #{arrival}"),
            Outcome::Next(record) | Outcome::Seen(record) => write!(f, "{record}"),
            Outcome::Unseen(listing) => write!(f, "List of unseen patients:\n{listing}"),
            Outcome::SeenList(listing) => write!(f, "List of seen patients:{listing}"),
            Outcome::Cleared => f.write_str(CLOSED_MSG),
            Outcome::Exit => Ok(()),
        }
    }
}

/// Owns the waiting queue and everything around it.
///
/// Records move from the queue to the seen list on [`see_next`], never
/// duplicated.
///
/// [`see_next`]: AdmissionsDesk::see_next
///
/// # Examples
///
/// ```
/// use triage_heap::admissions::{AdmissionsConfig, AdmissionsDesk, Gender, TriageLevel};
///
/// let mut desk = AdmissionsDesk::new(AdmissionsConfig::default().with_capacity(4))?;
/// desk.admit(30, Gender::Male, TriageLevel::Green)?;
/// desk.admit(71, Gender::Female, TriageLevel::Red)?;
///
/// let seen = desk.see_next()?;
/// assert_eq!(seen.to_string(), "2: 71F (RED) - seen");
/// assert_eq!(desk.waiting(), 1);
/// # Ok::<(), triage_heap::admissions::AdmissionsError>(())
/// ```
#[derive(Debug)]
pub struct AdmissionsDesk {
    config: AdmissionsConfig,
    queue: BoundedMinHeap<PatientRecord>,
    seen: VecDeque<PatientRecord>,
    arrivals: ArrivalCounter,
}

impl AdmissionsDesk {
    /// Creates a desk with an empty queue sized from `config`.
    pub fn new(config: AdmissionsConfig) -> Result<Self, AdmissionsError> {
        Self::with_arrivals(config, ArrivalCounter::new())
    }

    /// Creates a desk that numbers arrivals from the given counter.
    pub fn with_arrivals(
        config: AdmissionsConfig,
        arrivals: ArrivalCounter,
    ) -> Result<Self, AdmissionsError> {
        config.validate().map_err(AdmissionsError::Config)?;
        let queue = BoundedMinHeap::new(config.capacity)?;
        Ok(Self {
            config,
            queue,
            seen: VecDeque::new(),
            arrivals,
        })
    }

    pub fn config(&self) -> &AdmissionsConfig {
        &self.config
    }

    /// Returns the waiting queue.
    pub fn queue(&self) -> &BoundedMinHeap<PatientRecord> {
        &self.queue
    }

    /// Returns the number of patients waiting.
    pub fn waiting(&self) -> usize {
        self.queue.len()
    }

    /// Returns seen patients, most recent first.
    pub fn seen(&self) -> impl Iterator<Item = &PatientRecord> {
        self.seen.iter()
    }

    /// Creates a record and adds it to the queue. Returns its arrival number.
    ///
    /// The arrival number is consumed even if the queue is full.
    pub fn admit(
        &mut self,
        age: u32,
        gender: Gender,
        triage: TriageLevel,
    ) -> Result<u64, AdmissionsError> {
        let record = PatientRecord::new(age, gender, triage, &mut self.arrivals);
        let arrival = record.arrival();
        self.queue.insert(record)?;
        info!(arrival, %triage, waiting = self.queue.len(), "patient admitted");
        Ok(arrival)
    }

    /// Returns the next patient without removing them.
    pub fn show_next(&self) -> Result<&PatientRecord, AdmissionsError> {
        Ok(self.queue.peek()?)
    }

    /// Removes the next patient, marks them seen and files them first in
    /// the seen list.
    pub fn see_next(&mut self) -> Result<&PatientRecord, AdmissionsError> {
        let mut record = self.queue.extract_min()?;
        record.mark_seen();
        info!(
            arrival = record.arrival(),
            triage = %record.triage(),
            waiting = self.queue.len(),
            "patient seen"
        );
        self.seen.push_front(record);
        Ok(&self.seen[0])
    }

    /// Drops every waiting patient. The seen list is kept.
    pub fn clear(&mut self) {
        warn!(dropped = self.queue.len(), "admissions queue cleared");
        self.queue.clear();
    }

    /// Executes one command against the desk.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, AdmissionsError> {
        debug!(?command, "executing command");
        let outcome = match command {
            Command::Admit {
                age,
                gender,
                triage,
            } => Outcome::Admitted {
                arrival: self.admit(age, gender, triage)?,
            },
            Command::ShowNext => Outcome::Next(self.show_next()?.clone()),
            Command::SeeNext => Outcome::Seen(self.see_next()?.clone()),
            Command::ListUnseen => Outcome::Unseen(self.queue.render_sorted()),
            Command::ListSeen => Outcome::SeenList(
                self.seen
                    .iter()
                    .map(|record| format!("\n{record}"))
                    .collect(),
            ),
            Command::Clear => {
                self.clear();
                Outcome::Cleared
            }
            Command::Exit => Outcome::Exit,
        };
        Ok(outcome)
    }

    /// Runs the interactive loop until `7` or end of input.
    ///
    /// Command failures are printed and the loop continues; only I/O
    /// errors end the session early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), AdmissionsError> {
        writeln!(output, "{WELCOME_MSG}")?;

        loop {
            if self.config.show_menu {
                writeln!(output, "{MENU}")?;
                write!(output, "{PROMPT}")?;
                output.flush()?;
            }

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }

            match Command::parse(&line).and_then(|command| self.execute(command)) {
                Ok(Outcome::Exit) => break,
                Ok(outcome) => {
                    if let Some(text) = outcome.message() {
                        writeln!(output, "{text}")?;
                    }
                }
                Err(err) => {
                    warn!(error = %err, input = line.trim_end(), "command rejected");
                    writeln!(output, "{}", err.operator_message())?;
                }
            }
        }

        writeln!(output, "{GOOD_BYE_MSG}")?;
        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::HeapError;

    fn desk(capacity: usize) -> AdmissionsDesk {
        AdmissionsDesk::new(AdmissionsConfig::scripted().with_capacity(capacity)).unwrap()
    }

    fn run_script(desk: &mut AdmissionsDesk, script: &str) -> String {
        let mut out = Vec::new();
        desk.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_capacity() {
        let result = AdmissionsDesk::new(AdmissionsConfig::default().with_capacity(0));
        assert!(matches!(result, Err(AdmissionsError::Config(_))));
    }

    #[test]
    fn test_admit_assigns_arrivals() {
        let mut desk = desk(3);
        assert_eq!(desk.admit(54, Gender::Other, TriageLevel::Green).unwrap(), 1);
        assert_eq!(desk.admit(23, Gender::Male, TriageLevel::Green).unwrap(), 2);
        assert_eq!(desk.waiting(), 2);
    }

    #[test]
    fn test_with_arrivals_counter() {
        let config = AdmissionsConfig::scripted().with_capacity(2);
        let mut desk = AdmissionsDesk::with_arrivals(config, ArrivalCounter::starting_at(40)).unwrap();
        assert_eq!(desk.admit(5, Gender::Female, TriageLevel::Red).unwrap(), 40);
    }

    #[test]
    fn test_admit_full_queue() {
        let mut desk = desk(1);
        desk.admit(54, Gender::Other, TriageLevel::Green).unwrap();
        let err = desk.admit(23, Gender::Male, TriageLevel::Red).unwrap_err();
        assert!(matches!(
            err,
            AdmissionsError::Queue(HeapError::QueueFull { capacity: 1 })
        ));
        assert_eq!(desk.waiting(), 1);
    }

    #[test]
    fn test_show_next_empty() {
        let desk = desk(2);
        assert!(matches!(
            desk.show_next(),
            Err(AdmissionsError::Queue(HeapError::EmptyQueue))
        ));
    }

    #[test]
    fn test_see_next_moves_record() {
        let mut desk = desk(3);
        desk.admit(54, Gender::Other, TriageLevel::Green).unwrap();
        desk.admit(67, Gender::Female, TriageLevel::Yellow).unwrap();

        let seen = desk.see_next().unwrap();
        assert!(seen.is_seen());
        assert_eq!(seen.triage(), TriageLevel::Yellow);

        desk.see_next().unwrap();
        let order: Vec<u64> = desk.seen().map(|r| r.arrival()).collect();
        assert_eq!(order, vec![1, 2]);
        assert_eq!(desk.waiting(), 0);
        assert!(desk.see_next().is_err());
    }

    #[test]
    fn test_clear_keeps_seen_list() {
        let mut desk = desk(3);
        desk.admit(54, Gender::Other, TriageLevel::Green).unwrap();
        desk.admit(23, Gender::Male, TriageLevel::Green).unwrap();
        desk.see_next().unwrap();

        desk.clear();
        assert_eq!(desk.waiting(), 0);
        assert_eq!(desk.seen().count(), 1);

        // Clearing an empty queue is fine.
        desk.clear();
        assert_eq!(desk.waiting(), 0);
    }

    #[test]
    fn test_execute_outcomes() {
        let mut desk = desk(3);
        let admitted = desk
            .execute(Command::Admit {
                age: 54,
                gender: Gender::Other,
                triage: TriageLevel::Green,
            })
            .unwrap();
        assert_eq!(admitted, Outcome::Admitted { arrival: 1 });
        assert_eq!(admitted.message(), None);

        let next = desk.execute(Command::ShowNext).unwrap();
        assert_eq!(next.message().unwrap(), "1: 54X (GREEN) - not seen");

        let unseen = desk.execute(Command::ListUnseen).unwrap();
        assert_eq!(
            unseen.message().unwrap(),
            "List of unseen patients:\n1: 54X (GREEN) - not seen\n"
        );

        let seen = desk.execute(Command::SeeNext).unwrap();
        assert_eq!(seen.message().unwrap(), "1: 54X (GREEN) - seen");

        let listing = desk.execute(Command::ListSeen).unwrap();
        assert_eq!(
            listing.message().unwrap(),
            "List of seen patients:\n1: 54X (GREEN) - seen"
        );

        let cleared = desk.execute(Command::Clear).unwrap();
        assert_eq!(cleared.message().unwrap(), CLOSED_MSG);

        assert_eq!(desk.execute(Command::Exit).unwrap(), Outcome::Exit);
    }

    #[test]
    fn test_run_scripted_session() {
        let mut desk = desk(3);
        let output = run_script(
            &mut desk,
            "1 54 X GREEN\n1 23 M GREEN\n1 67 F YELLOW\n4\n3\n5\n7\n",
        );

        let expected = [
            WELCOME_MSG,
            "List of unseen patients:",
            "3: 67F (YELLOW) - not seen",
            "1: 54X (GREEN) - not seen",
            "2: 23M (GREEN) - not seen",
            "",
            "3: 67F (YELLOW) - seen",
            "List of seen patients:",
            "3: 67F (YELLOW) - seen",
            GOOD_BYE_MSG,
            "",
        ]
        .join("\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_run_reports_errors_and_continues() {
        let mut desk = desk(1);
        let output = run_script(&mut desk, "2\n1 54 X GREEN\n1 23 M RED\n1 x M RED\n9\n2\n7\n");

        let expected = [
            WELCOME_MSG,
            "Warning: Empty Admissions Queue!",
            "Warning: Full Admissions Queue!",
            "Syntax Error: Please enter a valid command! Invalid age!",
            "Syntax Error: Please enter a valid command!",
            "1: 54X (GREEN) - not seen",
            GOOD_BYE_MSG,
            "",
        ]
        .join("\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut desk = desk(2);
        let output = run_script(&mut desk, "1 54 X GREEN\n");
        assert_eq!(output, format!("{WELCOME_MSG}\n{GOOD_BYE_MSG}\n"));
        assert_eq!(desk.waiting(), 1);
    }

    #[test]
    fn test_run_with_menu() {
        let mut desk = AdmissionsDesk::new(AdmissionsConfig::default()).unwrap();
        let output = run_script(&mut desk, "7\n");
        assert!(output.starts_with(WELCOME_MSG));
        assert!(output.contains("[7] Logout and EXIT"));
        assert!(output.contains(PROMPT));
        assert!(output.ends_with(&format!("{GOOD_BYE_MSG}\n")));
    }
}

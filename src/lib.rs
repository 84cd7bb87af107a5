//! Fixed-capacity priority queue for triaged records.
//!
//! Provides:
//!
//! - **Ordering**: a two-level total order over records. Priority class
//!   rank decides first; arrival sequence breaks ties, earliest first.
//! - **Heap**: an array-backed binary min-heap with a capacity fixed at
//!   construction. Overflow and underflow are reported as distinct errors,
//!   never resized or silently ignored.
//! - **Admissions**: a thin urgent-care desk built on the two above, with
//!   patient records, RED/YELLOW/GREEN triage levels, an operator command
//!   parser and an interactive loop.
//!
//! # Architecture
//!
//! `ordering` and `heap` are self-contained and do not log. `admissions`
//! depends on both and is the only module that emits `tracing` events.
//! The `care-admissions` binary (feature `cli`) wires the desk to stdin
//! and stdout.

pub mod admissions;
pub mod heap;
pub mod ordering;

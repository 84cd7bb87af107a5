//! Total ordering over triaged records.
//!
//! Records are ranked by two criteria, applied in order:
//!
//! - **Priority class**: a discrete severity level with an explicit rank.
//!   Lower rank means more urgent.
//! - **Arrival sequence**: a monotonically increasing number handed out when
//!   the record is created. Breaks ties within the same class; earlier wins.
//!
//! Records with equal class and equal sequence compare equal. That only
//! happens when an [`ArrivalCounter`] is reset, which tests use to build
//! equivalent records.
//!
//! This is the sole comparison primitive used by
//! [`BoundedMinHeap`](crate::heap::BoundedMinHeap) when it stores records
//! whose `Ord` impl delegates to [`compare`].

mod counter;
mod rule;
mod types;

pub use counter::ArrivalCounter;
pub use rule::compare;
pub use types::{PriorityClass, Triaged};

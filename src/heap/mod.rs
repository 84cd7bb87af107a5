//! Fixed-capacity binary min-heap.
//!
//! An array-backed heap whose capacity is chosen at construction and never
//! grows. Overflow is a reported error, not a resize. The root always holds
//! the minimum element under `T`'s `Ord` impl, so storing records whose
//! ordering delegates to [`crate::ordering::compare`] yields a triage queue.
//!
//! # Operations
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `insert` | O(log n) |
//! | `extract_min` | O(log n) |
//! | `peek`, `len`, `capacity` | O(1) |
//! | `clear` | O(n) |
//! | `snapshot_sorted` | O(n log n) |
//!
//! Every rejected operation leaves the heap exactly as it was.
//!
//! The heap takes `&mut self` for mutation and performs no locking. Callers
//! sharing one heap across threads must serialize `insert`, `extract_min`
//! and `clear` themselves.

mod bounded;
mod error;

pub use bounded::BoundedMinHeap;
pub use error::HeapError;

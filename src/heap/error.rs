//! Heap error kinds.

use thiserror::Error;

/// Failure of a heap operation.
///
/// Each kind is distinct so callers can branch on it. The heap never
/// recovers from these internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Capacity passed at construction was not positive.
    #[error("invalid capacity {capacity}: must be at least 1")]
    InvalidArgument { capacity: usize },

    /// Insert attempted while every slot is occupied.
    #[error("queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    /// Peek or extract attempted on an empty heap.
    #[error("queue is empty")]
    EmptyQueue,

    /// Insert attempted without a record.
    #[error("no record to insert")]
    NullRecord,
}

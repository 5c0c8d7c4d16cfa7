//! Queue error types

use thiserror::Error;

/// Returned when a removal is attempted on an empty queue.
///
/// The message is fixed per queue kind and is exactly what `Display` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EmptyQueueError {
    message: &'static str,
}

impl EmptyQueueError {
    /// Message used by [`FifoQueue`](crate::FifoQueue) and [`PriorityQueue`](crate::PriorityQueue)
    pub const QUEUE_EMPTY: &'static str = "The queue is empty.";

    /// Message used by [`TakingTurnsQueue`](crate::TakingTurnsQueue)
    pub const NO_ONE_IN_QUEUE: &'static str = "No one in the queue.";

    pub(crate) fn queue_empty() -> Self {
        Self {
            message: Self::QUEUE_EMPTY,
        }
    }

    pub(crate) fn no_one_in_queue() -> Self {
        Self {
            message: Self::NO_ONE_IN_QUEUE,
        }
    }

    /// Get the fixed human-readable message
    pub fn message(&self) -> &'static str {
        self.message
    }
}

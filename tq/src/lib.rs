//! TurnQueue - ordering disciplines for small in-memory queues
//!
//! Three queues that differ only in who gets served next:
//!
//! - [`FifoQueue`] - strict arrival order
//! - [`PriorityQueue`] - highest priority first, arrival order among equals
//! - [`TakingTurnsQueue`] - round-robin over [`Person`]s with a turn budget
//!
//! Removing from an empty queue returns [`EmptyQueueError`]. None of the
//! queues lock internally; wrap them in a mutex to share across threads.
//!
//! # Example
//!
//! ```
//! use turnqueue::{PriorityQueue, TakingTurnsQueue};
//!
//! let mut pq = PriorityQueue::new();
//! pq.enqueue("TaskA", 2);
//! pq.enqueue("TaskB", 5);
//! assert_eq!(pq.dequeue().unwrap(), "TaskB");
//!
//! let mut turns = TakingTurnsQueue::new();
//! turns.add_person("Bob", 2);
//! assert_eq!(turns.get_next_person().unwrap().turns, 1);
//! ```

pub mod cli;
pub mod config;
mod error;
mod fifo;
mod person;
mod priority;
mod turns;

pub use error::EmptyQueueError;
pub use fifo::FifoQueue;
pub use person::Person;
pub use priority::{PriorityItem, PriorityQueue};
pub use turns::TakingTurnsQueue;

/// Default priority for CLI entries given without one
pub const DEFAULT_PRIORITY: i32 = 0;

/// Default turns for CLI entries given without a count
pub const DEFAULT_TURNS: i32 = 1;

/// Default number of turns served by `tq turns`
pub const DEFAULT_ROUNDS: usize = 10;

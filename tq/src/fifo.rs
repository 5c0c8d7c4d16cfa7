//! First-in-first-out queue

use std::collections::VecDeque;

use tracing::debug;

use crate::error::EmptyQueueError;

/// Unbounded FIFO queue backed by a ring buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self { items: VecDeque::new() }
    }
}

impl<T> FifoQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items currently queued
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item to the back of the queue
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
        debug!(len = self.items.len(), "FifoQueue::enqueue: called");
    }

    /// Remove and return the item at the front of the queue
    pub fn dequeue(&mut self) -> Result<T, EmptyQueueError> {
        let item = self.items.pop_front().ok_or_else(EmptyQueueError::queue_empty)?;
        debug!(len = self.items.len(), "FifoQueue::dequeue: called");
        Ok(item)
    }

    /// Front item, if any, without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Iterate front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for FifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for FifoQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: std::fmt::Display> std::fmt::Display for FifoQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

//! Priority queue with FIFO tie-breaking

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::EmptyQueueError;

/// A queued value with its priority and arrival sequence number
#[derive(Debug, Clone)]
pub struct PriorityItem<T> {
    pub value: T,
    pub priority: i32,
    seq: u64,
}

impl<T> PriorityItem<T> {
    /// Arrival position within the owning queue (lower arrived earlier)
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl<T> Eq for PriorityItem<T> {}

impl<T> PartialEq for PriorityItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Ord for PriorityItem<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher priority first, then earlier arrival
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for PriorityItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: std::fmt::Display> std::fmt::Display for PriorityItem<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Pri:{})", self.value, self.priority)
    }
}

/// Max-priority queue. Equal priorities are served in arrival order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<PriorityItem<T>>,
    next_seq: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Add a value as the newest arrival, whatever its priority
    pub fn enqueue(&mut self, value: T, priority: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(PriorityItem { value, priority, seq });
        debug!(priority, seq, len = self.heap.len(), "PriorityQueue::enqueue: called");
    }

    /// Remove and return the highest-priority value, earliest arrival first on ties
    pub fn dequeue(&mut self) -> Result<T, EmptyQueueError> {
        let item = self.heap.pop().ok_or_else(EmptyQueueError::queue_empty)?;
        debug!(
            priority = item.priority,
            seq = item.seq,
            len = self.heap.len(),
            "PriorityQueue::dequeue: called"
        );
        Ok(item.value)
    }

    /// The value the next `dequeue` would return
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|item| &item.value)
    }

    /// Items in arrival order
    pub fn items(&self) -> Vec<&PriorityItem<T>> {
        let mut items: Vec<_> = self.heap.iter().collect();
        items.sort_by_key(|item| item.seq);
        items
    }
}

impl<T: std::fmt::Display> std::fmt::Display for PriorityQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

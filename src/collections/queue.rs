//! FIFO queue: dynamic array of owned slots with a head index.

use crate::collections::EmptyContainerError;
use std::fmt;

/// Reclaim dead front slots once at least this many have accumulated and they
/// make up half the buffer, keeping `dequeue` O(1) amortized.
const COMPACT_THRESHOLD: usize = 32;

/// First-in first-out queue.
///
/// Elements live in `slots[head..]`; dequeued slots are emptied in place and
/// reclaimed in batches.
pub struct Queue<T> {
    slots: Vec<Option<T>>,
    head: usize,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            slots: Vec::new(),
            head: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.head
    }

    pub fn is_empty(&self) -> bool {
        self.head == self.slots.len()
    }

    /// Append an element at the rear. O(1) amortized, always succeeds.
    pub fn enqueue(&mut self, item: T) {
        self.slots.push(Some(item));
    }

    /// Remove and return the oldest element.
    pub fn dequeue(&mut self) -> Result<T, EmptyContainerError> {
        let item = self
            .slots
            .get_mut(self.head)
            .and_then(Option::take)
            .ok_or(EmptyContainerError)?;
        self.head += 1;
        self.maybe_compact();
        Ok(item)
    }

    /// Borrow the oldest element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyContainerError> {
        self.slots
            .get(self.head)
            .and_then(Option::as_ref)
            .ok_or(EmptyContainerError)
    }

    /// Non-destructive iteration, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots[self.head..].iter().filter_map(Option::as_ref)
    }

    fn maybe_compact(&mut self) {
        if self.head == self.slots.len() {
            self.slots.clear();
            self.head = 0;
        } else if self.head >= COMPACT_THRESHOLD && self.head * 2 >= self.slots.len() {
            self.slots.drain(..self.head);
            self.head = 0;
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    /// Deep copy preserving order; the copy shares nothing with the original.
    fn clone(&self) -> Self {
        Queue {
            slots: self.iter().cloned().map(Some).collect(),
            head: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

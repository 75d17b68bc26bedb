//! Generic sequential containers backing the scheduler queues and history logs.
//!
//! Both containers own their elements outright; cloning one produces a fully
//! independent copy that preserves order. Empty-access failures use the
//! dedicated [`EmptyContainerError`] so a contract breach inside the core is
//! never confused with a business-rule rejection.

mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;

use std::fmt;

/// Returned by `dequeue`/`pop`/`peek` on an empty container.
///
/// Callers in normal flow check `is_empty()` first; hitting this error is a
/// defect in the caller, not a condition to recover from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyContainerError;

impl fmt::Display for EmptyContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container is empty")
    }
}

impl std::error::Error for EmptyContainerError {}

//! LIFO stack: owned singly linked nodes.

use crate::collections::EmptyContainerError;
use std::fmt;

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// Last-in first-out stack. Each node is exclusively owned by the stack.
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { top: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Push an element on top. O(1), always succeeds.
    pub fn push(&mut self, item: T) {
        self.top = Some(Box::new(Node {
            data: item,
            next: self.top.take(),
        }));
        self.len += 1;
    }

    /// Remove and return the most recently pushed element.
    pub fn pop(&mut self) -> Result<T, EmptyContainerError> {
        let node = self.top.take().ok_or(EmptyContainerError)?;
        self.top = node.next;
        self.len -= 1;
        Ok(node.data)
    }

    /// Borrow the top element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyContainerError> {
        self.top.as_deref().map(|n| &n.data).ok_or(EmptyContainerError)
    }

    /// Non-destructive iteration, most recently pushed first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.data)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    /// Deep copy preserving LIFO order; no nodes are shared with the original.
    fn clone(&self) -> Self {
        let items: Vec<&T> = self.iter().collect();
        let mut copy = Stack::new();
        for item in items.into_iter().rev() {
            copy.push(item.clone());
        }
        copy
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // Unlink iteratively; dropping a long chain recursively would blow the
        // call stack.
        let mut node = self.top.take();
        while let Some(mut n) = node {
            node = n.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

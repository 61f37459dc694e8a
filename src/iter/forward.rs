//! Read-only and mutable forward iterators

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use super::{successor, Cursor};
use crate::arena::NodeArena;
use crate::node::NodeId;

/// Read-only forward iterator
///
/// Cloning yields an independent iterator over the same remaining
/// elements, so several passes over a list are possible.
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(arena: &'a NodeArena<T>, current: Option<NodeId>, remaining: usize) -> Self {
        Self {
            arena,
            current,
            remaining,
        }
    }

    /// Step forward `n` times, stopping at end
    pub fn advance(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            if self.current.is_none() {
                break;
            }
            self.current = successor(self.arena, self.current);
            self.remaining = self.remaining.saturating_sub(1);
        }
        self
    }

    /// Element the next call to `next` would yield
    pub fn peek(&self) -> Option<&'a T> {
        let arena = self.arena;
        self.current
            .and_then(|id| arena.get(id))
            .map(|node| node.data())
    }

    /// Position of the next element
    pub fn cursor(&self) -> Cursor {
        Cursor::at(self.current)
    }

    /// Whether iteration is exhausted
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let arena = self.arena;
        let node = self.current.and_then(|id| arena.get(id))?;
        self.current = node.next();
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// Equal when both name the same node of the same list, or both are at end
impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
            && (self.current.is_none() || ptr::eq(self.arena, other.arena))
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("current", &self.current)
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Mutable forward iterator
///
/// The traversal order is resolved up front, then each element's slot is
/// handed out exactly once.
///
/// Construction allocates two buffers: one entry per list element for the
/// order, and one per arena slot for the references. Slots are never
/// returned to the allocator, so a list that once held many nodes pays for
/// its high-water mark here until it is dropped.
pub struct IterMut<'a, T> {
    values: Vec<Option<&'a mut T>>,
    order: std::vec::IntoIter<usize>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(arena: &'a mut NodeArena<T>, head: Option<NodeId>) -> Self {
        let mut order = Vec::with_capacity(arena.live());
        let mut link = head;
        while let Some(id) = link {
            let Some(node) = arena.get(id) else { break };
            order.push(id.index());
            link = node.next();
        }

        Self {
            values: arena.values_mut(),
            order: order.into_iter(),
        }
    }

    /// Step forward `n` times, stopping at end
    pub fn advance(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            if self.next().is_none() {
                break;
            }
        }
        self
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let index = self.order.next()?;
        self.values.get_mut(index)?.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.order.len())
            .finish()
    }
}

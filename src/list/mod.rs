//! Singly-linked list
//!
//! Ownership: the list owns one [`NodeArena`]; the head link names the
//! first node, each node's link names its successor. Positions are handed
//! out as [`Cursor`]s, which stay valid across mutations until their own
//! node is erased.
//!
//! - `modifiers`: push/pop, positional insert and erase, clear
//! - `operations`: reverse, unique, remove, find, sort

mod modifiers;
mod operations;
#[cfg(feature = "serde")]
mod serde_impl;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::arena::{ArenaStats, NodeArena};
use crate::iter::{successor, Cursor, Iter, IterMut};
use crate::node::{Node, NodeId};
use crate::ListError;

/// Link slot that can point at a node: the list head, or a node's `next`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Head,
    After(NodeId),
}

/// Singly-linked list with stable cursors
pub struct ForwardList<T> {
    arena: NodeArena<T>,
    head: Option<NodeId>,
    len: usize,
}

impl<T> ForwardList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            len: 0,
        }
    }

    /// Create an empty list with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            head: None,
            len: 0,
        }
    }

    /// Create a list of `n` copies of `value`
    pub fn from_elem(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut list = Self::with_capacity(n);
        list.insert_n(Cursor::end(), n, value);
        list
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cursor to the first element (end when empty)
    pub fn begin(&self) -> Cursor {
        Cursor::at(self.head)
    }

    /// The end sentinel
    pub fn end(&self) -> Cursor {
        Cursor::end()
    }

    /// First element
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| self.arena[id].data())
    }

    /// Mutable first element
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        Some(self.arena[head].data_mut())
    }

    /// Last element (walks the chain)
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Mutable last element (walks the chain)
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let Anchor::After(tail) = self.tail_anchor() else {
            return None;
        };
        Some(self.arena[tail].data_mut())
    }

    /// Element at `cursor`; `None` for end or an erased node
    pub fn get(&self, cursor: Cursor) -> Option<&T> {
        cursor
            .node()
            .and_then(|id| self.arena.get(id))
            .map(Node::data)
    }

    /// Mutable element at `cursor`
    pub fn get_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        cursor
            .node()
            .and_then(|id| self.arena.get_mut(id))
            .map(Node::data_mut)
    }

    /// Element at `cursor`, reporting why it cannot be dereferenced
    pub fn try_get(&self, cursor: Cursor) -> Result<&T, ListError> {
        match cursor.node() {
            None => Err(ListError::EndCursor),
            Some(id) => self
                .arena
                .get(id)
                .map(Node::data)
                .ok_or(ListError::StaleCursor),
        }
    }

    /// Cursor one step past `cursor` (end stays end)
    pub fn successor(&self, cursor: Cursor) -> Cursor {
        Cursor::at(successor(&self.arena, cursor.node()))
    }

    /// Cursor `n` steps past `cursor`, saturating at end
    pub fn advance(&self, cursor: Cursor, n: usize) -> Cursor {
        let mut link = cursor.node();
        for _ in 0..n {
            if link.is_none() {
                break;
            }
            link = successor(&self.arena, link);
        }
        Cursor::at(link)
    }

    /// Cursor `n` steps past `cursor`, failing instead of over-advancing
    pub fn try_advance(&self, cursor: Cursor, n: usize) -> Result<Cursor, ListError> {
        if let Some(id) = cursor.node() {
            if !self.arena.contains(id) {
                return Err(ListError::StaleCursor);
            }
        }

        let mut link = cursor.node();
        for step in 0..n {
            if link.is_none() {
                return Err(ListError::AdvancePastEnd {
                    requested: n,
                    available: step,
                });
            }
            link = successor(&self.arena, link);
        }
        Ok(Cursor::at(link))
    }

    /// Cursor to the element at `index`; `index == len()` yields end
    pub fn cursor_at(&self, index: usize) -> Result<Cursor, ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.advance(self.begin(), index))
    }

    /// Number of steps from `first` to `last` (or to end if `last` is
    /// never reached)
    ///
    /// A `first` that does not resolve in this list counts as end.
    pub fn distance(&self, first: Cursor, last: Cursor) -> usize {
        let mut link = self.resolve(first);
        let mut steps = 0;
        while link.is_some() && link != last.node() {
            link = successor(&self.arena, link);
            steps += 1;
        }
        steps
    }

    /// Read-only iterator from the front
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.head, self.len)
    }

    /// Read-only iterator starting at `cursor`
    ///
    /// An erased or foreign cursor yields an empty iterator.
    pub fn iter_from(&self, cursor: Cursor) -> Iter<'_, T> {
        let start = self.resolve(cursor);
        let remaining = self.distance(Cursor::at(start), Cursor::end());
        Iter::new(&self.arena, start, remaining)
    }

    /// Mutable iterator from the front
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.arena, self.head)
    }

    /// Allocation counters of the underlying arena
    pub fn alloc_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    /// Node named by `cursor`, if it is live in this list
    fn resolve(&self, cursor: Cursor) -> Option<NodeId> {
        cursor.node().filter(|&id| self.arena.contains(id))
    }

    fn link_of(&self, anchor: Anchor) -> Option<NodeId> {
        match anchor {
            Anchor::Head => self.head,
            Anchor::After(id) => self.arena[id].next(),
        }
    }

    fn set_link(&mut self, anchor: Anchor, link: Option<NodeId>) {
        match anchor {
            Anchor::Head => self.head = link,
            Anchor::After(id) => self.arena[id].set_next(link),
        }
    }

    /// Link slot currently pointing at `target`
    ///
    /// `None` when `target` is not part of this chain.
    fn anchor_of(&self, target: Option<NodeId>) -> Option<Anchor> {
        if self.head == target {
            return Some(Anchor::Head);
        }
        let mut link = self.head;
        while let Some(id) = link {
            let next = self.arena[id].next();
            if next == target {
                return Some(Anchor::After(id));
            }
            link = next;
        }
        None
    }

    /// Link slot of the terminating `None`
    fn tail_anchor(&self) -> Anchor {
        let mut anchor = Anchor::Head;
        while let Some(id) = self.link_of(anchor) {
            anchor = Anchor::After(id);
        }
        anchor
    }

    /// Allocate a node holding `value` and splice it in at `anchor`
    fn link_after(&mut self, anchor: Anchor, value: T) -> NodeId {
        let next = self.link_of(anchor);
        let id = self.arena.alloc(Node::with_next(value, next));
        self.set_link(anchor, Some(id));
        self.len += 1;
        id
    }

    /// Splice out and release the node at `anchor`
    fn unlink_after(&mut self, anchor: Anchor) -> Option<T> {
        let id = self.link_of(anchor)?;
        let node = self.arena.release(id)?;
        self.set_link(anchor, node.next());
        self.len -= 1;
        Some(node.into_data())
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len);
        list.extend(self.iter().cloned());
        list
    }

    /// Reuses existing nodes, then trims or grows to the source length
    fn clone_from(&mut self, source: &Self) {
        let mut theirs = source.iter();
        let mut anchor = Anchor::Head;
        while let Some(id) = self.link_of(anchor) {
            let Some(value) = theirs.next() else { break };
            self.arena[id].data_mut().clone_from(value);
            anchor = Anchor::After(id);
        }
        while self.link_of(anchor).is_some() {
            self.unlink_after(anchor);
        }
        for value in theirs {
            let id = self.link_after(anchor, value.clone());
            anchor = Anchor::After(id);
        }
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_iter(Cursor::end(), iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.extend(values);
        list
    }
}

impl<T> From<Vec<T>> for ForwardList<T> {
    fn from(values: Vec<T>) -> Self {
        let mut list = Self::with_capacity(values.len());
        list.extend(values);
        list
    }
}

impl<T: Clone> From<&[T]> for ForwardList<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

/// Owning iterator, drains from the front
#[derive(Debug)]
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let list: ForwardList<i32> = ForwardList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.begin(), list.end());
        assert!(list.front().is_none());
    }

    #[test]
    fn test_fill_construction() {
        let list = ForwardList::from_elem(4, 100);
        assert_eq!(list.len(), 4);
        assert!(list.iter().all(|&v| v == 100));
    }

    #[test]
    fn test_clone_is_deep() {
        let origin = ForwardList::from([1, 2, 3]);
        let mut copy = origin.clone();
        assert_eq!(origin, copy);

        if let Some(front) = copy.front_mut() {
            *front = 9;
        }
        assert_eq!(origin.front(), Some(&1));
        assert_ne!(origin, copy);
    }

    #[test]
    fn test_clone_from_shrinks_and_grows() {
        let long = ForwardList::from([1, 2, 3, 4, 5]);
        let short = ForwardList::from([6, 7]);

        let mut target = ForwardList::from([6, 7, 8]);
        target.clone_from(&long);
        assert_eq!(target, long);
        assert!(target.alloc_stats().is_balanced(5));

        target.clone_from(&short);
        assert_eq!(target, short);
        assert!(target.alloc_stats().is_balanced(2));
    }

    #[test]
    fn test_cursor_at_bounds() {
        let list = ForwardList::from(['A', 'B', 'C']);
        assert_eq!(list.get(list.cursor_at(1).unwrap()), Some(&'B'));
        assert_eq!(list.cursor_at(3).unwrap(), list.end());
        assert_eq!(
            list.cursor_at(4),
            Err(ListError::IndexOutOfRange { index: 4, len: 3 })
        );
    }

    #[test]
    fn test_try_advance_past_end() {
        let list = ForwardList::from([1, 2, 3]);
        assert_eq!(list.try_advance(list.begin(), 3), Ok(list.end()));
        assert_eq!(
            list.try_advance(list.begin(), 5),
            Err(ListError::AdvancePastEnd {
                requested: 5,
                available: 3
            })
        );
        assert_eq!(list.advance(list.begin(), 5), list.end());
    }

    #[test]
    fn test_try_get_reasons() {
        let mut list = ForwardList::from([1, 2]);
        let first = list.begin();
        assert_eq!(list.try_get(first), Ok(&1));
        assert_eq!(list.try_get(list.end()), Err(ListError::EndCursor));

        list.pop_front();
        assert_eq!(list.try_get(first), Err(ListError::StaleCursor));
        assert_eq!(list.get(first), None);
    }

    #[test]
    fn test_back_walks_to_tail() {
        let mut list = ForwardList::from([1, 2, 3]);
        assert_eq!(list.back(), Some(&3));
        if let Some(last) = list.back_mut() {
            *last = 30;
        }
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 30]);
    }

    #[test]
    fn test_back_mut_after_churn() {
        let mut list: ForwardList<u32> = (0..1000).collect();
        list.clear();
        assert_eq!(list.back_mut(), None);

        list.push_back(7);
        list.push_back(8);
        if let Some(last) = list.back_mut() {
            *last += 1;
        }
        assert_eq!(list.back(), Some(&9));
        assert_eq!(list.alloc_stats().allocated, 1002);
    }

    #[test]
    fn test_distance() {
        let list = ForwardList::from([1, 2, 3, 4]);
        let second = list.successor(list.begin());
        assert_eq!(list.distance(list.begin(), second), 1);
        assert_eq!(list.distance(second, list.end()), 3);
        assert_eq!(list.distance(list.end(), list.end()), 0);
    }

    #[test]
    fn test_erased_cursor_has_no_distance() {
        let mut list = ForwardList::from([1, 2, 3]);
        let first = list.begin();
        list.pop_front();

        assert_eq!(list.distance(first, list.end()), 0);
        let it = list.iter_from(first);
        assert_eq!(it.len(), 0);
        assert_eq!(it.count(), 0);
    }

    #[test]
    fn test_debug_and_ordering() {
        let list = ForwardList::from([1, 2]);
        assert_eq!(format!("{:?}", list), "[1, 2]");
        assert!(ForwardList::from([1, 2]) < ForwardList::from([1, 3]));
        assert!(ForwardList::from([1]) < ForwardList::from([1, 0]));
    }

    #[test]
    fn test_into_iter_drains() {
        let list = ForwardList::from(vec!['x', 'y']);
        let drained: Vec<_> = list.into_iter().collect();
        assert_eq!(drained, vec!['x', 'y']);
    }
}

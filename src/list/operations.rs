//! List algorithms: reverse, unique, remove, find, sort
//!
//! All of these relink existing nodes; none of them allocates.

use std::cmp::Ordering;

use tracing::trace;

use super::{Anchor, ForwardList};
use crate::arena::NodeArena;
use crate::iter::Cursor;
use crate::node::NodeId;

impl<T> ForwardList<T> {
    /// Reverse the traversal order in place
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut link = self.head;
        while let Some(id) = link {
            let node = &mut self.arena[id];
            link = node.next();
            node.set_next(reversed);
            reversed = Some(id);
        }
        self.head = reversed;
        trace!(len = self.len, "reverse");
    }

    /// Collapse runs of consecutive equal elements, keeping the first of
    /// each run. Returns the number of removed elements.
    ///
    /// Only adjacent duplicates are removed; sort first for a global dedup.
    pub fn unique(&mut self) -> usize
    where
        T: PartialEq,
    {
        self.unique_by(|kept, candidate| kept == candidate)
    }

    /// Like [`unique`](Self::unique) with a caller-supplied equivalence
    ///
    /// `same(kept, candidate)` receives the surviving element of the current
    /// run and the element right after it.
    pub fn unique_by<F>(&mut self, mut same: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let Some(mut kept) = self.head else {
            return 0;
        };

        let mut removed = 0usize;
        while let Some(next) = self.arena[kept].next() {
            if same(self.arena[kept].data(), self.arena[next].data()) {
                self.unlink_after(Anchor::After(kept));
                removed += 1;
            } else {
                kept = next;
            }
        }
        trace!(removed, len = self.len, "unique");
        removed
    }

    /// Remove every element equal to `value`. Returns the number removed.
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_if(|candidate| candidate == value)
    }

    /// Remove every element matching `pred`. Returns the number removed.
    ///
    /// `pred` runs exactly once per element, front to back.
    pub fn remove_if<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut anchor = Anchor::Head;
        let mut removed = 0usize;
        while let Some(id) = self.link_of(anchor) {
            if pred(self.arena[id].data()) {
                self.unlink_after(anchor);
                removed += 1;
            } else {
                anchor = Anchor::After(id);
            }
        }
        trace!(removed, len = self.len, "remove_if");
        removed
    }

    /// Keep only the elements matching `keep`
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.remove_if(|value| !keep(value))
    }

    /// Cursor to the first element equal to `value`, or `end()`
    pub fn find(&self, value: &T) -> Cursor
    where
        T: PartialEq,
    {
        let mut link = self.head;
        while let Some(id) = link {
            let node = &self.arena[id];
            if node.data() == value {
                return Cursor::at(Some(id));
            }
            link = node.next();
        }
        Cursor::end()
    }

    /// Whether any element equals `value`
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        !self.find(value).is_end()
    }

    /// Stable ascending sort
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Stable sort by key
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }

    /// Stable sort with a comparator
    ///
    /// Nodes are relinked by a top-down merge sort; cursors keep naming
    /// the same values.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len < 2 {
            return;
        }
        self.head = merge_sort(&mut self.arena, self.head, self.len, &mut compare);
        trace!(len = self.len, "sort");
    }
}

/// Sort the `len`-node chain starting at `head`, returning the new head
///
/// Recursion depth is O(log len).
fn merge_sort<T, F>(
    arena: &mut NodeArena<T>,
    head: Option<NodeId>,
    len: usize,
    compare: &mut F,
) -> Option<NodeId>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if len < 2 {
        return head;
    }
    let first = head?;

    // Cut after the first half
    let mid = len / 2;
    let mut left_tail = first;
    for _ in 1..mid {
        match arena[left_tail].next() {
            Some(next) => left_tail = next,
            None => return head,
        }
    }
    let right = arena[left_tail].next();
    arena[left_tail].set_next(None);

    let left = merge_sort(arena, Some(first), mid, compare);
    let right = merge_sort(arena, right, len - mid, compare);
    merge(arena, left, right, compare)
}

/// Merge two sorted chains; ties take from `left`
fn merge<T, F>(
    arena: &mut NodeArena<T>,
    mut left: Option<NodeId>,
    mut right: Option<NodeId>,
    compare: &mut F,
) -> Option<NodeId>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut head = None;
    let mut tail: Option<NodeId> = None;

    let rest = loop {
        let (l, r) = match (left, right) {
            (Some(l), Some(r)) => (l, r),
            (rest, None) | (None, rest) => break rest,
        };

        let take = if compare(arena[r].data(), arena[l].data()) == Ordering::Less {
            right = arena[r].next();
            r
        } else {
            left = arena[l].next();
            l
        };

        match tail {
            Some(t) => arena[t].set_next(Some(take)),
            None => head = Some(take),
        }
        tail = Some(take);
    };

    match tail {
        Some(t) => arena[t].set_next(rest),
        None => head = rest,
    }
    head
}

#[cfg(test)]
mod tests {
    use crate::ForwardList;

    fn values<T: Copy>(list: &ForwardList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_reverse() {
        let mut list = ForwardList::from([5, 4, 3, 2, 1]);
        list.reverse();
        assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unique_consecutive_only() {
        let mut list = ForwardList::from([1, 2, 1, 3, 3, 4, 5, 4, 6, 5, 5]);
        assert_eq!(list.unique(), 2);
        assert_eq!(values(&list), vec![1, 2, 1, 3, 4, 5, 4, 6, 5]);
    }

    #[test]
    fn test_unique_by_sees_run_survivor() {
        // Within distance 1 of the run's first element
        let mut list = ForwardList::from([1, 2, 3, 4, 10, 11]);
        list.unique_by(|kept, candidate| candidate - kept <= 1);
        assert_eq!(values(&list), vec![1, 3, 10]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = ForwardList::from(['A', 'Z', 'Z', 'B', 'Z', 'C', 'Z']);
        assert_eq!(list.remove(&'Z'), 4);
        assert_eq!(values(&list), vec!['A', 'B', 'C']);
    }

    #[test]
    fn test_retain() {
        let mut list = ForwardList::from([1, 2, 3, 4]);
        list.retain(|v| v % 2 == 0);
        assert_eq!(values(&list), vec![2, 4]);
    }

    #[test]
    fn test_find() {
        let list = ForwardList::from([1, 2, 3, 4, 5]);
        assert_eq!(list.get(list.find(&3)), Some(&3));
        assert_eq!(list.find(&9), list.end());
        assert!(list.contains(&5));
    }

    #[test]
    fn test_sort_is_stable() {
        let mut list = ForwardList::from([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')]);
        list.sort_by_key(|&(key, _)| key);
        assert_eq!(
            values(&list),
            vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
    }

    #[test]
    fn test_sort_keeps_cursors_on_values() {
        let mut list = ForwardList::from([3, 1, 2]);
        let three = list.begin();
        list.sort();
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.get(three), Some(&3));
        assert_eq!(list.successor(three), list.end());
        assert!(list.alloc_stats().is_balanced(3));
    }
}

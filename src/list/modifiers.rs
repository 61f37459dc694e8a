//! Insertion and erasure

use tracing::{trace, warn};

use super::{Anchor, ForwardList};
use crate::iter::Cursor;

impl<T> ForwardList<T> {
    /// Insert at the front, O(1)
    pub fn push_front(&mut self, value: T) -> Cursor {
        Cursor::at(Some(self.link_after(Anchor::Head, value)))
    }

    /// Insert at the back, O(n): the tail is located by walking the chain
    pub fn push_back(&mut self, value: T) -> Cursor {
        let anchor = self.tail_anchor();
        Cursor::at(Some(self.link_after(anchor, value)))
    }

    /// Remove and return the first element; `None` leaves the list untouched
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink_after(Anchor::Head)
    }

    /// Remove and return the last element; `None` leaves the list untouched
    pub fn pop_back(&mut self) -> Option<T> {
        let mut anchor = Anchor::Head;
        loop {
            let id = self.link_of(anchor)?;
            if self.arena[id].next().is_none() {
                break;
            }
            anchor = Anchor::After(id);
        }
        self.unlink_after(anchor)
    }

    /// Insert `value` immediately before `position`
    ///
    /// The node at `position` is not touched, so `position` still
    /// dereferences to the same value afterwards. Inserting before `end()`
    /// appends, before `begin()` prepends. Returns the new node's cursor.
    pub fn insert(&mut self, position: Cursor, value: T) -> Cursor {
        let anchor = self.insertion_anchor(position);
        Cursor::at(Some(self.link_after(anchor, value)))
    }

    /// Insert `n` copies of `value` before `position`
    ///
    /// Returns the cursor of the first inserted node, or `position` when
    /// `n == 0`.
    pub fn insert_n(&mut self, position: Cursor, n: usize, value: T) -> Cursor
    where
        T: Clone,
    {
        self.insert_iter(position, std::iter::repeat(value).take(n))
    }

    /// Insert every item of `values` before `position`, keeping their order
    ///
    /// Returns the cursor of the first inserted node, or `position` when
    /// `values` is empty.
    pub fn insert_iter<I>(&mut self, position: Cursor, values: I) -> Cursor
    where
        I: IntoIterator<Item = T>,
    {
        let mut anchor = self.insertion_anchor(position);
        let mut first = None;
        for value in values {
            let id = self.link_after(anchor, value);
            first.get_or_insert(id);
            anchor = Anchor::After(id);
        }
        first.map_or(position, |id| Cursor::at(Some(id)))
    }

    /// Remove the node at `position`
    ///
    /// Returns the cursor of the node that followed it (end if it was the
    /// last). Erasing `end()` does nothing and returns `end()`.
    pub fn erase(&mut self, position: Cursor) -> Cursor {
        let Some(target) = position.node() else {
            return Cursor::end();
        };
        let Some(anchor) = self.anchor_of(Some(target)) else {
            warn!(node = %target, "erase: cursor does not name a node of this list");
            return Cursor::end();
        };
        self.unlink_after(anchor);
        Cursor::at(self.link_of(anchor))
    }

    /// Remove every node in `[first, last)`
    ///
    /// Returns `last` unchanged. `first == last` removes nothing.
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Cursor {
        if first == last {
            return last;
        }
        let Some(start) = first.node() else {
            return last;
        };
        let Some(anchor) = self.anchor_of(Some(start)) else {
            warn!(node = %start, "erase_range: first cursor does not name a node of this list");
            return last;
        };

        let mut removed = 0usize;
        while let Some(id) = self.link_of(anchor) {
            if Some(id) == last.node() {
                break;
            }
            self.unlink_after(anchor);
            removed += 1;
        }
        trace!(removed, len = self.len, "erase_range");
        last
    }

    /// Release every node
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.len = 0;
    }

    /// Anchor for inserting before `position`; unknown cursors append
    fn insertion_anchor(&self, position: Cursor) -> Anchor {
        match self.anchor_of(position.node()) {
            Some(anchor) => anchor,
            None => {
                warn!(?position, "insert: cursor does not name a node of this list, appending");
                self.tail_anchor()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ForwardList;

    fn values<T: Copy>(list: &ForwardList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_push_both_ends() {
        let mut list = ForwardList::new();
        list.push_back(2);
        list.push_back(3);
        list.push_front(1);
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_pop_back_to_empty() {
        let mut list = ForwardList::from([1, 2]);
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert!(list.alloc_stats().is_balanced(0));
    }

    #[test]
    fn test_insert_keeps_position_value() {
        let mut list = ForwardList::from([2, 9, 6, 10]);
        let position = list.cursor_at(2).unwrap();
        let inserted = list.insert(position, 5);

        assert_eq!(values(&list), vec![2, 9, 5, 6, 10]);
        assert_eq!(list.get(position), Some(&6));
        assert_eq!(list.get(inserted), Some(&5));
        assert_eq!(list.successor(inserted), position);
    }

    #[test]
    fn test_insert_iter_returns_first() {
        let mut list = ForwardList::from([1, 5]);
        let position = list.successor(list.begin());
        let first = list.insert_iter(position, vec![2, 3, 4]);
        assert_eq!(list.get(first), Some(&2));
        assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);

        let none = list.insert_iter(position, Vec::new());
        assert_eq!(none, position);
    }

    #[test]
    fn test_erase_returns_successor() {
        let mut list = ForwardList::from(['A', 'B', 'C', 'D']);
        let second = list.successor(list.begin());
        let next = list.erase(second);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(next), Some(&'C'));
        assert_eq!(list.get(second), None);
    }

    #[test]
    fn test_erase_stale_cursor_is_noop() {
        let mut list = ForwardList::from([1, 2, 3]);
        let first = list.begin();
        list.erase(first);
        assert_eq!(list.erase(first), list.end());
        assert_eq!(values(&list), vec![2, 3]);
    }

    #[test]
    fn test_clear_releases_nodes() {
        let mut list = ForwardList::from([1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
        let stats = list.alloc_stats();
        assert_eq!(stats.allocated, 3);
        assert_eq!(stats.released, 3);

        list.clear();
        assert!(list.is_empty());
    }
}

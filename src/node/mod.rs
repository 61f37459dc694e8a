//! Node storage
//!
//! A node is one element plus the link to its successor.
//! Links are [`NodeId`] handles into the owning list's arena, never
//! references, so rewiring a link has no ownership consequences.

use std::fmt;

/// Handle naming one arena slot at one point in its lifetime
///
/// The generation distinguishes successive occupants of the same slot:
/// once a node is released, handles to it stop resolving. The owner stamp
/// names the arena that issued the handle, so another list's arena never
/// resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    /// Stamp of the issuing arena
    pub(crate) owner: u32,

    /// Slot index inside the arena
    pub(crate) index: usize,

    /// Slot generation at allocation time
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) fn new(owner: u32, index: usize, generation: u32) -> Self {
        Self {
            owner,
            index,
            generation,
        }
    }

    /// Stamp of the arena that issued this handle
    #[inline]
    pub fn owner(&self) -> u32 {
        self.owner
    }

    /// Slot index
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Slot generation
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}@{}", self.index, self.generation, self.owner)
    }
}

/// Single list element with an outgoing link
///
/// `Clone` copies the value and the link verbatim: the copy names the
/// same successor as the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node<T> {
    data: T,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    /// Unlinked node holding `data`
    pub fn new(data: T) -> Self {
        Self { data, next: None }
    }

    /// Node holding `data` linked to `next`
    pub fn with_next(data: T, next: Option<NodeId>) -> Self {
        Self { data, next }
    }

    /// Stored value
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Mutable access to the stored value
    #[inline]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Replace the stored value, returning the previous one
    pub fn set_data(&mut self, data: T) -> T {
        std::mem::replace(&mut self.data, data)
    }

    /// Outgoing link (`None` at the tail)
    #[inline]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// Rewire the outgoing link
    ///
    /// The previously linked node is not released; whoever unlinks it
    /// is responsible for it.
    #[inline]
    pub fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }

    /// Consume the node, yielding its value
    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_node() {
        let node: Node<i32> = Node::default();
        assert_eq!(*node.data(), 0);
        assert_eq!(node.next(), None);
    }

    #[test]
    fn test_value_node() {
        let node = Node::new('n');
        assert_eq!(*node.data(), 'n');
        assert!(node.next().is_none());
    }

    #[test]
    fn test_mutators() {
        let mut node = Node::new(1.0f32);
        let old = node.set_data(3.545);
        assert_eq!(old, 1.0);
        assert_eq!(*node.data(), 3.545f32);

        let mut letter = Node::new('a');
        *letter.data_mut() = 'A';
        assert_eq!(*letter.data(), 'A');

        let link = NodeId::new(1, 7, 2);
        node.set_next(Some(link));
        assert_eq!(node.next(), Some(link));
    }

    #[test]
    fn test_clone_shares_successor() {
        let link = NodeId::new(1, 3, 0);
        let original = Node::with_next(5, Some(link));
        let mut copy = original.clone();

        assert_eq!(*copy.data(), 5);
        assert_eq!(copy.next(), original.next());

        // Rewiring the copy leaves the original alone
        copy.set_next(None);
        assert_eq!(original.next(), Some(link));
    }

    #[test]
    fn test_display_handle() {
        assert_eq!(NodeId::new(9, 4, 1).to_string(), "#4v1@9");
    }
}

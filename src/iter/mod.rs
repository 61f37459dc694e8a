//! Cursor and iterator tiers
//!
//! Three capability levels over one traversal step:
//! - [`Cursor`]: position handle, copyable, compared by node identity
//! - [`Iter`]: read-only forward iteration, multi-pass via `Clone`
//! - [`IterMut`]: forward iteration yielding writable references
//!
//! All of them move with [`successor`]; none of them owns a node.

mod forward;

pub use forward::{Iter, IterMut};

use crate::arena::NodeArena;
use crate::node::{Node, NodeId};

/// Follow one link
///
/// End (and a stale handle) steps to end.
#[inline]
pub(crate) fn successor<T>(arena: &NodeArena<T>, link: Option<NodeId>) -> Option<NodeId> {
    link.and_then(|id| arena.get(id)).and_then(Node::next)
}

/// Non-owning handle to one node of a list, or to the end sentinel
///
/// Cursors are plain values: they do not borrow the list, so they can be
/// held across mutations. A cursor stays meaningful until its node is
/// erased; after that it resolves to nothing. A cursor issued by one list
/// never resolves in another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    node: Option<NodeId>,
}

impl Cursor {
    /// The end sentinel (one past the last element)
    pub const fn end() -> Self {
        Self { node: None }
    }

    #[inline]
    pub(crate) fn at(node: Option<NodeId>) -> Self {
        Self { node }
    }

    /// Whether this is the end sentinel
    #[inline]
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Node handle, `None` for end
    #[inline]
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }
}

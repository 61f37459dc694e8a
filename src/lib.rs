//! # Singly-Linked List with Stable Cursors
//!
//! A forward list in the style of the classic node-based containers:
//! each node holds one value and a link to its successor, and positions
//! are handed out as cursors that survive unrelated mutations.
//!
//! ## Layers
//!
//! 1. **Node**: value + link, leaf component
//! 2. **Arena**: owns every node of one list, recycles slots by generation
//! 3. **Cursors/iterators**: position handles, read-only and mutable forward iteration
//! 4. **List**: construction, insertion/erasure, reverse, unique, remove, sort
//!
//! ## Usage Example
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::from([2, 9, 6, 10]);
//! let position = list.cursor_at(2)?;
//! list.insert(position, 5);
//! assert_eq!(list, ForwardList::from([2, 9, 5, 6, 10]));
//!
//! list.sort_by(|a, b| b.cmp(a));
//! assert_eq!(list.front(), Some(&10));
//! # Ok::<(), forward_list::ListError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod arena;  // Node storage and accounting
pub mod iter;   // Cursor and iterator tiers
pub mod list;   // The list itself
pub mod node;   // Node and handle types
pub mod script; // Command language driving a list

// Re-exports for convenience
pub use arena::ArenaStats;
pub use iter::{Cursor, Iter, IterMut};
pub use list::{ForwardList, IntoIter};
pub use node::{Node, NodeId};

use thiserror::Error;

/// Errors reported by the checked cursor helpers
///
/// The plain list operations never fail; these only come from the
/// `try_*` / `cursor_at` variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Index past `len()`
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// List length
        len: usize,
    },

    /// Advancing would step past the end sentinel
    #[error("cannot advance {requested} steps, only {available} available")]
    AdvancePastEnd {
        /// Steps requested
        requested: usize,
        /// Steps possible before reaching end
        available: usize,
    },

    /// The cursor's node has been erased
    #[error("cursor refers to an erased node")]
    StaleCursor,

    /// The end sentinel has no value
    #[error("cannot dereference the end cursor")]
    EndCursor,
}

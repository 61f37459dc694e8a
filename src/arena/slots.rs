//! Generation-stamped slot storage

use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU32, Ordering};

use super::ArenaStats;
use crate::node::{Node, NodeId};

/// Source of arena stamps; 0 is never handed out
static NEXT_OWNER: AtomicU32 = AtomicU32::new(1);

fn next_owner() -> u32 {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Owns the nodes of one list
///
/// Released slots are recycled through a free list; their generation is
/// bumped first so handles to the old occupant no longer resolve.
#[derive(Debug)]
pub struct NodeArena<T> {
    /// Stamp carried by every handle this arena issues
    owner: u32,

    slots: Vec<Slot<T>>,

    /// Indices of vacant slots
    free: Vec<usize>,

    stats: ArenaStats,
}

impl<T> NodeArena<T> {
    /// Create an empty arena
    pub fn new() -> Self {
        Self {
            owner: next_owner(),
            slots: Vec::new(),
            free: Vec::new(),
            stats: ArenaStats::default(),
        }
    }

    /// Create an arena with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            owner: next_owner(),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            stats: ArenaStats::default(),
        }
    }

    /// Store `node`, returning its handle
    pub fn alloc(&mut self, node: Node<T>) -> NodeId {
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId::new(self.owner, index, slot.generation)
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId::new(self.owner, self.slots.len() - 1, 0)
            }
        };

        self.stats.allocated += 1;
        self.stats.peak_live = self.stats.peak_live.max(self.stats.live());
        id
    }

    /// Take the node out of its slot
    ///
    /// Returns `None` if the handle is stale.
    pub fn release(&mut self, id: NodeId) -> Option<Node<T>> {
        if id.owner != self.owner {
            return None;
        }
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.stats.released += 1;
        Some(node)
    }

    /// Release every live node
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
                self.stats.released += 1;
            }
        }
    }

    /// Resolve a handle
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        if id.owner != self.owner {
            return None;
        }
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    /// Resolve a handle mutably
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        if id.owner != self.owner {
            return None;
        }
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Whether `id` names a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes
    pub fn live(&self) -> usize {
        self.stats.live()
    }

    /// Number of slots, occupied or vacant
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Allocation counters
    pub fn stats(&self) -> ArenaStats {
        self.stats
    }

    /// Mutable references to every stored value, indexed by slot
    pub(crate) fn values_mut(&mut self) -> Vec<Option<&mut T>> {
        self.slots
            .iter_mut()
            .map(|slot| slot.node.as_mut().map(Node::data_mut))
            .collect()
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale node handle {}", id),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("stale node handle {}", id),
        }
    }
}

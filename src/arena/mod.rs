//! Node storage and allocation accounting
//!
//! Every node of a list lives in that list's [`NodeArena`]. The arena
//! counts allocations and releases so the "each node released exactly
//! once" discipline can be checked from the outside.

mod slots;

pub use slots::NodeArena;

/// Allocation counters for one arena
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Nodes allocated over the arena's lifetime
    pub allocated: usize,

    /// Nodes released over the arena's lifetime
    pub released: usize,

    /// Highest number of simultaneously live nodes
    pub peak_live: usize,
}

impl ArenaStats {
    /// Nodes currently live
    pub fn live(&self) -> usize {
        self.allocated - self.released
    }

    /// True when the live count equals `len`, i.e. nothing leaked
    pub fn is_balanced(&self, len: usize) -> bool {
        self.live() == len
    }

    /// Short human-readable summary
    pub fn report(&self) -> String {
        format!(
            "allocated: {}, released: {}, live: {}, peak: {}",
            self.allocated,
            self.released,
            self.live(),
            self.peak_live
        )
    }
}

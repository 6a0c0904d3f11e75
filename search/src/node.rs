//! Core search node type.

use ladder_kernel::carrier::word::Word;

/// An immutable search node in the frontier.
///
/// The path to a node is recovered by following `parent_id` links back to
/// the root; see [`crate::search::reconstruct_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Monotonic node identifier (root = 0), also the index into
    /// `SearchResult::nodes`.
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// The word this node stands for.
    pub word: Word,
    /// Ladder steps from the start word.
    pub depth: u32,
    /// Global enqueue counter. In BFS this equals `node_id`; recorded so the
    /// graph carries the frontier order explicitly.
    pub creation_order: u64,
}

impl SearchNode {
    /// Root node for a search starting at `word`.
    #[must_use]
    pub fn root(word: Word) -> Self {
        Self {
            node_id: 0,
            parent_id: None,
            word,
            depth: 0,
            creation_order: 0,
        }
    }

    /// A child one step deeper than `self`.
    #[must_use]
    pub fn child(&self, node_id: u64, word: Word) -> Self {
        Self {
            node_id,
            parent_id: Some(self.node_id),
            word,
            depth: self.depth + 1,
            creation_order: node_id,
        }
    }
}

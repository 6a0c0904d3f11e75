//! Breadth-first frontier with loop detection.
//!
//! Uses a `BTreeSet`-based visited set (not `HashSet`) for deterministic
//! iteration order at serialization boundaries.

use std::collections::{BTreeSet, VecDeque};

use crate::node::SearchNode;

/// FIFO frontier manager.
///
/// Maintains:
/// - A `VecDeque` work queue (push back, pop front)
/// - A `BTreeSet<String>` of every word ever enqueued
///
/// A word is marked visited when it is enqueued, not when it is expanded,
/// so each word enters the queue at most once.
#[derive(Debug, Default)]
pub struct BreadthFirstFrontier {
    queue: VecDeque<SearchNode>,
    visited: BTreeSet<String>,
    high_water: u64,
}

impl BreadthFirstFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a node and mark its word as visited.
    ///
    /// Returns `false` if the word was already visited (node not added).
    pub fn push(&mut self, node: SearchNode) -> bool {
        if !self.visited.insert(node.word.as_str().to_string()) {
            return false;
        }
        self.queue.push_back(node);
        let size = self.queue.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// Dequeue the oldest node.
    #[must_use]
    pub fn pop(&mut self) -> Option<SearchNode> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn is_visited(&self, word: &str) -> bool {
        self.visited.contains(word)
    }

    /// Current queue length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of distinct words ever enqueued.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// High-water mark of queue length.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

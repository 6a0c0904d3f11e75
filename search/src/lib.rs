//! Ladder Search: deterministic breadth-first word-ladder search with an
//! auditable graph artifact.
//!
//! # Crate dependency graph
//!
//! ```text
//! ladder_kernel  ←  ladder_search  ←  ladder_harness
//! (words, hashes)   (frontier, BFS)    (worlds, bundles, rendering)
//! ```
//!
//! # Key types
//!
//! - [`search::find_word_ladder`] -- the plain contract: a path or an empty `Vec`
//! - [`search::search`] -- typed entry point returning a [`search::SearchResult`]
//! - [`node::SearchNode`] -- an enqueued word with its parent link
//! - [`frontier::BreadthFirstFrontier`] -- FIFO queue plus visited set
//! - [`graph::SearchGraph`] -- expansion-event audit log
//! - [`policy::SearchPolicy`] -- expansion and depth budgets
//! - [`contract::NeighborSource`] -- trait for candidate-word enumeration

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod policy;
pub mod search;

//! Search entry points and expansion loop.

use std::collections::BTreeMap;

use ladder_kernel::carrier::alphabet::Alphabet;
use ladder_kernel::carrier::vocabulary::Vocabulary;
use ladder_kernel::carrier::word::Word;
use tracing::{debug, trace};

use crate::contract::{NeighborSource, SubstitutionNeighbors};
use crate::error::SearchError;
use crate::frontier::BreadthFirstFrontier;
use crate::graph::{
    CandidateOutcome, CandidateRecord, ExpandEvent, NodeSummary, SearchGraph,
    SearchGraphMetadata, TerminationReason,
};
use crate::node::SearchNode;
use crate::policy::SearchPolicy;

/// A start/goal pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderQuery {
    pub start: String,
    pub goal: String,
}

impl LadderQuery {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }

    /// The same query with start and goal swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.goal.clone(), self.start.clone())
    }
}

/// Result of a search execution.
///
/// Always contains a complete `SearchGraph` audit trail regardless of how
/// the search terminated.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The goal node (if found).
    pub goal_node: Option<SearchNode>,
    /// The complete search graph audit trail.
    pub graph: SearchGraph,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<SearchNode>,
}

impl SearchResult {
    /// Returns `true` if the search terminated because the goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }

    /// The ladder from start to goal, or an empty `Vec` if none was found.
    #[must_use]
    pub fn ladder(&self) -> Vec<String> {
        match &self.goal_node {
            Some(goal) => reconstruct_path(&self.nodes, goal.node_id)
                .into_iter()
                .map(Word::into_string)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Shortest ladder from `start` to `end` using the vocabulary's own alphabet.
///
/// Returns an empty `Vec` if either word is missing from the vocabulary, if
/// their lengths differ, or if no ladder exists. Callers that need to tell
/// these cases apart should use [`search`].
#[must_use]
pub fn find_word_ladder(start: &str, end: &str, vocabulary: &Vocabulary) -> Vec<String> {
    find_word_ladder_with_alphabet(start, end, vocabulary, &vocabulary.alphabet())
}

/// Shortest ladder trying only the symbols of `alphabet` at each position.
///
/// Same empty-result conventions as [`find_word_ladder`].
#[must_use]
pub fn find_word_ladder_with_alphabet(
    start: &str,
    end: &str,
    vocabulary: &Vocabulary,
    alphabet: &Alphabet,
) -> Vec<String> {
    let neighbors = SubstitutionNeighbors::new(alphabet.clone());
    let query = LadderQuery::new(start, end);
    match search(&query, vocabulary, &neighbors, &SearchPolicy::unbounded()) {
        Ok(result) => result.ladder(),
        Err(err) => {
            debug!(%err, "ladder query rejected");
            Vec::new()
        }
    }
}

/// Check the query against the vocabulary.
///
/// # Errors
///
/// Returns the first failing precondition, checked in the order goal
/// membership, start membership, length.
pub fn validate_query(
    query: &LadderQuery,
    vocabulary: &Vocabulary,
) -> Result<(Word, Word), SearchError> {
    if !vocabulary.contains(&query.goal) {
        return Err(SearchError::GoalNotInVocabulary {
            word: query.goal.clone(),
        });
    }
    if !vocabulary.contains(&query.start) {
        return Err(SearchError::StartNotInVocabulary {
            word: query.start.clone(),
        });
    }
    let start = Word::new(&query.start);
    let goal = Word::new(&query.goal);
    if start.len() != goal.len() {
        return Err(SearchError::LengthMismatch {
            start_len: start.len(),
            goal_len: goal.len(),
        });
    }
    Ok((start, goal))
}

/// Run breadth-first search from `query.start` to `query.goal`.
///
/// The goal test runs when a node is dequeued, so the first goal found lies
/// at minimum depth. Candidates are filtered by vocabulary membership and
/// the visited set, then enqueued in enumeration order.
///
/// # Errors
///
/// Returns [`SearchError`] only for pre-flight failures: an invalid policy,
/// a start or goal outside the vocabulary, a length mismatch, or a failed
/// snapshot digest.
pub fn search(
    query: &LadderQuery,
    vocabulary: &Vocabulary,
    neighbors: &dyn NeighborSource,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;
    let (start, goal) = validate_query(query, vocabulary)?;

    let vocabulary_digest = vocabulary.digest().map_err(|e| SearchError::DigestFailed {
        detail: format!("vocabulary: {e}"),
    })?;
    let alphabet_digest = neighbors
        .alphabet()
        .digest()
        .map_err(|e| SearchError::DigestFailed {
            detail: format!("alphabet: {e}"),
        })?;
    let search_policy_digest = policy.digest().map_err(|e| SearchError::DigestFailed {
        detail: format!("search policy: {e}"),
    })?;

    debug!(
        start = %start,
        goal = %goal,
        vocabulary = vocabulary.len(),
        "ladder search starting"
    );

    let mut frontier = BreadthFirstFrontier::new();
    let mut expansions: Vec<ExpandEvent> = Vec::new();
    let mut all_nodes: Vec<SearchNode> = Vec::new();
    let mut next_node_id: u64 = 1;
    let mut expansion_count: u64 = 0;
    let mut total_candidates_generated: u64 = 0;
    let mut total_vocabulary_hits: u64 = 0;
    let mut total_duplicates_suppressed: u64 = 0;

    let root = SearchNode::root(start);
    all_nodes.push(root.clone());
    frontier.push(root);

    let termination_reason = loop {
        let Some(current) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };

        if current.word == goal {
            break TerminationReason::GoalReached {
                node_id: current.node_id,
            };
        }

        if expansion_count >= policy.max_expansions {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        let candidates = neighbors.neighbors(&current.word);
        total_candidates_generated += candidates.len() as u64;

        let mut records = Vec::new();
        for (index, candidate) in candidates.into_iter().enumerate() {
            if !vocabulary.contains_word(&candidate) {
                continue;
            }
            total_vocabulary_hits += 1;

            let outcome = if frontier.is_visited(candidate.as_str()) {
                total_duplicates_suppressed += 1;
                CandidateOutcome::DuplicateSuppressed
            } else if current.depth >= policy.max_depth {
                CandidateOutcome::SkippedByDepthLimit
            } else {
                let child = current.child(next_node_id, candidate.clone());
                next_node_id += 1;
                let to_node = child.node_id;
                all_nodes.push(child.clone());
                frontier.push(child);
                CandidateOutcome::Enqueued { to_node }
            };

            records.push(CandidateRecord {
                index: index as u64,
                word: candidate.into_string(),
                outcome,
            });
        }

        trace!(
            expansion = expansion_count,
            word = %current.word,
            depth = current.depth,
            hits = records.len(),
            frontier = frontier.len(),
            "expanded"
        );

        expansions.push(ExpandEvent {
            expansion_order: expansion_count,
            node_id: current.node_id,
            word: current.word.as_str().to_string(),
            depth: current.depth,
            candidates: records,
        });
        expansion_count += 1;
    };

    debug!(
        termination = termination_reason.as_str(),
        expansions = expansion_count,
        visited = frontier.visited_count(),
        "ladder search finished"
    );

    let goal_node = match termination_reason {
        TerminationReason::GoalReached { node_id } => usize::try_from(node_id)
            .ok()
            .and_then(|i| all_nodes.get(i))
            .cloned(),
        TerminationReason::FrontierExhausted | TerminationReason::ExpansionBudgetExceeded => None,
    };

    let metadata = SearchGraphMetadata {
        start: query.start.clone(),
        goal: query.goal.clone(),
        neighbor_source: neighbors.source_id(),
        vocabulary_digest: vocabulary_digest.as_str().to_string(),
        alphabet_digest: alphabet_digest.as_str().to_string(),
        search_policy_digest: search_policy_digest.as_str().to_string(),
        total_expansions: expansion_count,
        total_candidates_generated,
        total_vocabulary_hits,
        total_duplicates_suppressed,
        frontier_high_water: frontier.high_water(),
        termination_reason,
    };
    let graph = build_graph(expansions, &all_nodes, metadata);

    Ok(SearchResult {
        goal_node,
        graph,
        nodes: all_nodes,
    })
}

fn build_graph(
    expansions: Vec<ExpandEvent>,
    nodes: &[SearchNode],
    metadata: SearchGraphMetadata,
) -> SearchGraph {
    let expansion_index: BTreeMap<u64, u64> = expansions
        .iter()
        .map(|e| (e.node_id, e.expansion_order))
        .collect();
    let goal_id = match metadata.termination_reason {
        TerminationReason::GoalReached { node_id } => Some(node_id),
        TerminationReason::FrontierExhausted | TerminationReason::ExpansionBudgetExceeded => None,
    };

    // Nodes are created with ascending ids, so this is already sorted.
    let node_summaries = nodes
        .iter()
        .map(|n| NodeSummary {
            node_id: n.node_id,
            parent_id: n.parent_id,
            word: n.word.as_str().to_string(),
            depth: n.depth,
            is_goal: goal_id == Some(n.node_id),
            expansion_order: expansion_index.get(&n.node_id).copied(),
        })
        .collect();

    SearchGraph {
        expansions,
        node_summaries,
        metadata,
    }
}

/// Walk parent links from `node_id` back to the root.
///
/// Returns words in root-to-node order, or an empty `Vec` if `node_id` is
/// not in `nodes`.
#[must_use]
pub fn reconstruct_path(nodes: &[SearchNode], node_id: u64) -> Vec<Word> {
    let lookup = |id: u64| usize::try_from(id).ok().and_then(|i| nodes.get(i));

    let mut path = Vec::new();
    let mut cursor = lookup(node_id);
    while let Some(node) = cursor {
        path.push(node.word.clone());
        cursor = node.parent_id.and_then(lookup);
        if path.len() > nodes.len() {
            // Parent links form a cycle; `nodes` was not produced by `search`.
            return Vec::new();
        }
    }
    path.reverse();
    path
}

//! `SearchGraph`: expansion-event audit log.
//!
//! The normative decision surface is the ordered list of `ExpandEvent`
//! entries. Node summaries are a derived index for path reconstruction.

use ladder_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ladder_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// The complete search audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraph {
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEvent>,
    /// Derived node index sorted by `node_id` ascending.
    pub node_summaries: Vec<NodeSummary>,
    /// Aggregate metadata with snapshot bindings.
    pub metadata: SearchGraphMetadata,
}

/// A single dequeue + candidate-expansion event.
///
/// The goal node is dequeued but never expanded, so it has no event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of dequeues.
    pub expansion_order: u64,
    /// The node being expanded.
    pub node_id: u64,
    pub word: String,
    pub depth: u32,
    /// Candidates that were vocabulary members, in enumeration order.
    pub candidates: Vec<CandidateRecord>,
}

/// A vocabulary-member candidate with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Index in the neighbor source's enumeration.
    pub index: u64,
    pub word: String,
    pub outcome: CandidateOutcome,
}

/// Outcome of processing a candidate during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// Enqueued as a new node.
    Enqueued { to_node: u64 },
    /// Word already enqueued earlier (first-seen-wins).
    DuplicateSuppressed,
    /// Child would exceed `max_depth`.
    SkippedByDepthLimit,
}

/// Derived node summary for path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub word: String,
    pub depth: u32,
    pub is_goal: bool,
    pub expansion_order: Option<u64>,
}

/// Aggregate metadata with snapshot bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphMetadata {
    // Snapshot bindings
    pub start: String,
    pub goal: String,
    pub neighbor_source: String,
    pub vocabulary_digest: String,
    pub alphabet_digest: String,
    pub search_policy_digest: String,

    // Counters
    pub total_expansions: u64,
    pub total_candidates_generated: u64,
    pub total_vocabulary_hits: u64,
    pub total_duplicates_suppressed: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The goal word was dequeued.
    GoalReached { node_id: u64 },
    /// Queue emptied without reaching the goal.
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    /// Stable snake-case tag used in JSON and logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraph {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
        })
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "candidates": e.candidates.iter().map(candidate_record_to_json).collect::<Vec<_>>(),
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "node_id": e.node_id,
        "word": e.word,
    })
}

fn candidate_record_to_json(r: &CandidateRecord) -> serde_json::Value {
    serde_json::json!({
        "index": r.index,
        "outcome": outcome_to_json(r.outcome),
        "word": r.word,
    })
}

fn outcome_to_json(o: CandidateOutcome) -> serde_json::Value {
    match o {
        CandidateOutcome::Enqueued { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "enqueued"})
        }
        CandidateOutcome::DuplicateSuppressed => {
            serde_json::json!({"type": "duplicate_suppressed"})
        }
        CandidateOutcome::SkippedByDepthLimit => {
            serde_json::json!({"type": "skipped_by_depth_limit"})
        }
    }
}

fn node_summary_to_json(n: &NodeSummary) -> serde_json::Value {
    serde_json::json!({
        "depth": n.depth,
        "expansion_order": n.expansion_order,
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
        "word": n.word,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "alphabet_digest": m.alphabet_digest,
        "frontier_high_water": m.frontier_high_water,
        "goal": m.goal,
        "neighbor_source": m.neighbor_source,
        "search_policy_digest": m.search_policy_digest,
        "start": m.start,
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_candidates_generated": m.total_candidates_generated,
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
        "total_vocabulary_hits": m.total_vocabulary_hits,
        "vocabulary_digest": m.vocabulary_digest,
    })
}

fn termination_reason_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.as_str()})
        }
        TerminationReason::FrontierExhausted | TerminationReason::ExpansionBudgetExceeded => {
            serde_json::json!({"type": r.as_str()})
        }
    }
}

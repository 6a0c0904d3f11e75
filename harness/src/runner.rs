//! Harness runner: runs one query against a world and packages the result.
//!
//! # Pipeline
//!
//! ```text
//! world.vocabulary() + world.alphabet()
//!   → policy.validate()
//!   → search() → SearchGraph
//!   → canonical bytes for vocabulary, alphabet, policy, graph, ladder
//!   → build_bundle()
//! ```
//!
//! Query rejections (missing start/goal, length mismatch) are not run
//! errors: they are recorded in `ladder.json` with status `invalid_input`
//! and the bundle omits `search_graph.json`.

use ladder_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ladder_search::contract::SubstitutionNeighbors;
use ladder_search::error::SearchError;
use ladder_search::policy::SearchPolicy;
use ladder_search::search::{search, LadderQuery, SearchResult};
use tracing::info;

use crate::bundle::{
    build_bundle, ArtifactBundle, ArtifactInput, BundleBuildError, ALPHABET_ARTIFACT,
    LADDER_ARTIFACT, LADDER_TEXT_ARTIFACT, SEARCH_GRAPH_ARTIFACT, SEARCH_POLICY_ARTIFACT,
    VOCABULARY_ARTIFACT,
};
use crate::contract::LadderWorld;
use crate::render::render_ladder;

/// `"status"` values written to `ladder.json`.
pub const STATUS_FOUND: &str = "found";
pub const STATUS_NOT_FOUND: &str = "not_found";
pub const STATUS_INVALID_INPUT: &str = "invalid_input";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The search policy failed validation.
    InvalidPolicy(SearchError),
    /// The search failed for a reason other than a rejected query.
    SearchFailed(SearchError),
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
    /// Bundle assembly failed.
    BundleFailed(BundleBuildError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy(e) => write!(f, "{e}"),
            Self::SearchFailed(e) => write!(f, "search failed: {e}"),
            Self::CanonFailed { detail } => write!(f, "canonicalization failed: {detail}"),
            Self::BundleFailed(e) => write!(f, "bundle assembly failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPolicy(e) | Self::SearchFailed(e) => Some(e),
            Self::BundleFailed(e) => Some(e),
            Self::CanonFailed { .. } => None,
        }
    }
}

impl From<BundleBuildError> for RunError {
    fn from(e: BundleBuildError) -> Self {
        Self::BundleFailed(e)
    }
}

/// Run `query` against `world` under `policy`, producing a bundle.
///
/// Normative artifacts: `vocabulary.json`, `alphabet.json`,
/// `search_policy.json`, `search_graph.json` (absent for rejected queries)
/// and `ladder.json`.
/// Observational: `ladder.txt`.
///
/// # Errors
///
/// Returns [`RunError::InvalidPolicy`] before searching if `policy` is
/// invalid, and [`RunError`] for serialization or bundle failures.
pub fn run_ladder(
    world: &dyn LadderWorld,
    query: &LadderQuery,
    policy: &SearchPolicy,
) -> Result<ArtifactBundle, RunError> {
    policy.validate().map_err(RunError::InvalidPolicy)?;

    let vocabulary = world.vocabulary();
    let alphabet = world.alphabet();

    let vocabulary_bytes = canon(&vocabulary.to_json_value())?;
    let alphabet_bytes = canon(&alphabet.to_json_value())?;
    let policy_bytes = canon(&policy.to_json_value())?;
    let neighbors = SubstitutionNeighbors::new(alphabet);

    let mut inputs = vec![
        ArtifactInput::normative(VOCABULARY_ARTIFACT, vocabulary_bytes),
        ArtifactInput::normative(ALPHABET_ARTIFACT, alphabet_bytes),
        ArtifactInput::normative(SEARCH_POLICY_ARTIFACT, policy_bytes),
    ];

    let mut ladder_json = serde_json::json!({
        "goal": query.goal,
        "schema_version": "ladder.v1",
        "start": query.start,
        "world_id": world.world_id(),
    });

    let ladder = match search(query, &vocabulary, &neighbors, policy) {
        Ok(result) => {
            let graph_bytes = result.graph.to_canonical_json_bytes().map_err(canon_failed)?;
            let graph_digest = result.graph.digest().map_err(canon_failed)?;
            inputs.push(ArtifactInput::normative(SEARCH_GRAPH_ARTIFACT, graph_bytes));
            record_outcome(&mut ladder_json, &result, graph_digest.as_str());
            result.ladder()
        }
        Err(
            e @ (SearchError::StartNotInVocabulary { .. }
            | SearchError::GoalNotInVocabulary { .. }
            | SearchError::LengthMismatch { .. }),
        ) => {
            ladder_json["status"] = STATUS_INVALID_INPUT.into();
            ladder_json["detail"] = e.to_string().into();
            ladder_json["ladder"] = serde_json::Value::Array(Vec::new());
            Vec::new()
        }
        Err(e) => return Err(RunError::SearchFailed(e)),
    };

    info!(
        world = world.world_id(),
        start = %query.start,
        goal = %query.goal,
        status = ladder_json["status"].as_str().unwrap_or_default(),
        steps = ladder.len().saturating_sub(1),
        "ladder run complete"
    );

    let mut text = render_ladder(&ladder);
    text.push('\n');
    inputs.push(ArtifactInput::normative(LADDER_ARTIFACT, canon(&ladder_json)?));
    inputs.push(ArtifactInput::observational(
        LADDER_TEXT_ARTIFACT,
        text.into_bytes(),
    ));

    Ok(build_bundle(inputs)?)
}

fn record_outcome(ladder_json: &mut serde_json::Value, result: &SearchResult, graph_digest: &str) {
    let ladder = result.ladder();
    let status = if result.is_goal_reached() {
        STATUS_FOUND
    } else {
        STATUS_NOT_FOUND
    };
    ladder_json["status"] = status.into();
    ladder_json["termination_reason"] = result.graph.metadata.termination_reason.as_str().into();
    ladder_json["search_graph_digest"] = graph_digest.into();
    ladder_json["steps"] = (ladder.len().saturating_sub(1) as u64).into();
    ladder_json["ladder"] = ladder.into();
}

fn canon(value: &serde_json::Value) -> Result<Vec<u8>, RunError> {
    canonical_json_bytes(value).map_err(canon_failed)
}

fn canon_failed(e: CanonError) -> RunError {
    RunError::CanonFailed {
        detail: e.to_string(),
    }
}

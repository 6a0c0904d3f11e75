//! In-memory artifact bundle: the output of a harness run.
//!
//! No file I/O in this module. The bundle is a deterministic in-memory
//! representation that can be inspected programmatically.
//!
//! # Normative vs observational artifacts
//!
//! Each artifact is tagged `normative` (participates in bundle digest)
//! or observational (present in the manifest but excluded from digest).
//! `ladder.txt` is observational: it is a rendering of `ladder.json`.
//!
//! The bundle digest is computed over the **digest basis**: a canonical
//! JSON projection of normative artifact hashes only.

use std::collections::{BTreeMap, BTreeSet};

use ladder_kernel::carrier::word::Word;
use ladder_kernel::proof::canon::canonical_json_bytes;
use ladder_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::runner::{STATUS_FOUND, STATUS_INVALID_INPUT, STATUS_NOT_FOUND};

/// Domain for bundle artifact content hashing.
pub const DOMAIN_BUNDLE_ARTIFACT: HashDomain = HashDomain::BundleArtifact;

/// Domain for bundle digest computation.
pub const DOMAIN_BUNDLE_DIGEST: HashDomain = HashDomain::BundleDigest;

pub const VOCABULARY_ARTIFACT: &str = "vocabulary.json";
pub const ALPHABET_ARTIFACT: &str = "alphabet.json";
pub const SEARCH_POLICY_ARTIFACT: &str = "search_policy.json";
pub const SEARCH_GRAPH_ARTIFACT: &str = "search_graph.json";
pub const LADDER_ARTIFACT: &str = "ladder.json";
pub const LADDER_TEXT_ARTIFACT: &str = "ladder.txt";

/// A single artifact in the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleArtifact {
    /// Logical filename (e.g., `"ladder.json"`).
    pub name: String,
    pub content: Vec<u8>,
    /// `canonical_hash(DOMAIN_BUNDLE_ARTIFACT, content)`.
    pub content_hash: ContentHash,
    /// Whether this artifact participates in the bundle digest.
    pub normative: bool,
}

/// The complete artifact bundle from a harness run.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    /// Artifacts indexed by logical name, in sorted order (`BTreeMap`).
    pub artifacts: BTreeMap<String, BundleArtifact>,
    /// Full manifest: canonical JSON listing all artifacts with normative flags.
    pub manifest: Vec<u8>,
    /// Digest basis: canonical JSON listing normative artifact hashes only.
    pub digest_basis: Vec<u8>,
    /// Bundle digest: `canonical_hash(DOMAIN_BUNDLE_DIGEST, digest_basis)`.
    pub digest: ContentHash,
}

impl ArtifactBundle {
    /// Parse a JSON artifact by name.
    ///
    /// Returns `None` if the artifact is absent or not valid JSON.
    #[must_use]
    pub fn json(&self, name: &str) -> Option<serde_json::Value> {
        let artifact = self.artifacts.get(name)?;
        serde_json::from_slice(&artifact.content).ok()
    }
}

/// Error building a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleBuildError {
    /// Canonical JSON serialization failed.
    CanonError { detail: String },
    /// Two inputs share a name.
    DuplicateArtifact { name: String },
}

impl std::fmt::Display for BundleBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CanonError { detail } => write!(f, "bundle canonicalization failed: {detail}"),
            Self::DuplicateArtifact { name } => write!(f, "duplicate artifact name: {name}"),
        }
    }
}

impl std::error::Error for BundleBuildError {}

/// Input for bundle assembly: `(name, content, normative)`.
#[derive(Debug, Clone)]
pub struct ArtifactInput {
    pub name: String,
    pub content: Vec<u8>,
    pub normative: bool,
}

impl ArtifactInput {
    pub fn normative(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
            normative: true,
        }
    }

    pub fn observational(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
            normative: false,
        }
    }
}

/// Build an `ArtifactBundle` from a list of artifact inputs.
///
/// # Errors
///
/// Returns [`BundleBuildError`] on duplicate names or if canonical JSON
/// serialization of the manifest fails.
pub fn build_bundle(inputs: Vec<ArtifactInput>) -> Result<ArtifactBundle, BundleBuildError> {
    let mut artifacts = BTreeMap::new();

    for input in inputs {
        if artifacts.contains_key(&input.name) {
            return Err(BundleBuildError::DuplicateArtifact { name: input.name });
        }
        let content_hash = canonical_hash(DOMAIN_BUNDLE_ARTIFACT, &input.content);
        artifacts.insert(
            input.name.clone(),
            BundleArtifact {
                name: input.name,
                content: input.content,
                content_hash,
                normative: input.normative,
            },
        );
    }

    let manifest = compute_manifest_bytes(&artifacts)
        .map_err(|detail| BundleBuildError::CanonError { detail })?;
    let digest_basis = compute_digest_basis_bytes(&artifacts)
        .map_err(|detail| BundleBuildError::CanonError { detail })?;
    let digest = canonical_hash(DOMAIN_BUNDLE_DIGEST, &digest_basis);

    Ok(ArtifactBundle {
        artifacts,
        manifest,
        digest_basis,
        digest,
    })
}

/// Error from bundle integrity verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleVerifyError {
    /// An artifact's stored `content_hash` does not match recomputed hash.
    ContentHashMismatch {
        artifact: String,
        expected: String,
        actual: String,
    },
    /// Stored `manifest` bytes do not match recomputed manifest.
    ManifestMismatch,
    /// Stored `digest_basis` bytes do not match recomputed normative projection.
    DigestBasisMismatch,
    /// Stored `digest` does not match recomputed hash of `digest_basis`.
    DigestMismatch { expected: String, actual: String },
    /// A normative JSON artifact is not in canonical JSON form.
    ArtifactNotCanonical { artifact: String },
    /// A required artifact is absent.
    ArtifactMissing { artifact: &'static str },
    /// A required field is missing from a JSON artifact.
    FieldMissing {
        artifact: &'static str,
        field: &'static str,
    },
    /// A value declared in one artifact does not match what it is bound to.
    BindingMismatch {
        field: &'static str,
        declared: String,
        recomputed: String,
    },
    /// `ladder.json`'s `status` contradicts how the search terminated.
    StatusMismatch {
        declared: String,
        expected: &'static str,
    },
    /// `ladder.json`'s `ladder` is not the goal node's parent chain.
    LadderMismatch {
        declared: Vec<String>,
        reconstructed: Vec<String>,
    },
    /// The ladder leaves the vocabulary or takes a step that is not a
    /// single substitution.
    InvalidLadder { detail: String },
    /// A JSON artifact is structurally unusable.
    Malformed {
        artifact: &'static str,
        detail: String,
    },
    /// Canonical JSON error during verification.
    CanonError { detail: String },
}

impl std::fmt::Display for BundleVerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContentHashMismatch {
                artifact,
                expected,
                actual,
            } => write!(f, "{artifact}: content hash {actual} != stored {expected}"),
            Self::ManifestMismatch => f.write_str("manifest does not match artifacts"),
            Self::DigestBasisMismatch => f.write_str("digest basis does not match artifacts"),
            Self::DigestMismatch { expected, actual } => {
                write!(f, "bundle digest {actual} != stored {expected}")
            }
            Self::ArtifactNotCanonical { artifact } => {
                write!(f, "{artifact} is not canonical JSON")
            }
            Self::ArtifactMissing { artifact } => write!(f, "{artifact} is missing"),
            Self::FieldMissing { artifact, field } => {
                write!(f, "{artifact} is missing field {field}")
            }
            Self::BindingMismatch {
                field,
                declared,
                recomputed,
            } => write!(f, "{field}: declared {declared}, recomputed {recomputed}"),
            Self::StatusMismatch { declared, expected } => {
                write!(f, "status {declared} contradicts the search graph, expected {expected}")
            }
            Self::LadderMismatch {
                declared,
                reconstructed,
            } => write!(
                f,
                "ladder [{}] is not the graph's goal path [{}]",
                declared.join(", "),
                reconstructed.join(", ")
            ),
            Self::InvalidLadder { detail } => write!(f, "invalid ladder: {detail}"),
            Self::Malformed { artifact, detail } => write!(f, "{artifact} is malformed: {detail}"),
            Self::CanonError { detail } => write!(f, "canonicalization failed: {detail}"),
        }
    }
}

impl std::error::Error for BundleVerifyError {}

/// Verify the internal consistency of a bundle.
///
/// This is a pure integrity check: it does NOT re-run the search.
/// It proves:
///
/// 1. Each artifact's `content_hash` matches its content.
/// 2. `manifest` and `digest_basis` match the projections recomputed from
///    the artifacts.
/// 3. `digest` matches `canonical_hash(DOMAIN_BUNDLE_DIGEST, digest_basis)`.
/// 4. Normative `.json` artifacts are in canonical form.
/// 5. `ladder.json` exists and agrees with `search_graph.json`:
///    `search_graph_digest` is the graph's `SearchGraph`-domain digest,
///    `start`, `goal` and `termination_reason` match the graph metadata,
///    `status` follows the termination, `ladder` is the goal node's parent
///    chain and `steps` is one less than its length. Without a graph the
///    run must be `invalid_input` with an empty ladder.
/// 6. Ladder words are `vocabulary.json` members, consecutive words differ
///    by one substitution, and the ladder runs from `start` to `goal`.
/// 7. If `search_graph.json` exists, its `vocabulary_digest`,
///    `alphabet_digest` and `search_policy_digest` metadata match
///    `vocabulary.json`, `alphabet.json` and `search_policy.json`.
///
/// # Errors
///
/// Returns the first [`BundleVerifyError`] encountered.
pub fn verify_bundle(bundle: &ArtifactBundle) -> Result<(), BundleVerifyError> {
    for artifact in bundle.artifacts.values() {
        let recomputed = canonical_hash(DOMAIN_BUNDLE_ARTIFACT, &artifact.content);
        if recomputed != artifact.content_hash {
            return Err(BundleVerifyError::ContentHashMismatch {
                artifact: artifact.name.clone(),
                expected: artifact.content_hash.as_str().to_string(),
                actual: recomputed.as_str().to_string(),
            });
        }
    }

    let expected_manifest = compute_manifest_bytes(&bundle.artifacts)
        .map_err(|detail| BundleVerifyError::CanonError { detail })?;
    if expected_manifest != bundle.manifest {
        return Err(BundleVerifyError::ManifestMismatch);
    }

    let expected_basis = compute_digest_basis_bytes(&bundle.artifacts)
        .map_err(|detail| BundleVerifyError::CanonError { detail })?;
    if expected_basis != bundle.digest_basis {
        return Err(BundleVerifyError::DigestBasisMismatch);
    }

    let recomputed_digest = canonical_hash(DOMAIN_BUNDLE_DIGEST, &bundle.digest_basis);
    if recomputed_digest != bundle.digest {
        return Err(BundleVerifyError::DigestMismatch {
            expected: bundle.digest.as_str().to_string(),
            actual: recomputed_digest.as_str().to_string(),
        });
    }

    for artifact in bundle.artifacts.values() {
        let is_json = std::path::Path::new(&artifact.name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if artifact.normative && is_json && !is_canonical_json(&artifact.content) {
            return Err(BundleVerifyError::ArtifactNotCanonical {
                artifact: artifact.name.clone(),
            });
        }
    }

    verify_ladder_graph_binding(bundle)?;
    verify_graph_snapshot_bindings(bundle)?;

    Ok(())
}

fn verify_ladder_graph_binding(bundle: &ArtifactBundle) -> Result<(), BundleVerifyError> {
    let ladder = bundle
        .json(LADDER_ARTIFACT)
        .ok_or(BundleVerifyError::ArtifactMissing {
            artifact: LADDER_ARTIFACT,
        })?;
    let status = ladder_field(&ladder, "status")?;
    let words = declared_ladder(&ladder)?;

    let Some(graph_artifact) = bundle.artifacts.get(SEARCH_GRAPH_ARTIFACT) else {
        if ladder.get("search_graph_digest").is_some() {
            return Err(BundleVerifyError::ArtifactMissing {
                artifact: SEARCH_GRAPH_ARTIFACT,
            });
        }
        return expect_outcome(status, STATUS_INVALID_INPUT, &words, &[]);
    };

    let declared = ladder_field(&ladder, "search_graph_digest")?;
    let recomputed = canonical_hash(HashDomain::SearchGraph, &graph_artifact.content);
    if declared != recomputed.as_str() {
        return Err(BundleVerifyError::BindingMismatch {
            field: "search_graph_digest",
            declared: declared.to_string(),
            recomputed: recomputed.as_str().to_string(),
        });
    }

    let graph: serde_json::Value =
        serde_json::from_slice(&graph_artifact.content).map_err(|e| {
            BundleVerifyError::Malformed {
                artifact: SEARCH_GRAPH_ARTIFACT,
                detail: e.to_string(),
            }
        })?;
    let metadata = &graph["metadata"];
    let termination = metadata["termination_reason"]["type"]
        .as_str()
        .ok_or(BundleVerifyError::FieldMissing {
            artifact: SEARCH_GRAPH_ARTIFACT,
            field: "termination_reason",
        })?;

    for (field, recorded) in [
        ("start", metadata["start"].as_str()),
        ("goal", metadata["goal"].as_str()),
        ("termination_reason", Some(termination)),
    ] {
        let declared = ladder_field(&ladder, field)?;
        let recorded = recorded.ok_or(BundleVerifyError::FieldMissing {
            artifact: SEARCH_GRAPH_ARTIFACT,
            field,
        })?;
        if declared != recorded {
            return Err(BundleVerifyError::BindingMismatch {
                field,
                declared: declared.to_string(),
                recomputed: recorded.to_string(),
            });
        }
    }

    let path = goal_path(&graph)?;
    let expected_status = match (termination, path.is_empty()) {
        ("goal_reached", false) => STATUS_FOUND,
        ("goal_reached", true) => {
            return Err(BundleVerifyError::Malformed {
                artifact: SEARCH_GRAPH_ARTIFACT,
                detail: "goal_reached without a goal node".into(),
            });
        }
        (_, true) => STATUS_NOT_FOUND,
        (other, false) => {
            return Err(BundleVerifyError::Malformed {
                artifact: SEARCH_GRAPH_ARTIFACT,
                detail: format!("goal node marked after {other}"),
            });
        }
    };
    expect_outcome(status, expected_status, &words, &path)?;

    let steps = ladder["steps"]
        .as_u64()
        .ok_or(BundleVerifyError::FieldMissing {
            artifact: LADDER_ARTIFACT,
            field: "steps",
        })?;
    let expected_steps = words.len().saturating_sub(1) as u64;
    if steps != expected_steps {
        return Err(BundleVerifyError::BindingMismatch {
            field: "steps",
            declared: steps.to_string(),
            recomputed: expected_steps.to_string(),
        });
    }

    verify_ladder_words(bundle, &ladder, &words)
}

fn ladder_field<'a>(
    ladder: &'a serde_json::Value,
    field: &'static str,
) -> Result<&'a str, BundleVerifyError> {
    ladder[field].as_str().ok_or(BundleVerifyError::FieldMissing {
        artifact: LADDER_ARTIFACT,
        field,
    })
}

fn declared_ladder(ladder: &serde_json::Value) -> Result<Vec<String>, BundleVerifyError> {
    ladder["ladder"]
        .as_array()
        .and_then(|words| {
            words
                .iter()
                .map(|w| w.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        })
        .ok_or(BundleVerifyError::FieldMissing {
            artifact: LADDER_ARTIFACT,
            field: "ladder",
        })
}

fn expect_outcome(
    status: &str,
    expected: &'static str,
    declared: &[String],
    reconstructed: &[String],
) -> Result<(), BundleVerifyError> {
    if status != expected {
        return Err(BundleVerifyError::StatusMismatch {
            declared: status.to_string(),
            expected,
        });
    }
    if declared != reconstructed {
        return Err(BundleVerifyError::LadderMismatch {
            declared: declared.to_vec(),
            reconstructed: reconstructed.to_vec(),
        });
    }
    Ok(())
}

/// Follow `parent_id` links from the `is_goal` node summary to the root.
///
/// Returns an empty `Vec` if no node is marked as the goal.
fn goal_path(graph: &serde_json::Value) -> Result<Vec<String>, BundleVerifyError> {
    let malformed = |detail: String| BundleVerifyError::Malformed {
        artifact: SEARCH_GRAPH_ARTIFACT,
        detail,
    };
    let summaries = graph["node_summaries"]
        .as_array()
        .ok_or(BundleVerifyError::FieldMissing {
            artifact: SEARCH_GRAPH_ARTIFACT,
            field: "node_summaries",
        })?;
    let by_id: BTreeMap<u64, &serde_json::Value> = summaries
        .iter()
        .filter_map(|n| Some((n["node_id"].as_u64()?, n)))
        .collect();

    let mut goals = summaries.iter().filter(|n| n["is_goal"] == true);
    let Some(goal) = goals.next() else {
        return Ok(Vec::new());
    };
    if goals.next().is_some() {
        return Err(malformed("more than one goal node".into()));
    }

    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(node) = cursor {
        let word = node["word"]
            .as_str()
            .ok_or_else(|| malformed("node summary without a word".into()))?;
        path.push(word.to_string());
        if path.len() > summaries.len() {
            return Err(malformed("parent links form a cycle".into()));
        }
        cursor = match node["parent_id"].as_u64() {
            Some(id) => Some(
                *by_id
                    .get(&id)
                    .ok_or_else(|| malformed(format!("unknown parent node {id}")))?,
            ),
            None => None,
        };
    }
    path.reverse();
    Ok(path)
}

fn verify_ladder_words(
    bundle: &ArtifactBundle,
    ladder: &serde_json::Value,
    words: &[String],
) -> Result<(), BundleVerifyError> {
    let (Some(first), Some(last)) = (words.first(), words.last()) else {
        return Ok(());
    };
    if first != ladder_field(ladder, "start")? || last != ladder_field(ladder, "goal")? {
        return Err(BundleVerifyError::InvalidLadder {
            detail: format!("{first} .. {last} does not join start and goal"),
        });
    }

    let vocabulary = bundle
        .json(VOCABULARY_ARTIFACT)
        .ok_or(BundleVerifyError::ArtifactMissing {
            artifact: VOCABULARY_ARTIFACT,
        })?;
    let members: BTreeSet<&str> = vocabulary
        .as_array()
        .ok_or_else(|| BundleVerifyError::Malformed {
            artifact: VOCABULARY_ARTIFACT,
            detail: "expected an array of words".into(),
        })?
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();

    if let Some(outsider) = words.iter().find(|w| !members.contains(w.as_str())) {
        return Err(BundleVerifyError::InvalidLadder {
            detail: format!("{outsider} is not in the vocabulary"),
        });
    }
    for pair in words.windows(2) {
        if !Word::new(&pair[0]).differs_by_one(&Word::new(&pair[1])) {
            return Err(BundleVerifyError::InvalidLadder {
                detail: format!("{} -> {} is not a single substitution", pair[0], pair[1]),
            });
        }
    }
    Ok(())
}

fn verify_graph_snapshot_bindings(bundle: &ArtifactBundle) -> Result<(), BundleVerifyError> {
    let Some(graph) = bundle.json(SEARCH_GRAPH_ARTIFACT) else {
        return Ok(());
    };
    let metadata = &graph["metadata"];

    for (field, artifact, domain) in [
        ("vocabulary_digest", VOCABULARY_ARTIFACT, HashDomain::Vocabulary),
        ("alphabet_digest", ALPHABET_ARTIFACT, HashDomain::Alphabet),
        ("search_policy_digest", SEARCH_POLICY_ARTIFACT, HashDomain::SearchPolicy),
    ] {
        let declared = metadata[field]
            .as_str()
            .ok_or(BundleVerifyError::FieldMissing {
                artifact: SEARCH_GRAPH_ARTIFACT,
                field,
            })?;
        let source = bundle
            .artifacts
            .get(artifact)
            .ok_or(BundleVerifyError::ArtifactMissing { artifact })?;
        let recomputed = canonical_hash(domain, &source.content);
        if declared != recomputed.as_str() {
            return Err(BundleVerifyError::BindingMismatch {
                field,
                declared: declared.to_string(),
                recomputed: recomputed.as_str().to_string(),
            });
        }
    }
    Ok(())
}

fn compute_manifest_bytes(artifacts: &BTreeMap<String, BundleArtifact>) -> Result<Vec<u8>, String> {
    let entries: Vec<serde_json::Value> = artifacts
        .values()
        .map(|a| {
            serde_json::json!({
                "content_hash": a.content_hash.as_str(),
                "name": a.name,
                "normative": a.normative,
            })
        })
        .collect();

    canonical_json_bytes(&serde_json::json!({
        "artifacts": entries,
        "schema_version": "ladder_bundle.v1",
    }))
    .map_err(|e| e.to_string())
}

fn compute_digest_basis_bytes(
    artifacts: &BTreeMap<String, BundleArtifact>,
) -> Result<Vec<u8>, String> {
    let entries: Vec<serde_json::Value> = artifacts
        .values()
        .filter(|a| a.normative)
        .map(|a| {
            serde_json::json!({
                "content_hash": a.content_hash.as_str(),
                "name": a.name,
            })
        })
        .collect();

    canonical_json_bytes(&serde_json::json!({
        "artifacts": entries,
        "schema_version": "ladder_bundle_digest_basis.v1",
    }))
    .map_err(|e| e.to_string())
}

/// Parse → re-canonicalize → compare.
fn is_canonical_json(bytes: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|v| canonical_json_bytes(&v).ok())
        .is_some_and(|recanonized| recanonized == bytes)
}

//! Shared test helpers for mutating and rebuilding artifact bundles.
//!
//! These helpers keep artifact hashes, manifest and digest consistent after a
//! mutation, so a negative test trips the binding check it targets instead of
//! a content-hash mismatch.

use ladder_harness::bundle::{
    build_bundle, ArtifactBundle, ArtifactInput, LADDER_ARTIFACT, SEARCH_GRAPH_ARTIFACT,
};
use ladder_kernel::proof::canon::canonical_json_bytes;
use ladder_kernel::proof::hash::{canonical_hash, HashDomain};

/// Rebuild `bundle` with the JSON artifact `name` replaced by `modify`'s
/// output. Every other artifact is carried over byte-for-byte.
///
/// # Panics
///
/// Panics if `name` is absent, not JSON, or fails to canonicalize.
pub fn rebuild_with_modified_json(
    bundle: &ArtifactBundle,
    name: &str,
    modify: impl FnOnce(&mut serde_json::Value),
) -> ArtifactBundle {
    let mut json = bundle.json(name).unwrap();
    modify(&mut json);
    let bytes = canonical_json_bytes(&json).unwrap();
    rebuild(bundle, |n| (n == name).then(|| bytes.clone()))
}

/// Modify `search_graph.json` and re-point `ladder.json` at the new graph,
/// so only the checks downstream of the graph digest can fail.
///
/// # Panics
///
/// Panics if the bundle has no search graph or ladder artifact.
pub fn rebuild_with_modified_graph(
    bundle: &ArtifactBundle,
    modify: impl FnOnce(&mut serde_json::Value),
) -> ArtifactBundle {
    let mut graph = bundle.json(SEARCH_GRAPH_ARTIFACT).unwrap();
    modify(&mut graph);
    let graph_bytes = canonical_json_bytes(&graph).unwrap();
    let graph_digest = canonical_hash(HashDomain::SearchGraph, &graph_bytes);

    let mut ladder = bundle.json(LADDER_ARTIFACT).unwrap();
    ladder["search_graph_digest"] = graph_digest.as_str().into();
    let ladder_bytes = canonical_json_bytes(&ladder).unwrap();

    rebuild(bundle, |n| match n {
        SEARCH_GRAPH_ARTIFACT => Some(graph_bytes.clone()),
        LADDER_ARTIFACT => Some(ladder_bytes.clone()),
        _ => None,
    })
}

/// Rebuild `bundle` without the artifact `name`.
///
/// # Panics
///
/// Panics if the remaining artifacts fail to build.
pub fn rebuild_without_artifact(bundle: &ArtifactBundle, name: &str) -> ArtifactBundle {
    let inputs = bundle
        .artifacts
        .values()
        .filter(|a| a.name != name)
        .map(|a| ArtifactInput {
            name: a.name.clone(),
            content: a.content.clone(),
            normative: a.normative,
        })
        .collect();
    build_bundle(inputs).unwrap()
}

fn rebuild(
    bundle: &ArtifactBundle,
    replacement: impl Fn(&str) -> Option<Vec<u8>>,
) -> ArtifactBundle {
    let inputs = bundle
        .artifacts
        .values()
        .map(|a| ArtifactInput {
            name: a.name.clone(),
            content: replacement(&a.name).unwrap_or_else(|| a.content.clone()),
            normative: a.normative,
        })
        .collect();
    build_bundle(inputs).unwrap()
}

//! In-process determinism of search graphs and bundles.

use ladder_harness::contract::LadderWorld;
use ladder_harness::runner::run_ladder;
use ladder_harness::worlds::samples::{SAMPLE_ANIMALS, SAMPLE_FRUIT};
use ladder_kernel::carrier::alphabet::Alphabet;
use ladder_kernel::carrier::vocabulary::Vocabulary;
use ladder_search::contract::SubstitutionNeighbors;
use ladder_search::graph::TerminationReason;
use ladder_search::policy::SearchPolicy;
use ladder_search::search::{search, LadderQuery};

fn graph_bytes(vocabulary: &Vocabulary, query: &LadderQuery) -> Vec<u8> {
    let neighbors = SubstitutionNeighbors::new(Alphabet::turkish());
    search(query, vocabulary, &neighbors, &SearchPolicy::default())
        .unwrap()
        .graph
        .to_canonical_json_bytes()
        .unwrap()
}

#[test]
fn graph_bytes_identical_across_runs() {
    let vocabulary = SAMPLE_ANIMALS.vocabulary();
    let query = LadderQuery::new("kedi", "kuçu");
    let first = graph_bytes(&vocabulary, &query);
    for _ in 0..10 {
        assert_eq!(first, graph_bytes(&vocabulary, &query));
    }
}

#[test]
fn insertion_order_does_not_matter() {
    let mut words = SAMPLE_FRUIT.words();
    let forward: Vocabulary = words.iter().collect();
    words.reverse();
    let backward: Vocabulary = words.iter().collect();

    let query = LadderQuery::new("elma", "arka");
    assert_eq!(graph_bytes(&forward, &query), graph_bytes(&backward, &query));
}

#[test]
fn bundle_digest_stable_across_runs() {
    let query = LadderQuery::new("masa", "şaka");
    let first = run_ladder(&SAMPLE_ANIMALS, &query, &SearchPolicy::default()).unwrap();
    let second = run_ladder(&SAMPLE_ANIMALS, &query, &SearchPolicy::default()).unwrap();
    assert_eq!(first.digest, second.digest);
    assert_eq!(first.digest_basis, second.digest_basis);
}

#[test]
fn policy_change_moves_bundle_digest() {
    let query = LadderQuery::new("kedi", "kuçu");
    let unbounded = run_ladder(&SAMPLE_ANIMALS, &query, &SearchPolicy::default()).unwrap();
    let budgeted = run_ladder(
        &SAMPLE_ANIMALS,
        &query,
        &SearchPolicy {
            max_expansions: 3,
            ..SearchPolicy::default()
        },
    )
    .unwrap();
    assert_ne!(unbounded.digest, budgeted.digest);

    let graph = budgeted.json("search_graph.json").unwrap();
    assert_eq!(
        graph["metadata"]["termination_reason"]["type"],
        TerminationReason::ExpansionBudgetExceeded.as_str()
    );
}

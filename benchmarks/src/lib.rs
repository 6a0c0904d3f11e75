//! Shared helpers for ladder benchmark suites.
//!
//! Regimes are generated deterministically: word selection is driven by
//! `canonical_hash(HashDomain::BenchInput, word)` rather than an RNG, so
//! every machine benchmarks the same vocabularies.

use ladder_harness::contract::LadderWorld;
use ladder_kernel::carrier::alphabet::Alphabet;
use ladder_kernel::proof::hash::{canonical_hash, HashDomain};
use ladder_search::policy::SearchPolicy;
use ladder_search::search::LadderQuery;

/// A generated vocabulary over an explicit alphabet.
#[derive(Debug, Clone)]
pub struct GeneratedWorld {
    pub id: String,
    pub words: Vec<String>,
    pub alphabet: Alphabet,
}

impl LadderWorld for GeneratedWorld {
    fn world_id(&self) -> &str {
        &self.id
    }

    fn words(&self) -> Vec<String> {
        self.words.clone()
    }

    fn alphabet(&self) -> Alphabet {
        self.alphabet.clone()
    }
}

/// A world plus the query and policy to benchmark against it.
#[derive(Debug, Clone)]
pub struct Regime {
    pub name: &'static str,
    pub world: GeneratedWorld,
    pub query: LadderQuery,
    pub policy: SearchPolicy,
}

/// Every word of `len` characters over `symbols`, in lexicographic
/// symbol order.
#[must_use]
pub fn all_words(symbols: &[char], len: usize) -> Vec<String> {
    let mut words = vec![String::new()];
    for _ in 0..len {
        words = words
            .iter()
            .flat_map(|prefix| {
                symbols.iter().map(move |&c| {
                    let mut w = prefix.clone();
                    w.push(c);
                    w
                })
            })
            .collect();
    }
    words
}

/// Keep roughly `per_256 / 256` of `words`, chosen by content hash.
#[must_use]
pub fn hash_sample(words: Vec<String>, per_256: u8) -> Vec<String> {
    words
        .into_iter()
        .filter(|w| {
            let hash = canonical_hash(HashDomain::BenchInput, w.as_bytes());
            let first = hash.hex_digest().get(..2).unwrap_or("ff");
            u8::from_str_radix(first, 16).unwrap_or(u8::MAX) < per_256
        })
        .collect()
}

/// Every 4-letter word over `a..=f`: heavy duplicate suppression, short
/// ladders.
#[must_use]
pub fn regime_dense_lattice() -> Regime {
    let symbols = ['a', 'b', 'c', 'd', 'e', 'f'];
    Regime {
        name: "dense_lattice",
        world: GeneratedWorld {
            id: "dense_lattice".into(),
            words: all_words(&symbols, 4),
            alphabet: Alphabet::from_chars(symbols),
        },
        query: LadderQuery::new("aaaa", "ffff"),
        policy: SearchPolicy::default(),
    }
}

/// A hash-sampled eighth of all 5-letter words over the Turkish-only
/// letters plus `a..=d`: sparse components, most queries exhaust.
#[must_use]
pub fn regime_sparse_turkish() -> Regime {
    let symbols = ['a', 'b', 'c', 'd', 'ç', 'ğ', 'ı', 'ö', 'ş', 'ü'];
    let mut words = hash_sample(all_words(&symbols, 5), 32);
    words.push("aaaaa".into());
    words.push("üüüüü".into());
    Regime {
        name: "sparse_turkish",
        world: GeneratedWorld {
            id: "sparse_turkish".into(),
            words,
            alphabet: Alphabet::turkish(),
        },
        query: LadderQuery::new("aaaaa", "üüüüü"),
        policy: SearchPolicy::default(),
    }
}

/// The dense lattice with a small expansion budget.
#[must_use]
pub fn regime_budget_limited() -> Regime {
    Regime {
        name: "budget_limited",
        policy: SearchPolicy {
            max_expansions: 64,
            ..SearchPolicy::default()
        },
        ..regime_dense_lattice()
    }
}

#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_dense_lattice(),
        regime_sparse_turkish(),
        regime_budget_limited(),
    ]
}

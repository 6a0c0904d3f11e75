//! Sample dictionaries: four small Turkish vocabularies with the queries
//! they are meant to demonstrate.
//!
//! | world                 | demonstrates                               |
//! |-----------------------|--------------------------------------------|
//! | `sample_animals`      | ladders that need `ç`/`ş` substitutions    |
//! | `sample_fruit`        | a found ladder and a disconnected pair     |
//! | `sample_disconnected` | start and goal of different lengths        |
//! | `sample_singleton`    | start equals goal                          |

use ladder_kernel::carrier::alphabet::Alphabet;
use ladder_search::search::LadderQuery;

use crate::contract::LadderWorld;

/// A fixed vocabulary with canned queries over the Turkish alphabet.
#[derive(Debug, Clone, Copy)]
pub struct SampleWorld {
    id: &'static str,
    words: &'static [&'static str],
    queries: &'static [(&'static str, &'static str)],
}

impl LadderWorld for SampleWorld {
    fn world_id(&self) -> &str {
        self.id
    }

    fn words(&self) -> Vec<String> {
        self.words.iter().map(|w| (*w).to_string()).collect()
    }

    fn alphabet(&self) -> Alphabet {
        Alphabet::turkish()
    }

    fn queries(&self) -> Vec<LadderQuery> {
        self.queries
            .iter()
            .map(|(start, goal)| LadderQuery::new(*start, *goal))
            .collect()
    }
}

pub const SAMPLE_ANIMALS: SampleWorld = SampleWorld {
    id: "sample_animals",
    words: &[
        "kedi", "koki", "koçi", "kuçi", "kuçu", "keçi", "kuzu", "kasa", "kara", "masa", "maşa",
        "şaka", "saka", "sana", "mana",
    ],
    queries: &[("kedi", "kuçu"), ("masa", "şaka")],
};

pub const SAMPLE_FRUIT: SampleWorld = SampleWorld {
    id: "sample_fruit",
    words: &[
        "elma", "alma", "arma", "arpa", "arka", "parka", "parça", "pazı", "sazı", "kazı", "kuzu",
        "kuru", "boru", "doru", "dolu",
    ],
    queries: &[("elma", "arka"), ("kuzu", "dolu")],
};

pub const SAMPLE_DISCONNECTED: SampleWorld = SampleWorld {
    id: "sample_disconnected",
    words: &["ev", "at", "top", "gül", "buz"],
    queries: &[("ev", "gül")],
};

pub const SAMPLE_SINGLETON: SampleWorld = SampleWorld {
    id: "sample_singleton",
    words: &["test", "tost", "post"],
    queries: &[("test", "test")],
};

/// All sample worlds in presentation order.
#[must_use]
pub fn all_samples() -> [SampleWorld; 4] {
    [
        SAMPLE_ANIMALS,
        SAMPLE_FRUIT,
        SAMPLE_DISCONNECTED,
        SAMPLE_SINGLETON,
    ]
}

//! World contract: the minimal trait a ladder world must implement.
//!
//! Worlds provide a vocabulary, an alphabet, and optionally a set of
//! canned queries. Worlds may NOT implement hashing, searching, or bundle
//! assembly; those are search/runner concerns.

use ladder_kernel::carrier::alphabet::Alphabet;
use ladder_kernel::carrier::vocabulary::Vocabulary;
use ladder_search::search::LadderQuery;

/// The contract a world must implement to be run by the harness runner.
pub trait LadderWorld {
    /// Unique world identifier (e.g., `"sample_animals"`).
    fn world_id(&self) -> &str;

    /// The words that make up the vocabulary. Duplicates are allowed and
    /// collapse when the vocabulary is built.
    fn words(&self) -> Vec<String>;

    /// Substitution alphabet. Defaults to the characters of the vocabulary.
    fn alphabet(&self) -> Alphabet {
        self.vocabulary().alphabet()
    }

    /// The deduplicated vocabulary.
    fn vocabulary(&self) -> Vocabulary {
        self.words().into_iter().collect()
    }

    /// Queries the world ships with (used by fixtures and demos).
    fn queries(&self) -> Vec<LadderQuery> {
        Vec::new()
    }
}

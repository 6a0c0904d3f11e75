//! `Vocabulary`: the node set of the ladder graph.
//!
//! Uses a `BTreeSet` (not `HashSet`) so iteration, serialization, and
//! therefore digests are independent of insertion order.

use std::collections::BTreeSet;

use crate::carrier::alphabet::Alphabet;
use crate::carrier::word::Word;
use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// A deduplicated set of valid words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: BTreeSet<String>,
}

impl Vocabulary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_string())
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership test for a [`Word`].
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.words.contains(word.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in lexicographic (byte) order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Every distinct character appearing in any word, in code point order.
    ///
    /// This is the smallest alphabet that reaches every vocabulary-internal
    /// neighbor: a substitution producing a character outside it can never
    /// be a vocabulary member.
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        let chars: BTreeSet<char> = self.words.iter().flat_map(|w| w.chars()).collect();
        Alphabet::from_chars(chars)
    }

    /// Sorted JSON array of words.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.words
                .iter()
                .map(|w| serde_json::Value::String(w.clone()))
                .collect(),
        )
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::Vocabulary, &bytes))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

impl<S: AsRef<str>> Extend<S> for Vocabulary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words
            .extend(iter.into_iter().map(|s| s.as_ref().to_string()));
    }
}

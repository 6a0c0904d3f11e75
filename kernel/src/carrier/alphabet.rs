//! Substitution alphabet.
//!
//! The alphabet is the complete set of symbols tried at each position during
//! neighbor enumeration. Order is significant: it fixes candidate order and
//! therefore which of several equally short ladders a search returns.

use std::collections::BTreeSet;

use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Lowercase Latin letters `a..=z`.
const LATIN_LOWERCASE: std::ops::RangeInclusive<char> = 'a'..='z';

/// Turkish letters outside `a..=z`, in the order the sample dictionaries use.
pub const TURKISH_EXTRA: [char; 6] = ['ç', 'ğ', 'ı', 'ö', 'ş', 'ü'];

/// An ordered, duplicate-free list of substitution symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build from any character sequence. Later duplicates are dropped;
    /// first occurrence fixes position.
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut seen = BTreeSet::new();
        let symbols = chars.into_iter().filter(|c| seen.insert(*c)).collect();
        Self { symbols }
    }

    /// `a..=z`.
    #[must_use]
    pub fn latin_lowercase() -> Self {
        Self::from_chars(LATIN_LOWERCASE)
    }

    /// `a..=z` followed by `ç ğ ı ö ş ü` (32 symbols).
    #[must_use]
    pub fn turkish() -> Self {
        Self::latin_lowercase().with_extra(TURKISH_EXTRA)
    }

    /// Append symbols not already present.
    #[must_use]
    pub fn with_extra<I: IntoIterator<Item = char>>(self, extra: I) -> Self {
        Self::from_chars(self.symbols.into_iter().chain(extra))
    }

    /// Symbols in enumeration order.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.symbols.contains(&ch)
    }

    /// The alphabet as a JSON string (symbols concatenated in order).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::String(self.symbols.iter().collect())
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::Alphabet, &bytes))
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}

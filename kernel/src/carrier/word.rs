//! `Word`: an ordered sequence of Unicode scalar values.
//!
//! Length is measured in characters, not bytes, so `"kuçu"` and `"kuzu"`
//! both have length 4 and are one substitution apart.

use std::fmt;

/// A word as a search node.
///
/// Keeps both the character vector (for position-wise substitution) and the
/// rendered `String` (for vocabulary lookup and serialization). The two are
/// always in sync; neither is exposed mutably.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

impl Word {
    /// Build a word from its text.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            chars: text.chars().collect(),
        }
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the word has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The character at `position`, if in range.
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// All characters in order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Replace the character at `position` with `ch`.
    ///
    /// Returns `None` if `position` is out of range or if `ch` equals the
    /// character already there (the result would not be a distinct word).
    #[must_use]
    pub fn substitute(&self, position: usize, ch: char) -> Option<Self> {
        let original = *self.chars.get(position)?;
        if original == ch {
            return None;
        }
        let mut chars = self.chars.clone();
        chars[position] = ch;
        Some(Self {
            text: chars.iter().collect(),
            chars,
        })
    }

    /// Number of positions at which two equal-length words differ.
    ///
    /// Returns `None` when the lengths differ.
    #[must_use]
    pub fn hamming_distance(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }
        Some(
            self.chars
                .iter()
                .zip(other.chars.iter())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// The ladder adjacency relation: same length, exactly one differing position.
    #[must_use]
    pub fn differs_by_one(&self, other: &Self) -> bool {
        self.hamming_distance(other) == Some(1)
    }

    /// Consume the word, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

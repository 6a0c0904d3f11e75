//! Content hashes: `"sha256:<hex>"` over a domain prefix plus payload.
//!
//! **Exactly one place defines canonical hashing.** Every digest in the
//! workspace (vocabulary, policy, search graph, bundle) goes through
//! [`canonical_hash`].

use sha2::{Digest, Sha256};

pub use crate::proof::hash_domain::HashDomain;

/// Algorithm tag written before the colon.
pub const HASH_ALGORITHM: &str = "sha256";

/// A content-addressed hash with algorithm identifier.
///
/// Invariant: the inner string contains a `:` with non-empty text on both
/// sides (enforced by [`ContentHash::parse`] and by construction in
/// [`canonical_hash`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` for a missing colon, empty algorithm, or empty digest.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain bytes || data`, rendered as `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    ContentHash {
        full: format!("{HASH_ALGORITHM}:{digest}"),
        colon: HASH_ALGORITHM.len(),
    }
}

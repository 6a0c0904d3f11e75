//! Search policy types.

use ladder_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ladder_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::error::SearchError;

/// Search budgets.
///
/// The default is unbounded, which makes [`crate::search::search`] a complete
/// BFS: it returns a shortest ladder whenever one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on dequeued-and-expanded nodes.
    pub max_expansions: u64,
    /// Depth cutoff; the start word is depth 0.
    pub max_depth: u32,
}

impl SearchPolicy {
    /// Unbounded policy (same as `Default`).
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_expansions: u64::MAX,
            max_depth: u32::MAX,
        }
    }

    /// Validate that the policy can run at all.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
        })
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::SearchPolicy, &bytes))
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::unbounded()
    }
}

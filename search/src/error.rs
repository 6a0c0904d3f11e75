//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, budget exhausted) are expressed via
//! [`crate::graph::TerminationReason`] and always produce a `SearchGraph`.

/// Typed failure for pre-flight search validation.
///
/// No `SearchGraph` is produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy cannot run a search (e.g. a zero expansion budget).
    InvalidPolicy { detail: String },
    /// The start word is not a vocabulary member.
    StartNotInVocabulary { word: String },
    /// The goal word is not a vocabulary member.
    GoalNotInVocabulary { word: String },
    /// Start and goal have different character counts.
    LengthMismatch { start_len: usize, goal_len: usize },
    /// A snapshot digest (vocabulary or policy) could not be computed.
    DigestFailed { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::StartNotInVocabulary { word } => {
                write!(f, "start word {word:?} is not in the vocabulary")
            }
            Self::GoalNotInVocabulary { word } => {
                write!(f, "goal word {word:?} is not in the vocabulary")
            }
            Self::LengthMismatch {
                start_len,
                goal_len,
            } => write!(
                f,
                "start has {start_len} characters but goal has {goal_len}"
            ),
            Self::DigestFailed { detail } => write!(f, "snapshot digest failed: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}

//! Human-readable ladder text.

/// Text shown for an empty ladder.
pub const NOT_FOUND: &str = "not found";

/// Separator between consecutive words.
pub const STEP_SEPARATOR: &str = " -> ";

/// `"w1 -> w2 -> ... -> wN"`, or [`NOT_FOUND`] for an empty ladder.
#[must_use]
pub fn render_ladder<S: AsRef<str>>(ladder: &[S]) -> String {
    if ladder.is_empty() {
        return NOT_FOUND.to_string();
    }
    ladder
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(STEP_SEPARATOR)
}

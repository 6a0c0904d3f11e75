//! Neighbor enumeration contract.

use ladder_kernel::carrier::alphabet::Alphabet;
use ladder_kernel::carrier::word::Word;

/// Trait for candidate-word enumeration.
///
/// # Contract
///
/// - Every returned word has the same length as the input and differs from
///   it in exactly one position.
/// - Enumeration must be deterministic: same word → same candidates in the
///   same order. Candidate order decides which of several equally short
///   ladders the search returns.
/// - Candidates need not be vocabulary members; the search filters them.
pub trait NeighborSource {
    /// Identifier recorded in the search graph metadata.
    fn source_id(&self) -> String;

    /// Symbols tried at each position. Its digest is bound into the graph.
    fn alphabet(&self) -> &Alphabet;

    /// Enumerate candidate neighbors of `word`.
    fn neighbors(&self, word: &Word) -> Vec<Word>;
}

/// Single-character substitution over an explicit alphabet.
///
/// Positions are visited left to right; at each position symbols are tried
/// in alphabet order, skipping the symbol already at that position.
#[derive(Debug, Clone)]
pub struct SubstitutionNeighbors {
    alphabet: Alphabet,
}

impl SubstitutionNeighbors {
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }
}

impl NeighborSource for SubstitutionNeighbors {
    fn source_id(&self) -> String {
        let symbols: String = self.alphabet.symbols().iter().collect();
        format!("substitution:{symbols}")
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn neighbors(&self, word: &Word) -> Vec<Word> {
        let mut out = Vec::with_capacity(word.len() * self.alphabet.len());
        for position in 0..word.len() {
            for &symbol in self.alphabet.symbols() {
                if let Some(candidate) = word.substitute(position, symbol) {
                    out.push(candidate);
                }
            }
        }
        out
    }
}

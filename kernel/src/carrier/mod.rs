//! Carrier module: the values a ladder search moves between.
//!
//! A [`word::Word`] is a node, a [`vocabulary::Vocabulary`] is the node set,
//! and an [`alphabet::Alphabet`] bounds which single-character substitutions
//! are attempted when enumerating edges.

pub mod alphabet;
pub mod vocabulary;
pub mod word;

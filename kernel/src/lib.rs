//! Ladder Kernel: the data model and canonical hashing for word-ladder search.
//!
//! # API Surface
//!
//! - [`carrier::word::Word`] -- a fixed-length sequence of characters
//! - [`carrier::alphabet::Alphabet`] -- the substitution symbols a search may try
//! - [`carrier::vocabulary::Vocabulary`] -- the set of words that are valid graph nodes
//! - [`proof::hash::canonical_hash`] -- domain-separated content hashing
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `proof`
//!
//! `carrier` uses `proof` only for digests of vocabularies and alphabets;
//! `proof` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod proof;

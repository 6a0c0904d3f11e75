//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Nothing in this module knows about words; it only turns values into
//! stable bytes and stable digests.

pub mod canon;
pub mod hash;
pub mod hash_domain;

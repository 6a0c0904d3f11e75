//! Ladder Harness: world-level orchestration for the search.
//!
//! The harness runs a query against a world (a named vocabulary plus
//! alphabet) and packages the result as a self-contained artifact bundle.
//!
//! The harness does NOT implement search logic; it delegates to
//! `ladder_search`. Worlds provide domain data only; the harness owns
//! orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bundle;
pub mod contract;
pub mod render;
pub mod runner;
pub mod worlds;

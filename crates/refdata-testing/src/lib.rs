//! Testing infrastructure for refdata integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI command setup
//! - `fixtures`: sample datasets in their upstream wire shape

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

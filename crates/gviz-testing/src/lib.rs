//! Testing infrastructure for gviz tests.
//!
//! This crate provides utilities shared by unit and integration tests:
//! - `TestWorld`: isolated environment for running the `gviz` binary
//! - `assertions`: structural checks for region trees and CLI output
//! - `fixtures`: sample pages and hand-built documents
//! - `oracle`: scripted fit oracles that record what they were asked

pub mod assertions;
pub mod fixtures;
pub mod oracle;
pub mod world;

pub use oracle::ScriptedOracle;
pub use world::TestWorld;

//! Integration test utilities for the ride server
//!
//! Spawns the real axum application on a loopback port and drives it over
//! HTTP with `reqwest`.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

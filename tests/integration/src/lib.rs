//! Integration test utilities for the school server
//!
//! Spawns the full HTTP stack over an in-process account store and
//! drives it with a real HTTP client.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

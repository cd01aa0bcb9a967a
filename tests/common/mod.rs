//! Common test utilities for modfiles integration tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated source tree in a temp directory plus helpers to
//!   run the `modfiles` binary against it
//! - `simulate`: replays a directory visit order against the aggregation
//!   engine without touching the file system

#![allow(dead_code)]

pub mod env;
pub mod traversal;

pub use env::*;
pub use traversal::*;

//! Command handlers
//!
//! Each handler resolves its inputs, runs one use case, and prints either
//! human output or NDJSON events.

pub mod archive;
pub mod generate;

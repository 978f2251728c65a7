//! Structured logging facility for FHIR Match
//!
//! Provides a single initialization point for the `tracing` subscriber:
//! - `init(profile)` for the standard profiles
//! - `init_with_level(level)` for the CLI's `--log-level` flag
//!
//! Initialization is idempotent; reviewers themselves are pure and never
//! depend on logger state.

pub mod init;

pub use init::{init, init_with_level, Profile};

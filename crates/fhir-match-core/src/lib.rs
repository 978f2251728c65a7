//! FHIR Match Core - semantic compatibility engine for FHIR profiles
//!
//! This crate classifies the compatibility relationship between two
//! StructureDefinitions ("profiles"): does everything profile A permits
//! also satisfy profile B, and vice versa? It provides:
//! - Profile and Element models (read-only comparison inputs)
//! - The six-valued result lattice and its precedence merge
//! - Reviewers for FHIR version, base type, element cardinality, and
//!   extension slots, composed by an aggregate reviewer
//! - Console rendering of review trees
//!
//! Comparison is a pure, synchronous function of its two inputs: no state
//! is retained between calls, and independent comparisons may run
//! concurrently without coordination.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod review;
pub mod reviewers;

// Re-export commonly used types
pub use errors::{MatchError, Result};
pub use model::{CardinalityMax, Element, Profile};
pub use review::{Item, Review, ReviewResult};
pub use reviewers::{AggregateReviewer, Reviewer};

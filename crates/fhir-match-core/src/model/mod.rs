pub mod profile;

pub use profile::{CardinalityMax, Element, Profile};

use thiserror::Error;

/// Result type alias using MatchError
pub type Result<T> = std::result::Result<T, MatchError>;

/// Error taxonomy for FHIR Match operations
///
/// Comparison itself never fails for well-formed input: a missing optional
/// field is data and degrades to an `unknown` result. Errors arise only at
/// the loading boundary, before any reviewer runs.
#[derive(Error, Debug)]
pub enum MatchError {
    /// The path does not point to a JSON file
    #[error("only file paths to JSON StructureDefinitions are supported: {path}")]
    UnsupportedResource { path: String },

    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON
    #[error("{path} is not valid JSON: {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON document does not minimally match the StructureDefinition
    /// shape (precondition violation, reported before reviewers run)
    #[error("resource is not a usable StructureDefinition: {reason}")]
    InvalidResource { reason: String },
}

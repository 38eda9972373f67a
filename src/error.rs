use thiserror::Error;

/// Errors that can occur while converting a wire-format configuration into
/// the canonical model.
///
/// Rule-level sloppiness (a missing outcome, an unknown operator) is handled
/// leniently during conversion and never surfaces here; these are the
/// structural failures the embedding application must fix.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Failed to parse configuration JSON: {0}")]
    JsonParseError(String),

    #[error("A field is missing its id")]
    MissingFieldId,

    #[error("Field id '{id}' is declared more than once")]
    DuplicateFieldId { id: String },

    #[error("Select field '{id}' declares no options")]
    EmptySelectOptions { id: String },
}

/// Errors that can occur while encoding, decoding, or storing a compiled
/// configuration artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact encoding failed: {0}")]
    Encode(String),

    #[error("Artifact decoding failed: {0}")]
    Decode(String),

    #[error("Could not access artifact file '{path}': {message}")]
    Io { path: String, message: String },
}

use thiserror::Error;

/// Errors that can occur when converting an external program format into
/// the canonical `Program` model.
#[derive(Error, Debug, Clone)]
pub enum ProgramConversionError {
    #[error("Failed to parse program JSON: {0}")]
    JsonParseError(String),

    #[error("Step '{step_id}' has an unknown instruction kind: '{kind}'")]
    UnknownInstructionKind { step_id: String, kind: String },

    #[error("Step '{step_id}' has an unknown logical operator: '{operator}'")]
    UnknownOperator { step_id: String, operator: String },

    #[error("I/O point '{address}' has an invalid field: {message}")]
    InvalidIoPoint { address: String, message: String },

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur in the recipe store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not access recipe file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Recipe encoding failed: {0}")]
    Encode(String),

    #[error("Recipe decoding failed: {0}")]
    Decode(String),
}

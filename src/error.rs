//! Error types for dataset construction, trainer setup and input handling.

use thiserror::Error;

/// Errors produced by the library.
///
/// Pure numeric routines (`predict`, `cost`, gradient estimation) never fail;
/// IEEE-754 semantics apply to overflow and division by a tiny step.
#[derive(Debug, Error)]
pub enum Error {
    /// The input and label sequences have different lengths.
    #[error("Length mismatch: {inputs} inputs but {labels} labels")]
    LengthMismatch { inputs: usize, labels: usize },

    #[error("Dataset is empty")]
    EmptyDataset,

    /// A hyperparameter that would make training meaningless.
    #[error("Invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text that could not be parsed as a floating-point number.
    #[error("Invalid input {0:?}: expected a floating-point number")]
    ParseInput(String),
}

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the Lernmatrix.

use thiserror::Error;

/// Lernmatrix error types.
#[derive(Error, Debug)]
pub enum LernmatrixError {
    /// A training pair's output vector has no active entry
    #[error("Invalid label: output vector of pair {pair} has no active entry")]
    InvalidLabel { pair: usize },

    /// Vector length does not match the expected dimension
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    InputDimension { expected: usize, got: usize },

    /// Evaluation invoked with zero test patterns
    #[error("Empty test set: nothing to evaluate")]
    EmptyTestSet,

    /// Training invoked with zero pattern pairs
    #[error("Empty training set")]
    EmptyTrainingSet,

    /// Zero-length pattern vector
    #[error("Empty vector: patterns need at least one entry")]
    EmptyVector,

    /// Entry outside {0, 1}
    #[error("Non-binary value {value} at index {index}")]
    NonBinary { index: usize, value: u8 },

    /// Integer weight or activation left the i64 range
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// Learning rate must be a positive step
    #[error("Invalid learning rate: {0}")]
    InvalidLearningRate(i64),

    /// Recall or evaluation requested before training
    #[error("Lernmatrix has not been trained")]
    Untrained,

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Lernmatrix operations.
pub type Result<T> = std::result::Result<T, LernmatrixError>;

use thiserror::Error;

/// A result type for design optimization errors
pub type Result<T> = std::result::Result<T, EseError>;

/// An error raised when configuring or running the ESE optimizer
#[derive(Error, Debug)]
pub enum EseError {
    /// When the objective criterion name is not recognized
    #[error("unknown objective criterion: {0}")]
    UnknownCriterion(String),
    /// When the design has too few dimensions to be optimized
    #[error("design must have at least 2 dimensions, got {0}")]
    InvalidDimension(usize),
    /// When more exchange candidates are requested than distinct row pairs
    #[error("{requested} exchanges requested but only {available} row pairs available")]
    TooManyExchanges {
        /// Requested number of exchange candidates
        requested: usize,
        /// Number of distinct row pairs in the design
        available: usize,
    },
}

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Fatal precondition violations. Neither variant is retried or recovered
/// internally; both surface directly to the caller at the first offending
/// call (construction or first forward pass).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Unknown activation function tag, rejected at parse time.
    #[error("unknown activation function `{tag}`")]
    Configuration { tag: String },

    /// A vector length disagrees with a shape fixed at construction.
    #[error("{what}: expected length {expected}, got {got}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}

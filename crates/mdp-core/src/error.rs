use thiserror::Error;

pub type MdResult<T> = Result<T, MdError>;

/// Errors shared by all analysis crates.
///
/// Both variants signal data-quality or programming errors; they are raised
/// at the point of detection and are never retried. No operation returns a
/// partial result alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MdError {
    /// Mathematically undefined input (non-positive density or temperature,
    /// zero potential power, isosbestic parameter above one).
    #[error("Domain error: {what}")]
    Domain { what: &'static str },

    /// Too few samples, mismatched series lengths, or a degenerate
    /// (constant-x) regression input.
    #[error("Insufficient data: {what}")]
    InsufficientData { what: &'static str },
}

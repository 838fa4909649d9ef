// THEORY:
// Error types for the analysis API. The taxonomy is deliberately small: the
// only fatal condition is a malformed input buffer, rejected before any pixel
// is touched. A weak detection (too few fruit pixels) is *not* an error —
// the call succeeds and the report carries an advisory instead, because the
// masks and statistics are still valid best-effort output.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Fatal conditions that prevent an analysis from starting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The pixel buffer length does not match `width * height * 4`.
    #[error("invalid pixel buffer: expected {expected} bytes for {width}x{height} RGBA, got {actual}")]
    InvalidBufferLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// One or both image dimensions are zero.
    #[error("invalid image dimensions: {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },

    /// The async worker pool has shut down and can no longer accept tasks.
    #[error("analysis worker pool unavailable")]
    PoolUnavailable,
}

#[cfg(test)]
mod tests {
    use super::AnalysisError;

    #[test]
    fn messages_name_the_offending_numbers() {
        let err = AnalysisError::InvalidBufferLength {
            width: 2,
            height: 2,
            expected: 16,
            actual: 12,
        };
        assert!(err.to_string().contains("expected 16"));
        assert!(err.to_string().contains("got 12"));

        let err = AnalysisError::ZeroDimensions {
            width: 0,
            height: 5,
        };
        assert!(err.to_string().contains("0x5"));
    }
}

//! Unified error type for buffer construction, codec I/O and kernel dispatch.
//!
//! Every failure here is unrecoverable at the point of detection: either a
//! caller contract violation (sizing) or a failed interaction with the codec
//! or the allocator. Nothing is retried; errors propagate to the caller.
use thiserror::Error;

/// Top-level error type for all rasterops operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to allocate a {width}x{height} pixel buffer")]
    Allocation { width: usize, height: usize },

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    /// Caller-supplied sizing inconsistent with the kernel's contract.
    ///
    /// Raised before any output pixel is written, so a failed invocation
    /// never leaves a partially filled image behind.
    #[error("{context}: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    Dimension {
        context: &'static str,
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("{context}: input {width}x{height} is smaller than the 3x3 kernel")]
    TooSmall {
        context: &'static str,
        width: usize,
        height: usize,
    },

    #[error("symmetric-difference requires a second input image")]
    MissingSecondInput,

    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}

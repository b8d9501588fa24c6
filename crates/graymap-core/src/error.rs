//! Error types for graymap-core
//!
//! Only resource failures are reported as errors. Misuse of the API
//! (out-of-range coordinates, rectangles that do not fit, a zero maxval)
//! is a contract violation and panics instead.

use thiserror::Error;

/// graymap-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// The pixel buffer could not be obtained
    #[error("memory allocation failed for {width}x{height} image")]
    AllocationFailed { width: u32, height: u32 },

    /// A raw pixel buffer does not match the image dimensions
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Result type alias for graymap operations
pub type Result<T> = std::result::Result<T, Error>;

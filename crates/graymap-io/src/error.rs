//! I/O error types
//!
//! Every failure of the PGM codec maps into one `IoError` variant. The
//! operating-system error that caused a failure, if any, stays reachable
//! through `std::error::Error::source`, and the `Display` text is the
//! human-readable cause.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The input file could not be opened
    #[error("open failed: {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created
    #[error("create failed: {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The magic bytes are not `P5`
    #[error("invalid file format: expected binary PGM (P5)")]
    InvalidFormat,

    /// A header field is missing, malformed or out of range
    #[error("invalid {0}")]
    InvalidHeader(&'static str),

    /// The byte after maxval is not whitespace
    #[error("whitespace expected after maxval")]
    WhitespaceExpected,

    /// The pixel payload is shorter than `width * height`
    #[error("reading pixels: expected {expected} bytes, got {actual}")]
    ReadPixels { expected: usize, actual: usize },

    /// The header could not be written
    #[error("writing header failed: {0}")]
    WriteHeader(#[source] std::io::Error),

    /// The pixel payload could not be written
    #[error("writing pixels failed: {0}")]
    WritePixels(#[source] std::io::Error),

    /// Any other I/O error while reading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the core library (e.g. allocation failure)
    #[error("core error: {0}")]
    Core(#[from] graymap_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;

//! Error types for the byte-level helpers.

use thiserror::Error;

/// Failures of the variable-width integer codec in [`wire`](crate::wire).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// Only 1, 2, 4 and 8-byte integers are supported.
    #[error("unsupported integer width: {0} bytes")]
    UnsupportedWidth(usize),

    /// The input holds fewer bytes than the integer width.
    #[error("truncated integer: have {have} bytes, need {need}")]
    Truncated {
        /// Bytes available.
        have: usize,
        /// Bytes required.
        need: usize,
    },

    /// The value does not fit in the requested width.
    #[error("value {value:#x} does not fit in {width} bytes")]
    ValueTooLarge {
        /// Value that was to be encoded.
        value: u64,
        /// Requested width in bytes.
        width: usize,
    },
}

/// Result alias for [`WireError`].
pub type Result<T> = std::result::Result<T, WireError>;

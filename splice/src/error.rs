use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library
/// can potentially return.
///
/// Decoding is deliberately permissive: truncated fields, short step rows and
/// oversized track ids degrade into default-valued data rather than surfacing
/// here. The only hard decode failure is [`Error::HeaderMismatch`].
#[derive(Error, Debug)]
pub enum Error {
    /// The input does not begin with the `SPLICE` magic header.
    ///
    /// This is the single hard failure the decoder reports. Anything without
    /// the magic text is rejected before any field extraction happens.
    #[error("{path}: missing SPLICE header")]
    HeaderMismatch {
        /// Origin of the rejected input, a file path or `<memory>` for
        /// buffer-based decodes.
        path: String,
    },

    /// An out of bound access was attempted while parsing the input.
    ///
    /// This error occurs when trying to read data beyond the end of the
    /// decode window. The decoder treats it as a soft end-of-input signal,
    /// but it is surfaced by the [`crate::Parser`] primitives for callers
    /// driving the cursor directly.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// Provided input was empty.
    ///
    /// This error occurs when an empty file or buffer is provided where
    /// actual SPLICE pattern data was expected.
    #[error("Provided input was empty")]
    Empty,

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur during file operations
    /// such as reading from disk, permission issues, or filesystem errors.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories, such as
    /// memory mapping failures.
    #[error("{0}")]
    Error(String),
}

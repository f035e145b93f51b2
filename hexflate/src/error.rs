//! Error types for `hexflate`

use thiserror::Error;

/// The error type for `hexflate` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Hex Input Errors ====================
    /// The input was empty or contained only whitespace.
    #[error("empty input cannot be decompressed")]
    EmptyInput,

    /// The sanitized hex string has an odd number of characters.
    #[error("invalid hex string length: {length} (must be even)")]
    InvalidHexLength {
        /// The sanitized input length, in characters.
        length: usize,
    },

    /// A character pair is not a valid base-16 byte.
    #[error("invalid hex digit pair: {pair:?}")]
    InvalidHexDigit {
        /// The offending two-character pair.
        pair: String,
    },

    // ==================== Inflate Engine Errors ====================
    /// The decompressor state could not be created.
    #[error("failed to initialize inflate state: {message}")]
    EngineInit {
        /// The underlying allocation/initialization error.
        message: String,
    },

    /// The decompressor reported a non-success status.
    #[error("inflate failed: {status}")]
    InflateFailed {
        /// The raw status reported by the decompressor.
        status: String,
    },

    /// Decompression completed without error but produced no bytes.
    #[error("no data was decompressed")]
    EmptyResult,
}

/// A specialized Result type for `hexflate` operations.
pub type Result<T> = std::result::Result<T, Error>;

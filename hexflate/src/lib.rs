//! # hexflate
//!
//! A small library and CLI for decompressing hex-encoded raw-deflate
//! payloads back into hex text.
//!
//! The pipeline is: hex text → bytes → single-shot raw-deflate inflate
//! (no zlib/gzip header, 32 KiB window) → bytes → uppercase hex text.
//! Each request uses a fresh decoder session and a single fixed 65536-byte
//! output buffer; one inflate call is made and its written prefix is the
//! result.
//!
//! ## Quick Start
//!
//! ```
//! // "73 04 00" is the raw-deflate compression of the byte 0x41 ("A").
//! let hex = hexflate::pipeline::decompress_hex("73 04 00")?;
//! assert_eq!(hex, "41");
//! # Ok::<(), hexflate::Error>(())
//! ```
//!
//! The codec halves are usable on their own:
//!
//! ```
//! use hexflate::hex;
//!
//! let bytes = hex::decode("de AD be ef")?;
//! assert_eq!(hex::encode(&bytes), "DE AD BE EF");
//! # Ok::<(), hexflate::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `hexflate` command-line binary

pub mod error;
pub mod hex;
pub mod inflate;
pub mod pipeline;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::hex;
    pub use crate::inflate::{InflateSession, OUTPUT_CAPACITY};
    pub use crate::pipeline::decompress_hex;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

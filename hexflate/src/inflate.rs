//! Single-shot raw-deflate decompression

use flate2::{Decompress, FlushDecompress, Status};

use crate::error::{Error, Result};

/// Output capacity of a single inflate call, in bytes (0xFFFF + 1).
///
/// One call writes at most this much; anything beyond it is not drained.
pub const OUTPUT_CAPACITY: usize = 0xFFFF + 1;

/// Decoder state for one raw-deflate request.
///
/// Raw deflate means no zlib/gzip header or trailer and a 32 KiB sliding
/// window (the zlib window-bits -15 configuration). A session is consumed
/// by a single [`inflate_once`](Self::inflate_once) call; construct a
/// fresh one per request so no leftover state can leak between inputs.
pub struct InflateSession {
    stream: Decompress,
}

impl InflateSession {
    /// Create a decoder for one request.
    ///
    /// # Errors
    /// Returns [`Error::EngineInit`] if the decompressor state cannot be
    /// created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            stream: Decompress::new(false),
        })
    }

    /// Run exactly one decompression step over `input`.
    ///
    /// The whole input and a fixed [`OUTPUT_CAPACITY`]-byte output buffer
    /// are handed to the decompressor with sync-flush semantics. Input
    /// left unconsumed after the call, or output past the buffer
    /// capacity, is not drained.
    ///
    /// # Errors
    /// - [`Error::EmptyInput`] if `input` is empty.
    /// - [`Error::InflateFailed`] if the decompressor reports corruption
    ///   or cannot make progress.
    /// - [`Error::EmptyResult`] if the call succeeds but writes no bytes.
    pub fn inflate_once(mut self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut output = vec![0u8; OUTPUT_CAPACITY];

        let status = self
            .stream
            .decompress(input, &mut output, FlushDecompress::Sync)
            .map_err(|e| Error::InflateFailed {
                status: e.to_string(),
            })?;

        match status {
            // Stream end just means the final block completed within this
            // call; both are clean completions for a single shot.
            Status::Ok | Status::StreamEnd => {}
            Status::BufError => {
                return Err(Error::InflateFailed {
                    status: "buffer error (no progress possible)".to_string(),
                });
            }
        }

        let produced = self.stream.total_out() as usize;
        if produced == 0 {
            return Err(Error::EmptyResult);
        }

        tracing::debug!(
            "inflated {} input bytes ({} consumed) into {produced} bytes",
            input.len(),
            self.stream.total_in(),
        );

        output.truncate(produced);
        Ok(output)
    }
}

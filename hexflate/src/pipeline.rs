//! End-to-end decompression pipeline: hex text in, hex text out

use crate::error::{Error, Result};
use crate::hex;
use crate::inflate::InflateSession;

/// Decompress a hex-encoded raw-deflate payload into hex text.
///
/// Runs the whole pipeline for one request: sanitize and decode the hex
/// input, inflate it with a fresh session, and re-encode the produced
/// bytes as uppercase space-joined hex. The session lives only for the
/// request, so failed inputs cannot corrupt later ones.
///
/// # Errors
/// Returns an error if the input is blank or malformed hex, or if the
/// inflate step fails or produces no bytes.
pub fn decompress_hex(input: &str) -> Result<String> {
    if input.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let compressed = hex::decode(input)?;
    tracing::debug!("decoded {} compressed bytes", compressed.len());

    let decompressed = InflateSession::new()?.inflate_once(&compressed)?;
    tracing::info!(
        "decompressed {} -> {} bytes",
        compressed.len(),
        decompressed.len()
    );

    Ok(hex::encode(&decompressed))
}

//! Image codec port.
//!
//! Decoding failures that a user can cause (missing file, unreadable file,
//! unknown or corrupt format) are NOT errors at this boundary: the codec
//! returns an empty [`ImageBuffer`] and the caller checks it. Errors are
//! reserved for conditions the caller cannot be expected to handle.

use std::path::Path;

use thiserror::Error;

use crate::domain::{ColorMode, ImageBuffer};

/// Unexpected codec failures.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The image exceeds the decoder's configured limits.
    #[error("Image exceeds decoder limits: {0}")]
    LimitsExceeded(String),

    /// Any other decoder failure the adapter chose not to swallow.
    #[error("Decoder failure: {0}")]
    Internal(String),
}

/// Port for decoding an image file into memory.
pub trait ImageCodecPort {
    /// Decode `path` into a buffer laid out according to `mode`.
    ///
    /// Returns an empty buffer, never an error, when the file is missing or
    /// cannot be decoded.
    fn decode(&self, path: &Path, mode: ColorMode) -> Result<ImageBuffer, CodecError>;
}

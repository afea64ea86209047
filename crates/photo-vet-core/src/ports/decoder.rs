//! Image decoding port.
//!
//! Keeps the analysis independent of whichever decoding backend is
//! available on the target.

use thiserror::Error;

use crate::domain::PixelBuffer;

/// Failure to interpret upload bytes as an image.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file was empty.
    #[error("empty image file")]
    Empty,
    /// The bytes could not be parsed as a supported image format.
    #[error("unsupported or corrupt image data: {0}")]
    Malformed(String),
}

/// Port for decoding raw upload bytes into an RGBA pixel buffer.
pub trait ImageDecoder: Send + Sync {
    /// Decodes the bytes into a buffer matching the image's natural
    /// dimensions.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the bytes cannot be interpreted as an
    /// image. Any intermediate decoding state is released on all exit
    /// paths.
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError>;
}

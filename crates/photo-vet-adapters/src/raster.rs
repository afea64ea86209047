//! Raster decoding adapter backed by the `image` crate.

use photo_vet_core::{DecodeError, ImageDecoder, PixelBuffer};

/// Decoder for the common raster formats browsers accept as uploads.
pub struct RasterDecoder;

impl ImageDecoder for RasterDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }

        let image =
            image::load_from_memory(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(PixelBuffer::new(width, height, rgba.into_raw()))
    }
}

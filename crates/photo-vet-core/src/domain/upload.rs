//! Candidate upload and decoded pixel buffer types.

/// BT.601 luma weights. The weighting matters: it matches human perception
/// of darkness, a plain channel average does not.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// One candidate upload: the raw bytes of an image file plus a display name.
///
/// The bytes are kept as submitted; nothing in the vetting pipeline mutates
/// them, and the list of previously accepted files a caller passes in is
/// only read for comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Display name (file name for CLI use, arbitrary label otherwise).
    pub name: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Creates an upload from a name and its raw bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// File size in bytes.
    #[must_use]
    pub fn byte_len(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// A decoded raster image: row-major RGBA bytes, 4 bytes per pixel.
///
/// Owned by a single analysis invocation and discarded when it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a buffer from dimensions and flat RGBA data.
    ///
    /// `data.len()` must equal `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Flat RGBA byte data, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Total pixel count.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Perceptual luma (0.0-255.0) of the pixel starting at byte offset `i`.
    fn luma_at_offset(&self, i: usize) -> f64 {
        LUMA_R * f64::from(self.data[i])
            + LUMA_G * f64::from(self.data[i + 1])
            + LUMA_B * f64::from(self.data[i + 2])
    }

    /// Mean perceptual luma over all pixels, 0.0 (black) to 255.0 (white).
    ///
    /// Returns 0.0 for an empty buffer.
    #[must_use]
    pub fn mean_luma(&self) -> f64 {
        let count = self.pixel_count();
        if count == 0 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in (0..self.data.len()).step_by(4) {
            total += self.luma_at_offset(i);
        }
        total / count as f64
    }

    /// Full luma plane, one value per pixel in row-major order.
    #[must_use]
    pub fn luma_plane(&self) -> Vec<f64> {
        let mut plane = Vec::with_capacity(self.pixel_count());
        for i in (0..self.data.len()).step_by(4) {
            plane.push(self.luma_at_offset(i));
        }
        plane
    }
}

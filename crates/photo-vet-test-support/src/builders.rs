//! Deterministic synthetic image builders for testing.

use std::path::Path;

use photo_vet_core::{PixelBuffer, UploadFile};

/// Builder for synthetic test images.
///
/// All builders are deterministic: the noise variants take an explicit
/// seed and use a xorshift generator, so a given call always produces the
/// same buffer.
pub struct SyntheticImage;

impl SyntheticImage {
    /// Creates a grayscale buffer from a per-pixel function.
    #[must_use]
    pub fn gray_from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> PixelBuffer {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                let v = f(x, y);
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        PixelBuffer::new(width, height, data)
    }

    /// Uniform gray buffer: zero texture, simulates severe blur.
    #[must_use]
    pub fn uniform_gray(width: u32, height: u32, value: u8) -> PixelBuffer {
        Self::gray_from_fn(width, height, |_, _| value)
    }

    /// Completely black buffer: fails brightness and sharpness.
    #[must_use]
    pub fn black(width: u32, height: u32) -> PixelBuffer {
        Self::uniform_gray(width, height, 0)
    }

    /// High-contrast checkerboard: very sharp, well lit.
    #[must_use]
    pub fn checkerboard(width: u32, height: u32, cell_size: u32) -> PixelBuffer {
        let cell = cell_size.max(1);
        Self::gray_from_fn(width, height, move |x, y| {
            if (x / cell + y / cell) % 2 == 0 {
                255
            } else {
                0
            }
        })
    }

    /// Smooth horizontal gradient: weak edges, simulates defocus.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn horizontal_gradient(width: u32, height: u32) -> PixelBuffer {
        Self::gray_from_fn(width, height, move |x, _| {
            ((u32::from(u8::MAX) * x) / width.max(1)) as u8
        })
    }

    /// Bright pixel noise: passes the brightness and sharpness checks, and
    /// its PNG encoding barely compresses, so even modest dimensions clear
    /// the file-size floor.
    #[must_use]
    pub fn bright_noise(width: u32, height: u32, seed: u64) -> PixelBuffer {
        let mut rng = Xorshift::new(seed);
        Self::gray_from_fn(width, height, move |_, _| 60 + (rng.next_u8() % 196))
    }

    /// Dark pixel noise: mean luma around 30, well under the darkness
    /// floor, but textured enough to pass the sharpness check. Fails
    /// exactly the brightness check.
    #[must_use]
    pub fn dark_noise(width: u32, height: u32, seed: u64) -> PixelBuffer {
        let mut rng = Xorshift::new(seed);
        Self::gray_from_fn(width, height, move |_, _| rng.next_u8() % 61)
    }

    /// Encodes a buffer as PNG bytes.
    #[must_use]
    pub fn png_bytes(buffer: &PixelBuffer) -> Vec<u8> {
        let img = image::RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.data().to_vec())
            .expect("buffer dimensions match data length");
        let mut out = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .expect("png encoding of an in-memory image");
        out.into_inner()
    }

    /// Builds an upload whose bytes are the PNG encoding of the buffer.
    #[must_use]
    pub fn upload(name: &str, buffer: &PixelBuffer) -> UploadFile {
        UploadFile::new(name, Self::png_bytes(buffer))
    }

    /// Writes a buffer to disk as PNG, for CLI integration tests.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn save_png(buffer: &PixelBuffer, path: &Path) {
        std::fs::write(path, Self::png_bytes(buffer)).expect("write png fixture");
    }
}

/// Minimal xorshift64 generator; deterministic and dependency-free.
struct Xorshift {
    state: u64,
}

impl Xorshift {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_mul(2_685_821_657_736_338_717).max(1),
        }
    }

    fn next_u8(&mut self) -> u8 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x >> 32) as u8
    }
}

//! Sharpness check.
//!
//! Uses mean local gradient magnitude as a blur proxy: blurred images have
//! weaker edges, so a low mean edge strength flags a probable out-of-focus
//! or shaken shot.

use crate::domain::{messages, Finding, IssueKind, PixelBuffer, QualityCheck, UploadFile};

/// Points subtracted when the check fails.
const PENALTY: u8 = 25;

/// Configuration for the sharpness check.
#[derive(Debug, Clone)]
pub struct SharpnessConfig {
    /// Minimum acceptable mean edge strength. Images below this are flagged
    /// as blurry.
    pub min_edge_strength: f64,
}

impl Default for SharpnessConfig {
    fn default() -> Self {
        Self {
            min_edge_strength: 15.0,
        }
    }
}

/// Mean gradient magnitude over all interior pixels.
///
/// For every pixel excluding the outermost 1-pixel border, takes the luma
/// difference to the right neighbor and to the neighbor one row below and
/// combines them as the Euclidean norm. Higher values mean sharper images.
///
/// Images smaller than 3x3 have no interior pixels; their edge strength is
/// defined as 0, which flags them as blurry. Such images are invalid
/// listing photos regardless.
#[must_use]
pub fn mean_edge_strength(image: &PixelBuffer) -> f64 {
    let width = image.width() as usize;
    let height = image.height() as usize;
    if width < 3 || height < 3 {
        return 0.0;
    }

    let plane = image.luma_plane();
    let mut edge_sum = 0.0;
    let mut edge_count = 0u64;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let i = y * width + x;
            let dx = plane[i] - plane[i + 1];
            let dy = plane[i] - plane[i + width];
            edge_sum += (dx * dx + dy * dy).sqrt();
            edge_count += 1;
        }
    }

    edge_sum / edge_count as f64
}

/// Sharpness quality check.
pub struct SharpnessCheck {
    config: SharpnessConfig,
}

impl SharpnessCheck {
    /// Creates a new sharpness check with the given configuration.
    #[must_use]
    pub const fn new(config: SharpnessConfig) -> Self {
        Self { config }
    }
}

impl Default for SharpnessCheck {
    fn default() -> Self {
        Self::new(SharpnessConfig::default())
    }
}

impl QualityCheck for SharpnessCheck {
    fn name(&self) -> &'static str {
        "sharpness"
    }

    fn evaluate(&self, image: &PixelBuffer, _file: &UploadFile) -> Option<Finding> {
        let strength = mean_edge_strength(image);
        if strength < self.config.min_edge_strength {
            tracing::debug!(
                strength,
                floor = self.config.min_edge_strength,
                "image appears blurry"
            );
            Some(Finding::new(IssueKind::Blur, messages::BLURRY, PENALTY))
        } else {
            None
        }
    }
}

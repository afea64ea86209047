//! Brightness check.
//!
//! Flags images whose mean perceptual luma falls below a darkness floor.

use crate::domain::{messages, Finding, IssueKind, PixelBuffer, QualityCheck, UploadFile};

/// Points subtracted when the check fails.
const PENALTY: u8 = 30;

/// Configuration for the brightness check.
#[derive(Debug, Clone)]
pub struct BrightnessConfig {
    /// Minimum acceptable mean luma (0.0-255.0). Images below this are
    /// flagged as too dark.
    pub min_luma: f64,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self { min_luma: 50.0 }
    }
}

/// Brightness quality check.
pub struct BrightnessCheck {
    config: BrightnessConfig,
}

impl BrightnessCheck {
    /// Creates a new brightness check with the given configuration.
    #[must_use]
    pub const fn new(config: BrightnessConfig) -> Self {
        Self { config }
    }
}

impl Default for BrightnessCheck {
    fn default() -> Self {
        Self::new(BrightnessConfig::default())
    }
}

impl QualityCheck for BrightnessCheck {
    fn name(&self) -> &'static str {
        "brightness"
    }

    fn evaluate(&self, image: &PixelBuffer, _file: &UploadFile) -> Option<Finding> {
        let luma = image.mean_luma();
        if luma < self.config.min_luma {
            tracing::debug!(luma, floor = self.config.min_luma, "image too dark");
            Some(Finding::new(
                IssueKind::Brightness,
                messages::TOO_DARK,
                PENALTY,
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32, value: u8) -> PixelBuffer {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&[value, value, value, 255]);
        }
        PixelBuffer::new(width, height, data)
    }

    fn dummy_file() -> UploadFile {
        UploadFile::new("test.png", vec![0u8; 100_000])
    }

    #[test]
    fn test_default_config() {
        let config = BrightnessConfig::default();
        assert!((config.min_luma - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_check_name() {
        assert_eq!(BrightnessCheck::default().name(), "brightness");
    }

    #[test]
    fn test_dark_image_flagged() {
        let image = gray(8, 8, 20);
        let finding = BrightnessCheck::default()
            .evaluate(&image, &dummy_file())
            .expect("dark image should be flagged");

        assert_eq!(finding.issue.kind, IssueKind::Brightness);
        assert_eq!(finding.issue.message, messages::TOO_DARK);
        assert_eq!(finding.penalty, 30);
    }

    #[test]
    fn test_bright_image_passes() {
        let image = gray(8, 8, 200);
        assert!(BrightnessCheck::default()
            .evaluate(&image, &dummy_file())
            .is_none());
    }

    #[test]
    fn test_floor_boundary() {
        // Mean luma above the floor passes; just below fails.
        let above = gray(8, 8, 51);
        let below = gray(8, 8, 49);
        let check = BrightnessCheck::default();

        assert!(check.evaluate(&above, &dummy_file()).is_none());
        assert!(check.evaluate(&below, &dummy_file()).is_some());
    }

    #[test]
    fn test_custom_floor() {
        let image = gray(8, 8, 100);
        let strict = BrightnessCheck::new(BrightnessConfig { min_luma: 120.0 });
        assert!(strict.evaluate(&image, &dummy_file()).is_some());
    }
}

//! Resolution check.
//!
//! Rejects obviously undersized uploads without pixel analysis.

use crate::domain::{messages, Finding, IssueKind, PixelBuffer, QualityCheck, UploadFile};

/// Points subtracted when the check fails.
const PENALTY: u8 = 20;

/// Configuration for the resolution check.
#[derive(Debug, Clone)]
pub struct ResolutionConfig {
    /// Minimum acceptable width in pixels.
    pub min_width: u32,
    /// Minimum acceptable height in pixels.
    pub min_height: u32,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            min_width: 400,
            min_height: 400,
        }
    }
}

/// Resolution quality check.
pub struct ResolutionCheck {
    config: ResolutionConfig,
}

impl ResolutionCheck {
    /// Creates a new resolution check with the given configuration.
    #[must_use]
    pub const fn new(config: ResolutionConfig) -> Self {
        Self { config }
    }
}

impl Default for ResolutionCheck {
    fn default() -> Self {
        Self::new(ResolutionConfig::default())
    }
}

impl QualityCheck for ResolutionCheck {
    fn name(&self) -> &'static str {
        "resolution"
    }

    fn evaluate(&self, image: &PixelBuffer, _file: &UploadFile) -> Option<Finding> {
        if image.width() < self.config.min_width || image.height() < self.config.min_height {
            tracing::debug!(
                width = image.width(),
                height = image.height(),
                "image resolution too low"
            );
            Some(Finding::new(
                IssueKind::Resolution,
                messages::LOW_RESOLUTION,
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

    fn blank(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::new(
            width,
            height,
            vec![128; width as usize * height as usize * 4],
        )
    }

    fn dummy_file() -> UploadFile {
        UploadFile::new("test.png", vec![0u8; 100_000])
    }

    #[test]
    fn test_check_name() {
        assert_eq!(ResolutionCheck::default().name(), "resolution");
    }

    #[test]
    fn test_large_image_passes() {
        let image = blank(800, 600);
        assert!(ResolutionCheck::default()
            .evaluate(&image, &dummy_file())
            .is_none());
    }

    #[test]
    fn test_either_axis_below_floor_fails() {
        let check = ResolutionCheck::default();
        let narrow = blank(399, 600);
        let short = blank(600, 399);

        assert!(check.evaluate(&narrow, &dummy_file()).is_some());
        assert!(check.evaluate(&short, &dummy_file()).is_some());
    }

    #[test]
    fn test_exact_floor_passes() {
        let image = blank(400, 400);
        assert!(ResolutionCheck::default()
            .evaluate(&image, &dummy_file())
            .is_none());
    }

    #[test]
    fn test_finding_details() {
        let finding = ResolutionCheck::default()
            .evaluate(&blank(100, 100), &dummy_file())
            .expect("small image should be flagged");

        assert_eq!(finding.issue.kind, IssueKind::Resolution);
        assert_eq!(finding.issue.message, messages::LOW_RESOLUTION);
        assert_eq!(finding.penalty, 20);
    }
}

//! File size check.
//!
//! A very small file usually means aggressive compression or a thumbnail
//! passed off as a photo.

use crate::domain::{messages, Finding, IssueKind, PixelBuffer, QualityCheck, UploadFile};

/// Points subtracted when the check fails.
const PENALTY: u8 = 15;

/// Configuration for the file size check.
#[derive(Debug, Clone)]
pub struct FileSizeConfig {
    /// Minimum acceptable file size in bytes.
    pub min_bytes: u64,
}

impl Default for FileSizeConfig {
    fn default() -> Self {
        Self { min_bytes: 50_000 }
    }
}

/// File size quality check.
pub struct FileSizeCheck {
    config: FileSizeConfig,
}

impl FileSizeCheck {
    /// Creates a new file size check with the given configuration.
    #[must_use]
    pub const fn new(config: FileSizeConfig) -> Self {
        Self { config }
    }
}

impl Default for FileSizeCheck {
    fn default() -> Self {
        Self::new(FileSizeConfig::default())
    }
}

impl QualityCheck for FileSizeCheck {
    fn name(&self) -> &'static str {
        "filesize"
    }

    fn evaluate(&self, _image: &PixelBuffer, file: &UploadFile) -> Option<Finding> {
        if file.byte_len() < self.config.min_bytes {
            tracing::debug!(
                bytes = file.byte_len(),
                floor = self.config.min_bytes,
                "file size suspiciously small"
            );
            Some(Finding::new(
                IssueKind::FileSize,
                messages::SMALL_FILE,
                PENALTY,
            ))
        } else {
            None
        }
    }
}

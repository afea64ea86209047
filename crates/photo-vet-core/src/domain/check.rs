//! Quality check trait.

use super::{Finding, PixelBuffer, UploadFile};

/// Trait for one independent quality check over a decoded upload.
///
/// Checks are pure: they inspect the pixel buffer and the raw file, never
/// mutate anything, and report at most one finding. All checks run
/// unconditionally; their penalties stack.
pub trait QualityCheck: Send + Sync {
    /// Returns the name of this check.
    fn name(&self) -> &'static str;

    /// Evaluates the check, returning a finding when it fails.
    fn evaluate(&self, image: &PixelBuffer, file: &UploadFile) -> Option<Finding>;
}

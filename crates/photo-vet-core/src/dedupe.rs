//! Duplicate detection for candidate uploads.

use tracing::debug;

use crate::domain::UploadFile;

/// Default byte-size window within which two files are treated as likely
/// duplicates.
pub const DEFAULT_TOLERANCE_BYTES: u64 = 1000;

/// Trait for flagging a candidate upload as a probable repeat of an
/// already-accepted file.
///
/// The contract is candidate + existing set in, boolean out; the internal
/// method is free to get smarter (a perceptual hash, say) without touching
/// callers.
pub trait DuplicateDetector: Send + Sync {
    /// Returns true when the candidate is a probable duplicate of any file
    /// in the existing accepted set.
    fn is_duplicate(&self, candidate: &UploadFile, existing: &[UploadFile]) -> bool;
}

/// Byte-size proximity heuristic.
///
/// A candidate whose size lies strictly within `tolerance` bytes of any
/// accepted file's size is reported as a duplicate. This is coarse: two
/// distinct photos of similar size are false positives, and the same photo
/// re-encoded at a different quality is a false negative.
pub struct SizeProximityDetector {
    tolerance: u64,
}

impl SizeProximityDetector {
    /// Creates a detector with the given byte tolerance.
    #[must_use]
    pub const fn new(tolerance: u64) -> Self {
        Self { tolerance }
    }
}

impl Default for SizeProximityDetector {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE_BYTES)
    }
}

impl DuplicateDetector for SizeProximityDetector {
    fn is_duplicate(&self, candidate: &UploadFile, existing: &[UploadFile]) -> bool {
        let size = candidate.byte_len();
        let hit = existing
            .iter()
            .any(|f| f.byte_len().abs_diff(size) < self.tolerance);
        if hit {
            debug!(name = %candidate.name, size, "size-proximity duplicate");
        }
        hit
    }
}

/// Detector that never reports a duplicate; used when duplicate detection
/// is disabled.
pub struct NeverDuplicate;

impl DuplicateDetector for NeverDuplicate {
    fn is_duplicate(&self, _candidate: &UploadFile, _existing: &[UploadFile]) -> bool {
        false
    }
}

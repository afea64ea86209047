//! Accept/reject decision policy for candidate uploads.

use tracing::debug;

use crate::dedupe::DuplicateDetector;
use crate::domain::{messages, Dimensions, Issue, IssueKind, UploadDecision, UploadFile};
use crate::ports::ImageDecoder;
use crate::scoring::QualityAnalyzer;

/// Composes decoding, quality scoring, and duplicate detection into one
/// accept/reject decision per candidate upload.
///
/// Every invocation is a pure function of its inputs: nothing is cached
/// across calls, and the existing accepted list is only read.
pub struct UploadGate {
    decoder: Box<dyn ImageDecoder>,
    analyzer: QualityAnalyzer,
    detector: Box<dyn DuplicateDetector>,
}

impl UploadGate {
    /// Creates a gate from its three collaborators.
    #[must_use]
    pub fn new(
        decoder: Box<dyn ImageDecoder>,
        analyzer: QualityAnalyzer,
        detector: Box<dyn DuplicateDetector>,
    ) -> Self {
        Self {
            decoder,
            analyzer,
            detector,
        }
    }

    /// Vets one candidate against the set of already-accepted files.
    ///
    /// A file whose bytes cannot be decoded is rejected with score 0 and
    /// the single decode issue. Otherwise all quality checks run, the
    /// duplicate detector runs independently, and a duplicate forces
    /// rejection with its issue prepended to the list.
    #[must_use]
    pub fn analyze(&self, file: &UploadFile, existing: &[UploadFile]) -> UploadDecision {
        let image = match self.decoder.decode(&file.bytes) {
            Ok(image) => image,
            Err(e) => {
                debug!(name = %file.name, error = %e, "decode failed");
                return UploadDecision {
                    accepted: false,
                    duplicate: false,
                    issues: vec![Issue::new(IssueKind::Decode, messages::DECODE_FAILED)],
                    score: 0,
                    dimensions: None,
                };
            }
        };

        let report = self.analyzer.score(&image, file);
        let duplicate = self.detector.is_duplicate(file, existing);

        let mut issues = report.issues;
        if duplicate {
            // Prepended so it displays first; the rejection itself does not
            // depend on the ordering.
            issues.insert(0, Issue::new(IssueKind::Duplicate, messages::DUPLICATE));
        }

        UploadDecision {
            accepted: report.acceptable && !duplicate,
            duplicate,
            issues,
            score: report.score,
            dimensions: Some(Dimensions::new(image.width(), image.height())),
        }
    }
}

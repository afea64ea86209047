//! Quality scoring over the ordered check list.

use tracing::debug;

use crate::checks::{BrightnessCheck, FileSizeCheck, ResolutionCheck, SharpnessCheck};
use crate::domain::{PixelBuffer, QualityCheck, QualityReport, UploadFile};

/// Minimum score an upload needs to be acceptable, on top of having no
/// issues. Every penalty today is at least 15 points, so the issue list
/// alone decides the outcome; the floor is kept because the two conditions
/// stop being redundant the moment partial penalties are introduced.
pub const ACCEPT_SCORE_FLOOR: u8 = 70;

/// Runs an ordered list of quality checks and aggregates their findings
/// into a single report.
pub struct QualityAnalyzer {
    checks: Vec<Box<dyn QualityCheck>>,
}

impl QualityAnalyzer {
    /// Creates an analyzer over the given checks, run in order.
    #[must_use]
    pub fn new(checks: Vec<Box<dyn QualityCheck>>) -> Self {
        Self { checks }
    }

    /// Names of the configured checks, in run order.
    pub fn check_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(|c| c.name())
    }

    /// Scores one decoded upload.
    ///
    /// All checks run unconditionally; penalties stack and the score is
    /// clamped to 0. The upload is acceptable iff no check failed and the
    /// score is at least [`ACCEPT_SCORE_FLOOR`].
    #[must_use]
    pub fn score(&self, image: &PixelBuffer, file: &UploadFile) -> QualityReport {
        let mut score: i32 = 100;
        let mut issues = Vec::new();

        for check in &self.checks {
            if let Some(finding) = check.evaluate(image, file) {
                debug!(
                    check = check.name(),
                    penalty = finding.penalty,
                    "check failed"
                );
                score -= i32::from(finding.penalty);
                issues.push(finding.issue);
            }
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let score = score.clamp(0, 100) as u8;
        let acceptable = issues.is_empty() && score >= ACCEPT_SCORE_FLOOR;

        QualityReport {
            acceptable,
            issues,
            score,
        }
    }
}

impl Default for QualityAnalyzer {
    /// The standard four checks in run order: brightness, sharpness,
    /// resolution, file size.
    fn default() -> Self {
        Self::new(vec![
            Box::new(BrightnessCheck::default()),
            Box::new(SharpnessCheck::default()),
            Box::new(ResolutionCheck::default()),
            Box::new(FileSizeCheck::default()),
        ])
    }
}

//! Vetting result types.

use serde::{Deserialize, Serialize};

use super::Issue;

/// Aggregated quality verdict for one decoded upload, before duplicate
/// detection is taken into account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    /// True iff `issues` is empty and `score` is at least the acceptance
    /// floor.
    pub acceptable: bool,
    /// Detected issues in check order.
    pub issues: Vec<Issue>,
    /// Quality score, 0-100.
    pub score: u8,
}

/// Pixel dimensions of a decoded upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Creates dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The caller-facing decision for one candidate upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadDecision {
    /// True iff the upload passed every check and is not a duplicate.
    pub accepted: bool,
    /// True iff the candidate matched a previously accepted file.
    pub duplicate: bool,
    /// Issues in display order; a duplicate issue, when present, comes
    /// first.
    pub issues: Vec<Issue>,
    /// Quality score, 0-100. Zero when decoding failed.
    pub score: u8,
    /// Decoded dimensions; `None` when decoding failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

impl UploadDecision {
    /// Issue messages in display order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.message.as_str()).collect()
    }
}

/// One vetted upload as written to output sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Display name of the vetted file.
    pub name: String,
    /// Timestamp of the decision (RFC 3339).
    pub timestamp: String,
    /// The decision itself, flattened into the record.
    #[serde(flatten)]
    pub decision: UploadDecision,
}

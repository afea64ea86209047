//! Issue types reported for a vetted upload.

use serde::{Deserialize, Serialize};

/// A single problem found with an upload, carrying the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Which check raised the issue.
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Human-readable message shown to the seller.
    pub message: String,
}

impl Issue {
    /// Creates an issue from a kind and message.
    #[must_use]
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The kind of problem detected.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Input bytes could not be decoded as an image.
    Decode,
    /// Mean luma below the darkness floor.
    Brightness,
    /// Mean edge strength below the sharpness floor.
    Blur,
    /// Pixel dimensions below the resolution floor.
    Resolution,
    /// File byte size suspiciously small.
    FileSize,
    /// Candidate matches a previously accepted upload.
    Duplicate,
}

/// Fixed user-facing messages, one per issue kind.
pub mod messages {
    /// Shown when decoding fails.
    pub const DECODE_FAILED: &str = "Unable to load image file";
    /// Shown when the image is too dark.
    pub const TOO_DARK: &str = "Image is too dark, please take photo in better lighting";
    /// Shown when the image appears out of focus.
    pub const BLURRY: &str = "Image appears blurry, please ensure camera is steady and focused";
    /// Shown when the image is undersized.
    pub const LOW_RESOLUTION: &str =
        "Image resolution is too low, please use higher quality camera settings";
    /// Shown when the file itself is suspiciously small.
    pub const SMALL_FILE: &str = "Image file size is very small, this might indicate poor quality";
    /// Shown when the candidate looks like a repeat upload.
    pub const DUPLICATE: &str = "This image appears to be a duplicate";
}

/// One failed check: the issue to report and the score penalty it carries.
#[derive(Debug, Clone)]
pub struct Finding {
    /// The issue to surface to the caller.
    pub issue: Issue,
    /// Points subtracted from the 100-point base score.
    pub penalty: u8,
}

impl Finding {
    /// Creates a finding.
    #[must_use]
    pub fn new(kind: IssueKind, message: &str, penalty: u8) -> Self {
        Self {
            issue: Issue::new(kind, message),
            penalty,
        }
    }
}

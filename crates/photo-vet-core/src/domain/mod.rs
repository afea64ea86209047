//! Core domain types for upload vetting.

mod check;
mod issue;
mod report;
mod upload;

pub use check::QualityCheck;
pub use issue::{messages, Finding, Issue, IssueKind};
pub use report::{DecisionRecord, Dimensions, QualityReport, UploadDecision};
pub use upload::{PixelBuffer, UploadFile};

//! Photo Vet Core - Domain logic for vetting listing photos
//!
//! This crate contains the domain types, the quality check trait and its
//! implementations (brightness, sharpness, resolution, file size), the
//! scorer that combines them, and the duplicate detector and decision gate
//! that produce the final accept/reject verdict for a candidate upload.

pub mod checks;
pub mod dedupe;
pub mod domain;
pub mod gate;
pub mod ports;
pub mod scoring;

pub use checks::{
    BrightnessCheck, BrightnessConfig, FileSizeCheck, FileSizeConfig, ResolutionCheck,
    ResolutionConfig, SharpnessCheck, SharpnessConfig,
};
pub use dedupe::{DuplicateDetector, NeverDuplicate, SizeProximityDetector};
pub use domain::{
    DecisionRecord, Dimensions, Finding, Issue, IssueKind, PixelBuffer, QualityCheck,
    QualityReport, UploadDecision, UploadFile,
};
pub use gate::UploadGate;
pub use ports::{
    DecisionOutput, DecodeError, ImageDecoder, ProgressEvent, ProgressSink, UploadSource,
};
pub use scoring::QualityAnalyzer;

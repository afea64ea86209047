//! Test support utilities for photo-vet.
//!
//! Provides deterministic synthetic image builders and mock implementations
//! of the core ports for testing the vetting pipeline.
//!
//! # Example
//!
//! ```
//! use photo_vet_test_support::{SyntheticImage, StaticDecoder};
//!
//! // A sharp, well-lit buffer that passes every pixel check
//! let good = SyntheticImage::bright_noise(512, 512, 7);
//!
//! // A decoder that always yields it, regardless of input bytes
//! let decoder = StaticDecoder::new(good);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticImage;
pub use mocks::{
    FailingDecoder, MockDecisionOutput, MockProgressSink, MockUploadSource, StaticDecoder,
};

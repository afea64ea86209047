//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the domain core and external
//! adapters: image decoding, upload sources, progress reporting, and
//! decision output.

mod decoder;
mod decision_output;
mod progress;
mod upload_source;

pub use decoder::{DecodeError, ImageDecoder};
pub use decision_output::DecisionOutput;
pub use progress::{ProgressEvent, ProgressSink};
pub use upload_source::UploadSource;

//! Progress reporting port for UI integration.

use crate::domain::DecisionRecord;

/// Events emitted while vetting a batch of uploads.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Vetting started for a candidate.
    Started {
        /// Display name of the file.
        name: String,
        /// Index in the batch (0-based).
        index: usize,
        /// Total candidates in the batch, if known.
        total: Option<usize>,
    },
    /// A decision was reached for a candidate.
    Decided {
        /// The decision record.
        record: DecisionRecord,
    },
    /// A candidate was skipped because it could not be read at all.
    Skipped {
        /// Display name of the file.
        name: String,
        /// Reason for skipping.
        reason: String,
    },
    /// The whole batch has been processed.
    Finished {
        /// Candidates accepted.
        accepted: usize,
        /// Candidates rejected.
        rejected: usize,
        /// Candidates skipped.
        skipped: usize,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink: Send + Sync {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent);
}

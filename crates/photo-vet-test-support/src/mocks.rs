//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use photo_vet_core::{
    DecisionOutput, DecisionRecord, DecodeError, ImageDecoder, PixelBuffer, ProgressEvent,
    ProgressSink, UploadFile, UploadSource,
};

/// Decoder that returns a fixed pixel buffer for any non-empty input.
///
/// Lets tests pair arbitrary byte lengths (for the file-size and duplicate
/// checks) with precisely controlled pixel content.
pub struct StaticDecoder {
    buffer: PixelBuffer,
}

impl StaticDecoder {
    /// Creates a decoder that always yields the given buffer.
    #[must_use]
    pub fn new(buffer: PixelBuffer) -> Self {
        Self { buffer }
    }
}

impl ImageDecoder for StaticDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
        if bytes.is_empty() {
            Err(DecodeError::Empty)
        } else {
            Ok(self.buffer.clone())
        }
    }
}

/// Decoder that fails for every input.
pub struct FailingDecoder;

impl ImageDecoder for FailingDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
        if bytes.is_empty() {
            Err(DecodeError::Empty)
        } else {
            Err(DecodeError::Malformed("mock decoder always fails".into()))
        }
    }
}

/// Mock implementation of `UploadSource` for testing.
///
/// Yields pre-built uploads and tracks iteration for assertions.
pub struct MockUploadSource {
    uploads: Vec<UploadFile>,
    iteration_count: Arc<Mutex<usize>>,
}

impl MockUploadSource {
    /// Creates a new mock source with the given uploads.
    #[must_use]
    pub fn new(uploads: Vec<UploadFile>) -> Self {
        Self {
            uploads,
            iteration_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates an empty mock source.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns the number of times the source has been iterated.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        *self
            .iteration_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl UploadSource for MockUploadSource {
    fn uploads(&self) -> Box<dyn Iterator<Item = anyhow::Result<UploadFile>> + Send + '_> {
        let count = Arc::clone(&self.iteration_count);
        if let Ok(mut c) = count.lock() {
            *c += 1;
        }
        Box::new(self.uploads.iter().cloned().map(Ok))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.uploads.len())
    }
}

/// Mock implementation of `DecisionOutput` for testing.
///
/// Captures records for later assertions.
pub struct MockDecisionOutput {
    records: Arc<Mutex<Vec<DecisionRecord>>>,
    flush_count: Arc<Mutex<usize>>,
}

impl MockDecisionOutput {
    /// Creates a new mock output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            flush_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns all captured records.
    #[must_use]
    pub fn records(&self) -> Vec<DecisionRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of times `flush()` was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self
            .flush_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockDecisionOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionOutput for MockDecisionOutput {
    fn write(&self, record: &DecisionRecord) -> anyhow::Result<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        if let Ok(mut c) = self.flush_count.lock() {
            *c += 1;
        }
        Ok(())
    }
}

/// Mock implementation of `ProgressSink` for testing.
///
/// Captures events for later assertions.
pub struct MockProgressSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressSink {
    /// Creates a new mock progress sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of `Started` events.
    #[must_use]
    pub fn started_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Started { .. }))
            .count()
    }

    /// Returns the number of `Decided` events.
    #[must_use]
    pub fn decided_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Decided { .. }))
            .count()
    }

    /// Returns the number of `Skipped` events.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Skipped { .. }))
            .count()
    }

    /// Returns the final counts from the `Finished` event, if any.
    #[must_use]
    pub fn finished_counts(&self) -> Option<(usize, usize, usize)> {
        self.events().iter().find_map(|e| match e {
            ProgressEvent::Finished {
                accepted,
                rejected,
                skipped,
            } => Some((*accepted, *rejected, *skipped)),
            _ => None,
        })
    }
}

impl Default for MockProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for MockProgressSink {
    fn on_event(&self, event: ProgressEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use photo_vet_core::{Dimensions, UploadDecision};

    #[test]
    fn test_static_decoder() {
        let buffer = PixelBuffer::new(2, 2, vec![128; 16]);
        let decoder = StaticDecoder::new(buffer.clone());

        assert_eq!(decoder.decode(&[1, 2, 3]).unwrap(), buffer);
        assert!(matches!(decoder.decode(&[]), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_failing_decoder() {
        assert!(FailingDecoder.decode(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_mock_upload_source() {
        let source = MockUploadSource::new(vec![UploadFile::new("a.png", vec![0u8; 10])]);

        assert_eq!(source.count_hint(), Some(1));
        assert_eq!(source.uploads().count(), 1);
        assert_eq!(source.iteration_count(), 1);
    }

    #[test]
    fn test_mock_decision_output() {
        let output = MockDecisionOutput::new();
        let record = DecisionRecord {
            name: "a.png".into(),
            timestamp: "2024-01-01T00:00:00Z".into(),
            decision: UploadDecision {
                accepted: true,
                duplicate: false,
                issues: vec![],
                score: 100,
                dimensions: Some(Dimensions::new(800, 600)),
            },
        };

        output.write(&record).unwrap();
        output.flush().unwrap();

        assert_eq!(output.records().len(), 1);
        assert_eq!(output.flush_count(), 1);
    }

    #[test]
    fn test_mock_progress_sink() {
        let sink = MockProgressSink::new();

        sink.on_event(ProgressEvent::Started {
            name: "a.png".into(),
            index: 0,
            total: Some(1),
        });
        sink.on_event(ProgressEvent::Finished {
            accepted: 1,
            rejected: 0,
            skipped: 0,
        });

        assert_eq!(sink.started_count(), 1);
        assert_eq!(sink.finished_counts(), Some((1, 0, 0)));
    }
}

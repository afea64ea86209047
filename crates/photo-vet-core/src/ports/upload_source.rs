//! Upload source port for loading candidate files from various sources.

use crate::domain::UploadFile;

/// Port for producing candidate uploads to vet.
pub trait UploadSource: Send + Sync {
    /// Returns an iterator over candidate uploads from this source.
    ///
    /// # Errors
    ///
    /// Individual items may be errors if a file fails to load.
    fn uploads(&self) -> Box<dyn Iterator<Item = anyhow::Result<UploadFile>> + Send + '_>;

    /// Returns the total number of candidates, if known.
    fn count_hint(&self) -> Option<usize>;
}

//! Filesystem adapter for loading candidate uploads.

use anyhow::{Context, Result};
use photo_vet_core::{UploadFile, UploadSource};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Upload extensions the marketplace accepts.
const UPLOAD_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif"];

/// Filesystem upload source adapter.
pub struct FsUploadSource {
    paths: Vec<PathBuf>,
    recursive: bool,
}

impl FsUploadSource {
    /// Creates a new filesystem upload source.
    ///
    /// # Arguments
    ///
    /// * `paths` - Files or directories to scan
    /// * `recursive` - Whether to recurse into subdirectories
    #[must_use]
    pub const fn new(paths: Vec<PathBuf>, recursive: bool) -> Self {
        Self { paths, recursive }
    }

    /// Collects all upload files from the configured paths.
    fn collect_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in &self.paths {
            if path.is_file() {
                if is_supported_upload(path) {
                    files.push(path.clone());
                } else {
                    warn!("Unsupported file type: {}", path.display());
                }
            } else if path.is_dir() {
                self.collect_from_dir(path, &mut files);
            } else {
                warn!("Path does not exist: {}", path.display());
            }
        }

        files
    }

    fn collect_from_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match std::fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!("Failed to read directory {}: {e}", dir.display());
                return;
            }
        };

        let mut found: Vec<PathBuf> = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && is_supported_upload(&path) {
                found.push(path);
            } else if path.is_dir() && self.recursive {
                self.collect_from_dir(&path, files);
            }
        }
        // Stable order so batches vet in the same sequence every run.
        found.sort();
        files.append(&mut found);
    }
}

impl UploadSource for FsUploadSource {
    fn uploads(&self) -> Box<dyn Iterator<Item = Result<UploadFile>> + Send + '_> {
        let files = self.collect_files();
        debug!("Found {} upload files", files.len());

        Box::new(files.into_iter().map(|path| load_upload(&path)))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.collect_files().len())
    }
}

/// Checks if a path has a supported upload extension.
fn is_supported_upload(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| UPLOAD_EXTENSIONS.contains(&e.as_str()))
}

/// Loads one upload file from the filesystem.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_upload(path: &Path) -> Result<UploadFile> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read upload: {}", path.display()))?;

    let name = path
        .file_name()
        .map_or_else(|| path.to_string_lossy().into_owned(), |n| {
            n.to_string_lossy().into_owned()
        });

    Ok(UploadFile::new(name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported_upload() {
        assert!(is_supported_upload(Path::new("sofa.jpg")));
        assert!(is_supported_upload(Path::new("sofa.JPEG")));
        assert!(is_supported_upload(Path::new("sofa.png")));
        assert!(is_supported_upload(Path::new("sofa.webp")));
        assert!(!is_supported_upload(Path::new("sofa.txt")));
        assert!(!is_supported_upload(Path::new("sofa.cr2")));
        assert!(!is_supported_upload(Path::new("sofa")));
    }
}

//! Configuration file support for photo-vet.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/photo-vet/config.toml` (lowest priority)
//! - Project-local: `.photo-vet.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Brightness check settings.
    pub brightness: BrightnessConfig,
    /// Sharpness check settings.
    pub sharpness: SharpnessConfig,
    /// Resolution check settings.
    pub resolution: ResolutionConfig,
    /// File size check settings.
    pub filesize: FileSizeConfig,
    /// Duplicate detection settings.
    pub dedupe: DedupeConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recurse into subdirectories by default.
    pub recursive: Option<bool>,
}

/// Brightness check configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct BrightnessConfig {
    /// Enable/disable the brightness check.
    pub enabled: Option<bool>,
    /// Minimum mean luma (0.0-255.0).
    pub min_luma: Option<f64>,
}

/// Sharpness check configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SharpnessConfig {
    /// Enable/disable the sharpness check.
    pub enabled: Option<bool>,
    /// Minimum mean edge strength.
    pub min_edge_strength: Option<f64>,
}

/// Resolution check configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Enable/disable the resolution check.
    pub enabled: Option<bool>,
    /// Minimum width in pixels.
    pub min_width: Option<u32>,
    /// Minimum height in pixels.
    pub min_height: Option<u32>,
}

/// File size check configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FileSizeConfig {
    /// Enable/disable the file size check.
    pub enabled: Option<bool>,
    /// Minimum file size in bytes.
    pub min_bytes: Option<u64>,
}

/// Duplicate detection configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DedupeConfig {
    /// Enable/disable duplicate detection.
    pub enabled: Option<bool>,
    /// Byte-size window for size-proximity matching.
    pub tolerance_bytes: Option<u64>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "jsonl".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Show progress bar.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/photo-vet/config.toml`
    /// 2. Project-local: `.photo-vet.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as
    /// warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        // Load XDG config (lowest priority)
        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        // Load project-local config (higher priority, merged)
        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        // Validate merged config
        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        if let Some(l) = self.brightness.min_luma {
            if !(0.0..=255.0).contains(&l) {
                return Err(format!("brightness.min_luma must be 0.0-255.0, got {l}"));
            }
        }
        if let Some(s) = self.sharpness.min_edge_strength {
            if s < 0.0 {
                return Err(format!(
                    "sharpness.min_edge_strength must be non-negative, got {s}"
                ));
            }
        }
        if let Some(w) = self.resolution.min_width {
            if w == 0 {
                return Err(format!("resolution.min_width must be positive, got {w}"));
            }
        }
        if let Some(h) = self.resolution.min_height {
            if h == 0 {
                return Err(format!("resolution.min_height must be positive, got {h}"));
            }
        }

        if let Some(ref f) = self.output.format {
            if f != "json" && f != "jsonl" {
                return Err(format!("output.format must be 'json' or 'jsonl', got '{f}'"));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        // General
        self.general.recursive = other.general.recursive.or(self.general.recursive);

        // Brightness
        self.brightness.enabled = other.brightness.enabled.or(self.brightness.enabled);
        self.brightness.min_luma = other.brightness.min_luma.or(self.brightness.min_luma);

        // Sharpness
        self.sharpness.enabled = other.sharpness.enabled.or(self.sharpness.enabled);
        self.sharpness.min_edge_strength = other
            .sharpness
            .min_edge_strength
            .or(self.sharpness.min_edge_strength);

        // Resolution
        self.resolution.enabled = other.resolution.enabled.or(self.resolution.enabled);
        self.resolution.min_width = other.resolution.min_width.or(self.resolution.min_width);
        self.resolution.min_height = other.resolution.min_height.or(self.resolution.min_height);

        // File size
        self.filesize.enabled = other.filesize.enabled.or(self.filesize.enabled);
        self.filesize.min_bytes = other.filesize.min_bytes.or(self.filesize.min_bytes);

        // Dedupe
        self.dedupe.enabled = other.dedupe.enabled.or(self.dedupe.enabled);
        self.dedupe.tolerance_bytes = other.dedupe.tolerance_bytes.or(self.dedupe.tolerance_bytes);

        // Output
        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("photo-vet").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.photo-vet.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".photo-vet.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}

//! Check command - vet candidate uploads for quality and duplicates.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use photo_vet_adapters::{load_upload, FsUploadSource, RasterDecoder};
use photo_vet_core::{
    BrightnessCheck, BrightnessConfig, DecisionRecord, DuplicateDetector, FileSizeCheck,
    FileSizeConfig, NeverDuplicate, ProgressEvent, QualityAnalyzer, QualityCheck, ResolutionCheck,
    ResolutionConfig, SharpnessCheck, SharpnessConfig, SizeProximityDetector, UploadFile,
    UploadGate, UploadSource,
};
use tracing::{debug, info, warn};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{JsonOutput, ProgressBar};

/// Output format for decision records.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one decision per line)
    #[default]
    Jsonl,
    /// Single JSON array
    Json,
}

/// Hardcoded default values for thresholds.
mod defaults {
    pub const MIN_LUMA: f64 = 50.0;
    pub const MIN_EDGE_STRENGTH: f64 = 15.0;
    pub const MIN_WIDTH: u32 = 400;
    pub const MIN_HEIGHT: u32 = 400;
    pub const MIN_BYTES: u64 = 50_000;
    pub const DEDUPE_TOLERANCE: u64 = 1000;
}

/// Parse and validate a luma value (0.0-255.0).
fn parse_luma(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=255.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0.0..=255.0"))
    }
}

/// Shared arguments for vetting uploads.
#[derive(Args, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Files or directories to vet
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Previously accepted files to match duplicates against
    #[arg(long, value_name = "FILE")]
    pub existing: Vec<PathBuf>,

    /// Disable the brightness check
    #[arg(long)]
    pub no_brightness: bool,

    /// Disable the sharpness check
    #[arg(long)]
    pub no_sharpness: bool,

    /// Disable the resolution check
    #[arg(long)]
    pub no_resolution: bool,

    /// Disable the file size check
    #[arg(long)]
    pub no_filesize: bool,

    /// Disable duplicate detection
    #[arg(long)]
    pub no_dedupe: bool,

    /// Minimum mean luma (0.0-255.0)
    #[arg(long, value_parser = parse_luma)]
    pub min_luma: Option<f64>,

    /// Minimum mean edge strength
    #[arg(long)]
    pub min_edge_strength: Option<f64>,

    /// Minimum width in pixels
    #[arg(long)]
    pub min_width: Option<u32>,

    /// Minimum height in pixels
    #[arg(long)]
    pub min_height: Option<u32>,

    /// Minimum file size in bytes
    #[arg(long)]
    pub min_bytes: Option<u64>,

    /// Byte-size window for duplicate matching
    #[arg(long, value_name = "BYTES")]
    pub dedupe_tolerance: Option<u64>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Merged config (populated by `with_config`, not from CLI).
    #[arg(skip)]
    config: Option<AppConfig>,
}

impl CheckArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    ///
    /// For boolean flags: CLI `--no-*` always wins. Config can enable/disable
    /// only when the CLI flag wasn't explicitly set.
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        // Recursive: config applies only if CLI --recursive not passed
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        // Check enables: CLI --no-* takes precedence, then config, then
        // default (enabled)
        if !args.no_brightness {
            if let Some(enabled) = config.brightness.enabled {
                args.no_brightness = !enabled;
            }
        }
        if !args.no_sharpness {
            if let Some(enabled) = config.sharpness.enabled {
                args.no_sharpness = !enabled;
            }
        }
        if !args.no_resolution {
            if let Some(enabled) = config.resolution.enabled {
                args.no_resolution = !enabled;
            }
        }
        if !args.no_filesize {
            if let Some(enabled) = config.filesize.enabled {
                args.no_filesize = !enabled;
            }
        }
        if !args.no_dedupe {
            if let Some(enabled) = config.dedupe.enabled {
                args.no_dedupe = !enabled;
            }
        }

        // Thresholds: CLI > config (accessor provides hardcoded fallback)
        args.min_luma = args.min_luma.or(config.brightness.min_luma);
        args.min_edge_strength = args
            .min_edge_strength
            .or(config.sharpness.min_edge_strength);
        args.min_width = args.min_width.or(config.resolution.min_width);
        args.min_height = args.min_height.or(config.resolution.min_height);
        args.min_bytes = args.min_bytes.or(config.filesize.min_bytes);
        args.dedupe_tolerance = args.dedupe_tolerance.or(config.dedupe.tolerance_bytes);

        // Output format: CLI > config (accessor provides fallback)
        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_ref()
                .and_then(|s| match s.as_str() {
                    "json" => Some(OutputFormat::Json),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    _ => None,
                });
        }

        // Boolean output options: CLI flag wins, then config
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        args.config = Some(config.clone());

        args
    }

    /// Get minimum luma with fallback to hardcoded default.
    fn min_luma(&self) -> f64 {
        self.min_luma.unwrap_or(defaults::MIN_LUMA)
    }

    /// Get minimum edge strength with fallback to hardcoded default.
    fn min_edge_strength(&self) -> f64 {
        self.min_edge_strength.unwrap_or(defaults::MIN_EDGE_STRENGTH)
    }

    /// Get minimum width with fallback to hardcoded default.
    fn min_width(&self) -> u32 {
        self.min_width.unwrap_or(defaults::MIN_WIDTH)
    }

    /// Get minimum height with fallback to hardcoded default.
    fn min_height(&self) -> u32 {
        self.min_height.unwrap_or(defaults::MIN_HEIGHT)
    }

    /// Get minimum file size with fallback to hardcoded default.
    fn min_bytes(&self) -> u64 {
        self.min_bytes.unwrap_or(defaults::MIN_BYTES)
    }

    /// Get dedupe tolerance with fallback to hardcoded default.
    fn dedupe_tolerance(&self) -> u64 {
        self.dedupe_tolerance.unwrap_or(defaults::DEDUPE_TOLERANCE)
    }

    /// Get output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Jsonl)
    }
}

/// Result of running the check command.
#[allow(dead_code)] // Fields exposed for programmatic use
pub struct CheckResult {
    /// Number of candidates vetted.
    pub vetted: usize,
    /// Number of candidates accepted.
    pub accepted: usize,
    /// Number of candidates rejected.
    pub rejected: usize,
    /// Number of candidates skipped (unreadable).
    pub skipped: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the check command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &CheckArgs) -> Result<CheckResult> {
    info!("Vetting {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    let checks = build_checks(args);
    if checks.is_empty() && args.no_dedupe {
        warn!("All checks disabled, nothing to vet against");
        return Ok(CheckResult {
            vetted: 0,
            accepted: 0,
            rejected: 0,
            skipped: 0,
            exit_code: ExitCode::Success,
        });
    }

    let detector: Box<dyn DuplicateDetector> = if args.no_dedupe {
        Box::new(NeverDuplicate)
    } else {
        Box::new(SizeProximityDetector::new(args.dedupe_tolerance()))
    };

    let gate = UploadGate::new(
        Box::new(RasterDecoder),
        QualityAnalyzer::new(checks),
        detector,
    );

    // Seed the accepted set from previously accepted files
    let mut existing: Vec<UploadFile> = Vec::new();
    for path in &args.existing {
        match load_upload(path) {
            Ok(file) => existing.push(file),
            Err(e) => warn!("Ignoring existing file {}: {e:#}", path.display()),
        }
    }
    debug!("Loaded {} existing accepted files", existing.len());

    let source = FsUploadSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());
    let progress_bar = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);

    let output = JsonOutput::stdout();

    process_uploads(&source, &gate, existing, &output, &progress_bar, args)
}

/// Build the quality check list based on merged args (CLI + config).
fn build_checks(args: &CheckArgs) -> Vec<Box<dyn QualityCheck>> {
    let mut checks: Vec<Box<dyn QualityCheck>> = Vec::new();

    if !args.no_brightness {
        checks.push(Box::new(BrightnessCheck::new(BrightnessConfig {
            min_luma: args.min_luma(),
        })));
        debug!("Enabled brightness check");
    }
    if !args.no_sharpness {
        checks.push(Box::new(SharpnessCheck::new(SharpnessConfig {
            min_edge_strength: args.min_edge_strength(),
        })));
        debug!("Enabled sharpness check");
    }
    if !args.no_resolution {
        checks.push(Box::new(ResolutionCheck::new(ResolutionConfig {
            min_width: args.min_width(),
            min_height: args.min_height(),
        })));
        debug!("Enabled resolution check");
    }
    if !args.no_filesize {
        checks.push(Box::new(FileSizeCheck::new(FileSizeConfig {
            min_bytes: args.min_bytes(),
        })));
        debug!("Enabled file size check");
    }

    checks
}

/// Vet candidate uploads one by one, growing the accepted set as files
/// pass so that later candidates in the same batch are matched against
/// them.
fn process_uploads(
    source: &FsUploadSource,
    gate: &UploadGate,
    mut existing: Vec<UploadFile>,
    output: &JsonOutput,
    progress: &ProgressBar,
    args: &CheckArgs,
) -> Result<CheckResult> {
    use photo_vet_core::{DecisionOutput, ProgressSink};

    let total = source.count_hint();
    let mut vetted = 0usize;
    let mut accepted = 0usize;
    let mut rejected = 0usize;
    let mut skipped = 0usize;
    let mut all_records: Vec<DecisionRecord> = Vec::new();

    for (index, upload_result) in source.uploads().enumerate() {
        let file = match upload_result {
            Ok(file) => file,
            Err(e) => {
                // Note: error message contains the path via anyhow context
                progress.on_event(ProgressEvent::Skipped {
                    name: format!("upload {index}"),
                    reason: e.to_string(),
                });
                skipped += 1;
                continue;
            }
        };

        progress.on_event(ProgressEvent::Started {
            name: file.name.clone(),
            index,
            total,
        });

        let decision = gate.analyze(&file, &existing);

        if decision.accepted {
            accepted += 1;
        } else {
            rejected += 1;
        }

        let record = DecisionRecord {
            name: file.name.clone(),
            timestamp: iso_timestamp(),
            decision,
        };

        // Accepted files join the set subsequent candidates dedupe against
        if record.decision.accepted {
            existing.push(file);
        }

        progress.on_event(ProgressEvent::Decided {
            record: record.clone(),
        });

        match args.format() {
            OutputFormat::Jsonl => {
                output.write(&record)?;
            }
            OutputFormat::Json => {
                all_records.push(record);
            }
        }

        vetted += 1;
    }

    if matches!(args.format(), OutputFormat::Json) {
        output.write_array(&all_records, args.pretty)?;
    }

    output.flush()?;

    progress.on_event(ProgressEvent::Finished {
        accepted,
        rejected,
        skipped,
    });

    let exit_code = if rejected > 0 {
        ExitCode::RejectionsFound
    } else {
        ExitCode::Success
    };

    Ok(CheckResult {
        vetted,
        accepted,
        rejected,
        skipped,
        exit_code,
    })
}

/// Generate ISO 8601 UTC timestamp (RFC 3339 format).
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}

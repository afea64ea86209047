//! CLI command definitions and handlers.

pub mod check;

use clap::{Parser, Subcommand};

/// Photo Vet - quality and duplicate vetting for listing photos
#[derive(Parser)]
#[command(name = "photo-vet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared check arguments (paths, thresholds, flags).
    #[command(flatten)]
    pub check: check::CheckArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Vet images for quality issues and duplicates
    Check(check::CheckArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every vetted file was accepted.
    Success,
    /// At least one file was rejected.
    RejectionsFound,
    /// The run itself failed.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::from(0),
            ExitCode::RejectionsFound => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}

//! Command-line interface definitions for diffview.
//!
//! Note: Field-level documentation is provided via clap attributes, so we
//! allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for diffview.
#[derive(Parser)]
#[command(
    name = "dv",
    version = crate::VERSION,
    about = "Line-level text diff with unified-style context collapsing",
    long_about = "Computes a line-level diff between two text files using an LCS \
                  alignment, collapsed to a configurable window of unchanged context"
)]
pub struct Cli {
    /// Original file
    pub original: Option<PathBuf>,

    /// Modified file
    pub modified: Option<PathBuf>,

    /// Unchanged context lines around each change (0 shows changes only)
    #[arg(short = 'U', long, value_name = "N")]
    pub context: Option<usize>,

    /// Emit the structured line list as JSON
    #[arg(long, conflicts_with = "stat")]
    pub json: bool,

    /// Print only the additions/deletions summary
    #[arg(long)]
    pub stat: bool,

    /// When to colorize output
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Generate shell completion scripts and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Colorization policy as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    /// Colorize when writing to a terminal
    Auto,
    /// Always colorize
    Always,
    /// Never colorize
    Never,
}

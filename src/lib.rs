#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
// Allow pedantic strict lints that create false positives in this codebase
#![allow(clippy::arithmetic_side_effects)] // Line counters cannot overflow
#![allow(clippy::indexing_slicing)] // Bounds checked by the cursor logic

//! # Diffview - Line-Level Text Diff Engine
//!
//! Diffview computes a human-readable difference between two versions of a
//! text file. The core is a longest-common-subsequence (LCS) alignment over
//! line sequences followed by collapsing into a unified-diff-style view with
//! a configurable window of unchanged context around each change.
//!
//! The engine is pure and total: any two strings produce a well-formed diff,
//! with no error paths and no shared state. Everything fallible (file I/O,
//! binary detection, size ceilings, rendering) lives in the host layers.
//!
//! ## Architecture
//!
//! - [`diff`]: The diff engine (alignment, line building, context collapsing)
//!   plus host-side helpers (binary detection, stats).
//! - [`config`]: Configuration parsing and defaults.
//! - [`output`]: Rendering of diff results (terminal and JSON).
//! - [`cli`]: Command-line argument definitions.
//!
//! ## Example Usage
//!
//! ```
//! use diffview::diff::{DiffKind, compute_diff};
//!
//! let lines = compute_diff("a\nb\nc", "a\nx\nc", 3);
//! assert_eq!(lines.len(), 4);
//! assert_eq!(lines[1].kind, DiffKind::Removed);
//! assert_eq!(lines[2].kind, DiffKind::Added);
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Configuration parsing, validation, and defaults.
pub mod config;

/// The diff engine: LCS alignment, diff line building, context collapsing.
pub mod diff;

/// Output formatting for diff results.
pub mod output;

/// Current version of the diffview binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file path relative to the home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/diffview/config.toml";

//! Configuration loading and defaults.
//!
//! Configuration lives in a TOML file (by default
//! `~/.config/diffview/config.toml`, overridable with the
//! `DIFFVIEW_CONFIG_PATH` environment variable). A missing file is replaced
//! with written defaults so users have something to edit.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Diff engine policy settings.
    #[serde(default)]
    pub diff: DiffConfig,

    /// Output rendering settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings applied when computing diffs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Unchanged context lines kept around each change.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Ceiling on the LCS table size (`original lines * modified lines`).
    ///
    /// The engine itself never refuses input; this is the caller-side guard
    /// against the O(m·n) cost on very large, dissimilar files.
    #[serde(default = "default_max_cells")]
    pub max_cells: u64,
}

/// Settings applied when rendering diffs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// When to colorize terminal output.
    #[serde(default)]
    pub color: ColorChoice,
}

/// Colorization policy for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colorize when writing to a terminal.
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

/// Default for [`DiffConfig::context_lines`].
const fn default_context_lines() -> usize {
    crate::diff::DEFAULT_CONTEXT_LINES
}

/// Default for [`DiffConfig::max_cells`] (roughly two 10k-line files).
const fn default_max_cells() -> u64 {
    100_000_000
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
            max_cells: default_max_cells(),
        }
    }
}

impl Config {
    /// Resolve the configuration file path.
    ///
    /// `DIFFVIEW_CONFIG_PATH` wins over the default location under the home
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("DIFFVIEW_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(crate::DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from a file, creating it with defaults if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or a default file cannot be written.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Save configuration to a file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created, serialization
    /// fails, or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

//! Configuration for the previewers.
//!
//! Values come from three layers, later ones winning:
//! 1. Built-in defaults
//! 2. `config.toml` in the user config directory (or `$FZF_PREVIEW_CONFIG`)
//! 3. `FZF_PREVIEW_CMD`, `FZF_DIFF_PREVIEW_CMD`, `FZF_PREVIEW_COLUMNS`,
//!    `FZF_PREVIEW_LINES`
//!
//! The resolved [`Config`] is handed to each previewer explicitly; nothing
//! below the binaries reads the environment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_PREVIEW_CMD: &str = "FZF_PREVIEW_CMD";
pub const ENV_DIFF_PREVIEW_CMD: &str = "FZF_DIFF_PREVIEW_CMD";
pub const ENV_PREVIEW_COLUMNS: &str = "FZF_PREVIEW_COLUMNS";
pub const ENV_PREVIEW_LINES: &str = "FZF_PREVIEW_LINES";
/// Points at an alternative config file.
pub const ENV_CONFIG_FILE: &str = "FZF_PREVIEW_CONFIG";

const CONFIG_DIR_NAME: &str = "fzf-preview";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub commands: CommandsConfig,
    pub geometry: Geometry,
    pub commit: CommitConfig,
    pub logging: LoggingConfig,
}

/// Custom commands that replace the built-in renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Generic file preview command; the target path is appended.
    pub preview: Option<String>,
    /// Diff/blame viewer; text is piped on stdin.
    pub diff_preview: Option<String>,
}

/// Preview pane size handed to the image renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub columns: u16,
    pub lines: u16,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            columns: 80,
            lines: 24,
        }
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.lines)
    }
}

/// Commit previewer behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitConfig {
    /// Print the raw `git show` output when no diff viewer is configured.
    /// Off by default: without a viewer the commit previewer prints nothing.
    pub print_without_viewer: bool,
}

/// Diagnostic logging, written to stderr.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `debug` or `fzf_preview=trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "off".to_string(),
        }
    }
}

impl Config {
    /// Default config file location (`~/.config/fzf-preview/config.toml` on Linux).
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(ENV_CONFIG_FILE) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific path, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Resolve the effective configuration for this process.
    ///
    /// A broken config file never stops a preview: defaults are used and the
    /// load error is handed back so it can be logged once logging is set up.
    pub fn resolve() -> (Self, Option<anyhow::Error>) {
        let (config, error) = match Self::load() {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        };
        (config.with_env(|key| std::env::var(key).ok()), error)
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(cmd) = lookup(ENV_PREVIEW_CMD) {
            self.commands.preview = Some(cmd);
        }
        if let Some(cmd) = lookup(ENV_DIFF_PREVIEW_CMD) {
            self.commands.diff_preview = Some(cmd);
        }
        if let Some(columns) = parse_dimension(ENV_PREVIEW_COLUMNS, lookup(ENV_PREVIEW_COLUMNS)) {
            self.geometry.columns = columns;
        }
        if let Some(lines) = parse_dimension(ENV_PREVIEW_LINES, lookup(ENV_PREVIEW_LINES)) {
            self.geometry.lines = lines;
        }
        self
    }

    /// Generic preview command, if one is set and non-empty.
    pub fn preview_command(&self) -> Option<&str> {
        non_empty(self.commands.preview.as_deref())
    }

    /// Diff viewer command, if one is set and non-empty.
    pub fn diff_preview_command(&self) -> Option<&str> {
        non_empty(self.commands.diff_preview.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_dimension(name: &str, value: Option<String>) -> Option<u16> {
    let value = value?;
    match value.trim().parse::<u16>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            tracing::debug!(variable = name, value = %value, "ignoring invalid preview size");
            None
        }
    }
}

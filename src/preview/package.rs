//! Package lookup in a JSON cache of `{name, path}` records.

use super::text::write_text;
use crate::config::Config;
use crate::error::{PreviewError, ToolError};
use crate::process::Runner;
use crate::theme::Theme;
use crate::tools::CustomCommand;
use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Lines shown for a non-JSON location without a preview command.
const HEAD_LINES: usize = 20;

/// One cache entry. Fields other than these are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRecord {
    pub name: Option<String>,
    pub path: Option<String>,
}

impl CacheRecord {
    /// Read the string fields of one cache entry.
    ///
    /// The cache is written by another program: entries that are not objects
    /// yield `None`, and `name`/`path` values that are not strings are
    /// dropped, both with a warning.
    fn from_value(index: usize, value: &Value) -> Option<Self> {
        let Some(object) = value.as_object() else {
            tracing::warn!(index, "cache entry is not an object, skipping");
            return None;
        };

        let field = |key: &str| match object.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => {
                tracing::warn!(index, key, value = %other, "cache field is not a string, ignoring");
                None
            }
        };

        Some(Self {
            name: field("name"),
            path: field("path"),
        })
    }
}

/// The package cache, loaded once per invocation.
#[derive(Debug, Clone, Default)]
pub struct PackageCache {
    records: Vec<CacheRecord>,
}

impl PackageCache {
    pub fn load(path: &Path) -> Result<Self, PreviewError> {
        let content = fs::read_to_string(path).map_err(|source| PreviewError::CacheRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| PreviewError::CacheParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a JSON array of records. Only a malformed document or a
    /// non-array top level is an error; odd entries are skipped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<Value> = serde_json::from_str(json)?;
        let records = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| CacheRecord::from_value(index, entry))
            .collect();
        Ok(Self { records })
    }

    /// Paths of every record named exactly `name`, in cache order.
    pub fn locations(&self, name: &str) -> Vec<String> {
        self.records
            .iter()
            .filter(|record| record.name.as_deref() == Some(name))
            .filter_map(|record| {
                if record.path.is_none() {
                    tracing::warn!(name, "cache record has no path, skipping");
                }
                record.path.clone()
            })
            .collect()
    }
}

/// Result of a package lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageOutcome {
    NotFound,
    Rendered {
        locations: Vec<String>,
        /// More than one location matched and a warning was printed
        duplicate: bool,
    },
}

pub struct PackagePreviewer<'a> {
    config: &'a Config,
    runner: &'a dyn Runner,
    theme: Theme,
}

impl<'a> PackagePreviewer<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn Runner) -> Self {
        Self {
            config,
            runner,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Load `cache_path` and render every location of `name`.
    pub fn preview(
        &self,
        name: &str,
        cache_path: &Path,
        out: &mut dyn Write,
    ) -> Result<PackageOutcome, PreviewError> {
        let cache = PackageCache::load(cache_path)?;
        self.render(&cache, name, out)
    }

    pub fn render(
        &self,
        cache: &PackageCache,
        name: &str,
        out: &mut dyn Write,
    ) -> Result<PackageOutcome, PreviewError> {
        let locations = cache.locations(name);

        if locations.is_empty() {
            writeln!(out, "No package information found for {}", name)?;
            return Ok(PackageOutcome::NotFound);
        }

        let duplicate = locations.len() > 1;
        if duplicate {
            let warning = format!("Warning: More than one location found for {}", name);
            writeln!(out, "{}", self.theme.warning_text(&warning))?;
        }

        for location in &locations {
            writeln!(out, "{}", location)?;
            self.render_location(Path::new(location), out)?;
        }

        Ok(PackageOutcome::Rendered {
            locations,
            duplicate,
        })
    }

    fn render_location(&self, location: &Path, out: &mut dyn Write) -> Result<(), PreviewError> {
        if let Some(command) = self.config.preview_command() {
            match self
                .runner
                .stream(&CustomCommand::new(command).for_path(location), out)
            {
                Ok(()) => {}
                Err(e @ ToolError::NonZeroExit { .. }) => {
                    tracing::debug!(error = %e, "preview command failed");
                }
                Err(e) => writeln!(out, "Error previewing file: {}", e)?,
            }
            return Ok(());
        }

        if !location.exists() {
            tracing::debug!(location = %location.display(), "location does not exist");
            return Ok(());
        }

        match summarize(location) {
            Ok(text) => write_text(out, &text)?,
            Err(e) => writeln!(out, "Error reading file: {:#}", e)?,
        }
        Ok(())
    }
}

/// Pretty JSON for `.json` files, otherwise the first lines of the file.
fn summarize(location: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(location)?;

    if location.extension().is_some_and(|ext| ext == "json") {
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).context("invalid JSON")?;
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let text = String::from_utf8_lossy(&bytes);
    Ok(text.split_inclusive('\n').take(HEAD_LINES).collect())
}

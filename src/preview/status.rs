//! git status preview: raw content for untracked files, a diff otherwise.

use super::diff::{render_diff, DiffOutcome};
use super::text;
use crate::config::Config;
use crate::error::PreviewError;
use crate::process::Runner;
use crate::tools::{Git, RenderedWith};
use std::io::Write;
use std::path::Path;

const UNTRACKED_PREFIX: &str = "?? ";

/// Whether `git status -s` output marks the path as untracked.
pub fn is_untracked(status: &str) -> bool {
    status.starts_with(UNTRACKED_PREFIX)
}

/// What the status previewer showed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPreview {
    /// Untracked file: its content
    Untracked(RenderedWith),
    /// Tracked file: its working-tree diff
    Changes(DiffOutcome),
}

pub struct StatusPreviewer<'a> {
    config: &'a Config,
    runner: &'a dyn Runner,
}

impl<'a> StatusPreviewer<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn Runner) -> Self {
        Self { config, runner }
    }

    pub fn preview(&self, path: &Path, out: &mut dyn Write) -> Result<StatusPreview, PreviewError> {
        let git = Git::new();
        let status = self
            .runner
            .capture(&git.status_short(path))
            .unwrap_or_else(|e| {
                tracing::debug!(error = %e, "git status failed");
                String::new()
            });

        if is_untracked(&status) {
            let rendered_with = text::render_text(self.runner, path, out)?;
            return Ok(StatusPreview::Untracked(rendered_with));
        }

        let diff = self.runner.capture(&git.diff(path)).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "git diff failed");
            String::new()
        });
        let outcome = render_diff(
            self.runner,
            self.config.diff_preview_command(),
            &diff,
            true,
            out,
        )?;
        Ok(StatusPreview::Changes(outcome))
    }
}

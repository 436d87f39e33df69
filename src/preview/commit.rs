//! Commit diff preview.

use super::diff::{render_diff, DiffOutcome};
use crate::config::Config;
use crate::error::PreviewError;
use crate::process::Runner;
use crate::tools::Git;
use std::io::Write;

/// Leading hex run of a finder line such as `abc1234 fix bug`, or the whole
/// token when it does not start with one (`HEAD`, branch names).
pub fn commit_id(token: &str) -> &str {
    let end = token
        .find(|c: char| !matches!(c, '0'..='9' | 'a'..='f'))
        .unwrap_or(token.len());
    if end == 0 {
        token
    } else {
        &token[..end]
    }
}

/// Shows a commit through the diff viewer.
pub struct CommitPreviewer<'a> {
    config: &'a Config,
    runner: &'a dyn Runner,
}

impl<'a> CommitPreviewer<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn Runner) -> Self {
        Self { config, runner }
    }

    pub fn preview(&self, token: &str, out: &mut dyn Write) -> Result<DiffOutcome, PreviewError> {
        let id = commit_id(token);
        tracing::debug!(token, id, "showing commit");

        let shown = self
            .runner
            .capture(&Git::new().show(id))
            .unwrap_or_else(|e| {
                tracing::debug!(error = %e, "git show failed");
                String::new()
            });

        render_diff(
            self.runner,
            self.config.diff_preview_command(),
            &shown,
            self.config.commit.print_without_viewer,
            out,
        )
    }
}

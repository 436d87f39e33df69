//! Diff output through the configured viewer.

use super::text::write_text;
use crate::error::PreviewError;
use crate::process::Runner;
use crate::tools::CustomCommand;
use std::io::Write;

/// Where diff text ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Piped into the diff viewer
    Viewer,
    /// Printed as-is (no viewer, or the viewer could not be started)
    Raw,
    /// Fetched but not shown
    Suppressed,
}

/// Send `diff` to `viewer`, falling back to printing it raw when the viewer
/// can't be started.
///
/// With no viewer configured the diff is printed only if `print_without_viewer`.
pub(crate) fn render_diff(
    runner: &dyn Runner,
    viewer: Option<&str>,
    diff: &str,
    print_without_viewer: bool,
    out: &mut dyn Write,
) -> Result<DiffOutcome, PreviewError> {
    let Some(viewer) = viewer else {
        if print_without_viewer {
            write_text(out, diff)?;
            return Ok(DiffOutcome::Raw);
        }
        return Ok(DiffOutcome::Suppressed);
    };

    match runner.pipe(&CustomCommand::new(viewer).with_args(&[]), diff, out) {
        Ok(()) => Ok(DiffOutcome::Viewer),
        Err(e) if e.is_not_found() => {
            tracing::debug!(error = %e, "diff viewer unavailable, printing raw diff");
            write_text(out, diff)?;
            Ok(DiffOutcome::Raw)
        }
        Err(e) => {
            tracing::debug!(error = %e, "diff viewer reported failure");
            Ok(DiffOutcome::Viewer)
        }
    }
}

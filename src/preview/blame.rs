//! git blame preview.

use crate::config::Config;
use crate::error::{PreviewError, ToolError};
use crate::mime;
use crate::process::Runner;
use crate::tools::{CustomCommand, FileSniffer, Git};
use std::io::Write;
use std::path::Path;

/// What the blame previewer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlameOutcome {
    /// Binary file handed to the generic preview command
    Delegated,
    /// Binary file and no preview command: nothing rendered
    Skipped,
    /// Blame piped through the diff viewer
    Piped,
    /// Blame streamed straight to the terminal
    Streamed,
    /// The viewer pipeline failed and a one-line error was printed
    Failed,
}

/// Annotates text files with `git blame`.
pub struct BlamePreviewer<'a> {
    config: &'a Config,
    runner: &'a dyn Runner,
}

impl<'a> BlamePreviewer<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn Runner) -> Self {
        Self { config, runner }
    }

    /// Blame `path`, or hand it off when it is binary.
    ///
    /// `extension` names the language for the diff viewer; when `None` it is
    /// taken from the path.
    pub fn preview(
        &self,
        path: &Path,
        extension: Option<&str>,
        out: &mut dyn Write,
    ) -> Result<BlameOutcome, PreviewError> {
        if self.is_binary(path) {
            return Ok(self.delegate(path, out));
        }

        let extension = extension
            .map(str::to_string)
            .unwrap_or_else(|| extension_of(path));

        let Some(viewer) = self.config.diff_preview_command() else {
            let blame = Git::new().blame_abbreviated(path);
            if let Err(e) = self.runner.stream(&blame, out) {
                tracing::debug!(error = %e, "git blame failed");
            }
            return Ok(BlameOutcome::Streamed);
        };

        match self.blame_through_viewer(viewer, path, &extension, out) {
            Ok(()) => Ok(BlameOutcome::Piped),
            Err(e) => {
                tracing::debug!(error = %e, "blame pipeline failed");
                writeln!(out, "Error running git blame on {}", path.display())?;
                Ok(BlameOutcome::Failed)
            }
        }
    }

    /// Binary or image according to `file`, or the extension when `file`
    /// is not installed. Unknown extensions count as text.
    pub fn is_binary(&self, path: &Path) -> bool {
        let sniffer = FileSniffer::new();
        if sniffer.is_available(self.runner) {
            return match sniffer.mime_type(self.runner, path) {
                Ok(mime_type) => mime::is_binary_or_image(&mime_type),
                Err(e) => {
                    tracing::debug!(error = %e, "mime sniffing failed");
                    false
                }
            };
        }

        mime::guess(path).is_some_and(mime::is_binary_or_image)
    }

    fn delegate(&self, path: &Path, out: &mut dyn Write) -> BlameOutcome {
        let Some(command) = self.config.preview_command() else {
            tracing::debug!(path = %path.display(), "binary file, no preview command");
            return BlameOutcome::Skipped;
        };

        let invocation = CustomCommand::new(command).for_path(path);
        if let Err(e) = self.runner.stream(&invocation, out) {
            tracing::debug!(error = %e, "preview command failed");
        }
        BlameOutcome::Delegated
    }

    fn blame_through_viewer(
        &self,
        viewer: &str,
        path: &Path,
        extension: &str,
        out: &mut dyn Write,
    ) -> Result<(), ToolError> {
        let blame = self.runner.capture(&Git::new().blame(path))?;

        let args: &[&str] = if extension.is_empty() {
            &[]
        } else {
            &["--default-language", extension]
        };

        match self
            .runner
            .pipe(&CustomCommand::new(viewer).with_args(args), &blame, out)
        {
            // The viewer started and got its input; its exit status is its own business.
            Err(ToolError::NonZeroExit { .. }) => Ok(()),
            other => other,
        }
    }
}

/// File extension without the dot, empty when there is none.
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}

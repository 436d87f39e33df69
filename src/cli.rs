//! Command-line front end shared by the preview binaries.
//!
//! Each binary declares its arguments here and hands a closure to [`run`],
//! which takes care of config, logging, stdout and exit codes.

use crate::config::Config;
use crate::error::PreviewError;
use crate::logging;
use crate::process::SystemRunner;
use crate::theme::{current_theme, Theme};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version string with git hash and build date (dev builds)
#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("FZF_PREVIEW_BUILD_DATE"),
    ")"
);

/// Version string with build date only (release builds)
#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FZF_PREVIEW_BUILD_DATE"),
    ")"
);

/// Preview a file, directory or image in the fzf preview pane
#[derive(Debug, Parser)]
#[command(name = "fzf-preview", version = VERSION)]
#[command(after_help = "Environment:\n  \
    FZF_PREVIEW_COLUMNS, FZF_PREVIEW_LINES   Image size (default 80x24)\n  \
    FZF_PREVIEW_LOG                         Log filter, e.g. debug")]
pub struct ContentArgs {
    /// File or directory to preview
    #[arg(allow_hyphen_values = true)]
    pub path: PathBuf,
}

/// Show git blame for a file, skipping binaries and images
#[derive(Debug, Parser)]
#[command(name = "fzf-git-blame-preview", version = VERSION)]
#[command(after_help = "Environment:\n  \
    FZF_DIFF_PREVIEW_CMD   Viewer the blame is piped into (e.g. delta)\n  \
    FZF_PREVIEW_CMD        Preview command used for binary files")]
pub struct BlameArgs {
    /// File to annotate
    #[arg(allow_hyphen_values = true)]
    pub file_path: PathBuf,

    /// Language hint for the viewer (defaults to the file's extension)
    #[arg(allow_hyphen_values = true)]
    pub extension: Option<String>,
}

/// Show a commit from a `git log --oneline` line
#[derive(Debug, Parser)]
#[command(name = "fzf-git-commit-preview", version = VERSION)]
#[command(after_help = "Environment:\n  \
    FZF_DIFF_PREVIEW_CMD   Viewer the commit is piped into (e.g. delta)")]
pub struct CommitArgs {
    /// Commit hash, or a line starting with one
    #[arg(allow_hyphen_values = true)]
    pub commit: String,
}

/// Show a file's content when untracked, its diff otherwise
#[derive(Debug, Parser)]
#[command(name = "fzf-git-status-preview", version = VERSION)]
#[command(after_help = "Environment:\n  \
    FZF_DIFF_PREVIEW_CMD   Viewer the diff is piped into (e.g. delta)")]
pub struct StatusArgs {
    /// File from `git status`
    #[arg(allow_hyphen_values = true)]
    pub file_path: PathBuf,
}

/// Show every location of a package listed in a JSON cache
#[derive(Debug, Parser)]
#[command(name = "fzf-package-preview", version = VERSION)]
#[command(after_help = "Environment:\n  \
    FZF_PREVIEW_CMD   Command used to render each location")]
pub struct PackageArgs {
    /// Exact package name
    #[arg(allow_hyphen_values = true)]
    pub name: String,

    /// JSON array of {"name", "path"} records
    #[arg(allow_hyphen_values = true)]
    pub cache_file: PathBuf,
}

/// Process-wide state handed to a previewer.
pub struct Session {
    pub config: Config,
    pub runner: SystemRunner,
    pub theme: Theme,
}

/// Parse the process arguments.
///
/// `Ok(None)` means help or version was printed and the process should exit
/// successfully.
pub fn parse<A: Parser>() -> Result<Option<A>, PreviewError> {
    parse_from(std::env::args_os())
}

pub fn parse_from<A, I, T>(args: I) -> Result<Option<A>, PreviewError>
where
    A: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match A::try_parse_from(args) {
        Ok(args) => Ok(Some(args)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            Ok(None)
        }
        Err(e) => Err(PreviewError::Usage(e.render().to_string())),
    }
}

/// Run a previewer binary end to end and turn the outcome into an exit code.
pub fn run<A, F>(preview: F) -> ExitCode
where
    A: Parser,
    F: FnOnce(A, &Session, &mut dyn Write) -> Result<(), PreviewError>,
{
    let theme = current_theme();
    let args = match parse::<A>() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => return report(&e, &theme),
    };

    let (config, load_error) = Config::resolve();
    logging::init(&config.logging.level);
    if let Some(e) = load_error {
        tracing::warn!("{:#}; using defaults", e);
    }

    let session = Session {
        config,
        runner: SystemRunner::new(),
        theme,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = preview(args, &session, &mut out)
        .and_then(|()| out.flush().map_err(PreviewError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, &theme),
    }
}

/// Print `error` on stderr and pick the exit code.
fn report(error: &PreviewError, theme: &Theme) -> ExitCode {
    // The finder closed the pane; nobody is listening.
    if error.is_broken_pipe() {
        return ExitCode::SUCCESS;
    }

    match error {
        PreviewError::Usage(message) => eprint!("{}", message),
        other => eprintln!("{}", theme.error_text(&other.to_string())),
    }
    ExitCode::from(error.exit_code())
}

/// Command definitions of every binary, for man page generation.
pub fn commands() -> Vec<clap::Command> {
    vec![
        ContentArgs::command(),
        BlameArgs::command(),
        CommitArgs::command(),
        StatusArgs::command(),
        PackageArgs::command(),
    ]
}

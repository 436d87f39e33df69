//! git command lines used by the previewers.

use crate::process::Invocation;
use std::path::Path;

const GIT: &str = "git";

/// Abbreviated revision width for streamed blame output.
const BLAME_ABBREV: u8 = 8;

/// Builds the git invocations; execution goes through a [`crate::process::Runner`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Git;

impl Git {
    pub fn new() -> Self {
        Self
    }

    /// `git blame <path>`, for piping into a viewer.
    pub fn blame(&self, path: &Path) -> Invocation {
        Invocation::new(GIT).args(["blame", "--"]).arg(path)
    }

    /// `git blame --abbrev=8 <path>`, streamed straight to the terminal.
    pub fn blame_abbreviated(&self, path: &Path) -> Invocation {
        Invocation::new(GIT)
            .arg("blame")
            .arg(format!("--abbrev={}", BLAME_ABBREV))
            .arg("--")
            .arg(path)
    }

    /// `git show --color=always <revision>`
    pub fn show(&self, revision: &str) -> Invocation {
        Invocation::new(GIT).args(["show", "--color=always", revision])
    }

    /// `git status -s -- <path>`
    pub fn status_short(&self, path: &Path) -> Invocation {
        Invocation::new(GIT).args(["status", "-s", "--"]).arg(path)
    }

    /// `git diff --color=always -- <path>`
    pub fn diff(&self, path: &Path) -> Invocation {
        Invocation::new(GIT)
            .args(["diff", "--color=always", "--"])
            .arg(path)
    }
}

//! Previewer and external tool errors.

use std::io;
use std::path::PathBuf;

/// Errors that halt a previewer with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A required positional argument was missing or malformed.
    #[error("{0}")]
    Usage(String),

    #[error("Path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error loading cache file: {source}")]
    CacheRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error loading cache file: {source}")]
    CacheParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing to our own stdout failed.
    #[error("Failed to write preview: {0}")]
    Output(#[from] io::Error),
}

impl PreviewError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// True when stdout was closed underneath us (the finder moved on).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Failure of a single external tool invocation.
///
/// Always handled at the call site with a fallback or a diagnostic line.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The tool could not be started (missing binary, or the shell reported
    /// 126/127 for a custom command).
    #[error("'{tool}' is not installed or could not be started")]
    NotFound { tool: String },

    #[error("'{tool}' exited with {}", describe_code(*code))]
    NonZeroExit { tool: String, code: Option<i32> },

    /// Reading from or writing to the tool's pipes failed.
    #[error("pipe to '{tool}' broke: {source}")]
    PipeBroken {
        tool: String,
        #[source]
        source: io::Error,
    },
}

impl ToolError {
    pub fn not_found(tool: impl Into<String>) -> Self {
        Self::NotFound { tool: tool.into() }
    }

    pub fn pipe_broken(tool: impl Into<String>, source: io::Error) -> Self {
        Self::PipeBroken {
            tool: tool.into(),
            source,
        }
    }

    /// Whether a fallback renderer should take over.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

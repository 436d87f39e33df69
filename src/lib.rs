//! fzf-preview - preview helpers for the fzf preview pane
//!
//! Five small programs share this library: a generic path previewer and
//! previewers for git blame, git commits, git status and package caches.
//! Every program shells out to existing tools (`git`, `bat`, `chafa`,
//! `eza`/`exa`, `file`) and falls back to plain output when they are missing.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mime;
pub mod preview;
pub mod process;
pub mod theme;
pub mod tools;

pub use config::Config;
pub use error::{PreviewError, ToolError};

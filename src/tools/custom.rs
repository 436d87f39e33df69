//! User-supplied preview and diff commands.

use crate::process::{shell_quote, Invocation};
use std::path::Path;

/// A command line taken from configuration, run through the shell.
#[derive(Debug, Clone, Copy)]
pub struct CustomCommand<'a> {
    command: &'a str,
}

impl<'a> CustomCommand<'a> {
    pub fn new(command: &'a str) -> Self {
        Self { command }
    }

    /// The command with `path` appended as a single quoted word.
    pub fn for_path(&self, path: &Path) -> Invocation {
        Invocation::shell(&format!(
            "{} {}",
            self.command,
            shell_quote(&path.to_string_lossy())
        ))
    }

    /// The command with extra (quoted) arguments, fed through stdin.
    pub fn with_args(&self, args: &[&str]) -> Invocation {
        let mut line = self.command.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(&shell_quote(arg));
        }
        Invocation::shell(&line)
    }
}

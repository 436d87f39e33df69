//! Description of a single external command.

use std::ffi::{OsStr, OsString};

/// A program plus its arguments, or a command line for the platform shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<OsString>,
    /// Name used in diagnostics; the first word of a shell command line.
    label: String,
    shell: bool,
}

impl Invocation {
    /// Invoke `program` directly, without a shell.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            label: program.to_string(),
            shell: false,
        }
    }

    /// Run `command_line` through the platform shell (`sh -c` / `cmd /C`).
    pub fn shell(command_line: &str) -> Self {
        let label = command_line
            .split_whitespace()
            .next()
            .unwrap_or(SHELL)
            .to_string();

        Self {
            program: SHELL.to_string(),
            args: vec![OsString::from(SHELL_FLAG), OsString::from(command_line)],
            label,
            shell: true,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_shell(&self) -> bool {
        self.shell
    }

    /// Human-readable command line for logs and diagnostics.
    ///
    /// Shell invocations render as the command line handed to the shell.
    pub fn command_line(&self) -> String {
        if self.shell {
            return self
                .args
                .last()
                .map(|line| line.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

#[cfg(not(windows))]
const SHELL: &str = "sh";
#[cfg(not(windows))]
const SHELL_FLAG: &str = "-c";

#[cfg(windows)]
const SHELL: &str = "cmd";
#[cfg(windows)]
const SHELL_FLAG: &str = "/C";

/// Characters that never need quoting.
fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ',' | ':' | '=' | '+' | '@')
}

/// Quote `value` as a single shell word, leaving plain words untouched.
#[cfg(not(windows))]
pub fn shell_quote(value: &str) -> String {
    if !value.is_empty() && value.chars().all(is_shell_safe) {
        return value.to_string();
    }
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Quote `value` as a single shell word, leaving plain words untouched.
#[cfg(windows)]
pub fn shell_quote(value: &str) -> String {
    if !value.is_empty() && value.chars().all(is_shell_safe) {
        return value.to_string();
    }
    format!("\"{}\"", value.replace('"', "\"\""))
}

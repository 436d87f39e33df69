//! Runner backed by real child processes.

use super::{Invocation, Runner};
use crate::error::ToolError;
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

/// Shell exit codes meaning "command not executable" / "command not found".
const SHELL_NOT_EXECUTABLE: i32 = 126;
const SHELL_NOT_FOUND: i32 = 127;

/// Spawns real processes and resolves programs with the `which` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &Invocation) -> Command {
        let mut command = Command::new(invocation.program());
        command.args(invocation.arguments());
        command
    }
}

impl Runner for SystemRunner {
    fn has_program(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn stream(&self, invocation: &Invocation, out: &mut dyn Write) -> Result<(), ToolError> {
        tracing::debug!(command = %invocation.command_line(), "streaming");

        let mut child = Self::command(invocation)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(invocation, e))?;

        // The read end is dropped before waiting so a child writing into a
        // closed stdout gets EPIPE instead of blocking forever.
        let copied = match child.stdout.take() {
            Some(mut stdout) => io::copy(&mut stdout, out).map(|_| ()),
            None => Ok(()),
        };

        let status = child
            .wait()
            .map_err(|e| ToolError::pipe_broken(invocation.label(), e))?;
        copied.map_err(|e| ToolError::pipe_broken(invocation.label(), e))?;
        check_status(invocation, status)
    }

    fn capture(&self, invocation: &Invocation) -> Result<String, ToolError> {
        tracing::debug!(command = %invocation.command_line(), "capturing");

        let output = Self::command(invocation)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error(invocation, e))?;

        if !output.stderr.is_empty() {
            tracing::debug!(
                command = %invocation.command_line(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                "tool wrote to stderr"
            );
        }

        check_status(invocation, output.status)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn pipe(
        &self,
        invocation: &Invocation,
        input: &str,
        out: &mut dyn Write,
    ) -> Result<(), ToolError> {
        tracing::debug!(
            command = %invocation.command_line(),
            bytes = input.len(),
            "piping"
        );

        let mut child = Self::command(invocation)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(invocation, e))?;

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();

        // Feed stdin from a helper thread while draining stdout here, so a
        // viewer that produces output before consuming all input can't
        // deadlock against us.
        let (written, copied) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(input.as_bytes()),
                None => Ok(()),
            });

            let copied = match stdout {
                Some(mut stdout) => io::copy(&mut stdout, out).map(|_| ()),
                None => Ok(()),
            };

            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, copied)
        });

        let status = child
            .wait()
            .map_err(|e| ToolError::pipe_broken(invocation.label(), e))?;

        match written {
            // The viewer stopped reading early; what it did read was rendered.
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!(command = %invocation.command_line(), "viewer closed stdin early");
            }
            Err(e) => return Err(ToolError::pipe_broken(invocation.label(), e)),
            Ok(()) => {}
        }
        copied.map_err(|e| ToolError::pipe_broken(invocation.label(), e))?;
        check_status(invocation, status)
    }
}

fn spawn_error(invocation: &Invocation, error: io::Error) -> ToolError {
    tracing::debug!(
        command = %invocation.command_line(),
        error = %error,
        "failed to start tool"
    );
    ToolError::not_found(invocation.label())
}

fn check_status(invocation: &Invocation, status: ExitStatus) -> Result<(), ToolError> {
    if status.success() {
        return Ok(());
    }

    match status.code() {
        Some(SHELL_NOT_EXECUTABLE | SHELL_NOT_FOUND) if invocation.is_shell() => {
            Err(ToolError::not_found(invocation.label()))
        }
        code => Err(ToolError::NonZeroExit {
            tool: invocation.label().to_string(),
            code,
        }),
    }
}

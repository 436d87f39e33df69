//! Scriptable runner for unit tests.

use super::{Invocation, Runner};
use crate::error::ToolError;
use std::cell::RefCell;
use std::collections::HashSet;
use std::io::Write;

/// What the fake does when an invocation matches a registered prefix.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Output(String),
    NotFound,
    Exit(i32),
}

/// A recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Stream(String),
    Capture(String),
    Pipe { command: String, input: String },
}

impl Call {
    pub(crate) fn command(&self) -> &str {
        match self {
            Call::Stream(c) | Call::Capture(c) => c,
            Call::Pipe { command, .. } => command,
        }
    }
}

/// Runner with injected availability and canned replies keyed by
/// command-line prefix. Unmatched invocations succeed with no output.
#[derive(Default)]
pub(crate) struct FakeRunner {
    programs: HashSet<String>,
    replies: Vec<(String, Reply)>,
    calls: RefCell<Vec<Call>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_program(mut self, program: &str) -> Self {
        self.programs.insert(program.to_string());
        self
    }

    pub(crate) fn reply(mut self, prefix: &str, reply: Reply) -> Self {
        self.replies.push((prefix.to_string(), reply));
        self
    }

    pub(crate) fn output(self, prefix: &str, output: &str) -> Self {
        self.reply(prefix, Reply::Output(output.to_string()))
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.command().to_string()).collect()
    }

    fn lookup(&self, invocation: &Invocation) -> Result<String, ToolError> {
        let line = invocation.command_line();
        let reply = self
            .replies
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or(Reply::Output(String::new()));

        match reply {
            Reply::Output(text) => Ok(text),
            Reply::NotFound => Err(ToolError::not_found(invocation.label())),
            Reply::Exit(code) => Err(ToolError::NonZeroExit {
                tool: invocation.label().to_string(),
                code: Some(code),
            }),
        }
    }
}

impl Runner for FakeRunner {
    fn has_program(&self, program: &str) -> bool {
        self.programs.contains(program)
    }

    fn stream(&self, invocation: &Invocation, out: &mut dyn Write) -> Result<(), ToolError> {
        self.calls
            .borrow_mut()
            .push(Call::Stream(invocation.command_line()));
        let text = self.lookup(invocation)?;
        out.write_all(text.as_bytes())
            .map_err(|e| ToolError::pipe_broken(invocation.label(), e))
    }

    fn capture(&self, invocation: &Invocation) -> Result<String, ToolError> {
        self.calls
            .borrow_mut()
            .push(Call::Capture(invocation.command_line()));
        self.lookup(invocation)
    }

    fn pipe(
        &self,
        invocation: &Invocation,
        input: &str,
        out: &mut dyn Write,
    ) -> Result<(), ToolError> {
        self.calls.borrow_mut().push(Call::Pipe {
            command: invocation.command_line(),
            input: input.to_string(),
        });
        let text = self.lookup(invocation)?;
        out.write_all(text.as_bytes())
            .map_err(|e| ToolError::pipe_broken(invocation.label(), e))
    }
}

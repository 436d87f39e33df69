//! Child process plumbing.
//!
//! Every external tool call goes through the [`Runner`] trait so previewers
//! can be exercised without touching the real search path.

mod invocation;
mod system;

#[cfg(test)]
pub(crate) mod fake;

pub use invocation::{shell_quote, Invocation};
pub use system::SystemRunner;

use crate::error::ToolError;
use std::io::Write;

/// Runs external programs on behalf of a previewer.
pub trait Runner {
    /// Whether `program` can be found on the search path.
    fn has_program(&self, program: &str) -> bool;

    /// Run the invocation, copying its stdout into `out` as it arrives.
    fn stream(&self, invocation: &Invocation, out: &mut dyn Write) -> Result<(), ToolError>;

    /// Run the invocation and return its stdout as (lossily decoded) text.
    ///
    /// A non-zero exit is reported as [`ToolError::NonZeroExit`].
    fn capture(&self, invocation: &Invocation) -> Result<String, ToolError>;

    /// Run the invocation with `input` on its stdin, copying its stdout into `out`.
    fn pipe(
        &self,
        invocation: &Invocation,
        input: &str,
        out: &mut dyn Write,
    ) -> Result<(), ToolError>;
}

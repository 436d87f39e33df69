//! PreviewTool trait.

use super::method::ToolMethod;
use crate::error::ToolError;
use crate::process::{Invocation, Runner};
use std::io::Write;
use std::path::Path;

/// An external program that can render a path into the preview pane.
///
/// Each implementation wraps one CLI (bat, chafa, eza, ...) and knows how to
/// invoke it. Availability is probed through the [`Runner`] so tests can
/// fake it.
pub trait PreviewTool {
    /// The method identifier for this tool.
    fn method(&self) -> ToolMethod;

    /// Binary name, used for the availability probe and messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool is installed.
    fn is_available(&self, runner: &dyn Runner) -> bool {
        runner.has_program(self.name())
    }

    /// The command line that renders `path`.
    fn invocation(&self, path: &Path) -> Invocation;

    /// Render `path`, streaming the tool's output into `out`.
    fn render(
        &self,
        runner: &dyn Runner,
        path: &Path,
        out: &mut dyn Write,
    ) -> Result<(), ToolError> {
        runner.stream(&self.invocation(path), out)
    }
}

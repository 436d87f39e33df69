//! Ordered fallback over preview tools.

use super::method::ToolMethod;
use super::tool::PreviewTool;
use crate::error::ToolError;
use crate::process::Runner;
use std::io::Write;
use std::path::Path;

/// Tries preview tools in priority order.
///
/// Availability is probed lazily: a tool is only checked once every tool
/// before it was unavailable or failed to start.
pub struct ToolChain {
    tools: Vec<Box<dyn PreviewTool>>,
}

impl ToolChain {
    pub fn new(tools: Vec<Box<dyn PreviewTool>>) -> Self {
        Self { tools }
    }

    /// Render `path` with the first tool that is available and starts.
    ///
    /// Returns `None` when no tool could be used; the caller then runs its
    /// built-in renderer. A tool that starts but exits non-zero has already
    /// reported its own error, so it still counts as the renderer.
    pub fn render(
        &self,
        runner: &dyn Runner,
        path: &Path,
        out: &mut dyn Write,
    ) -> Option<ToolMethod> {
        for tool in &self.tools {
            if !tool.is_available(runner) {
                tracing::debug!(tool = tool.name(), "not available");
                continue;
            }

            match tool.render(runner, path, out) {
                Ok(()) => return Some(tool.method()),
                Err(ToolError::NotFound { .. }) => {
                    tracing::debug!(tool = tool.name(), "failed to start, trying next");
                    continue;
                }
                Err(e) => {
                    tracing::debug!(tool = tool.name(), error = %e, "tool reported failure");
                    return Some(tool.method());
                }
            }
        }
        None
    }
}

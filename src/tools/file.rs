//! `file` MIME sniffer.

use crate::error::ToolError;
use crate::process::{Invocation, Runner};
use std::path::Path;

/// Content-based MIME detection through `file --mime-type`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSniffer;

impl FileSniffer {
    const NAME: &'static str = "file";

    pub fn new() -> Self {
        Self
    }

    pub fn is_available(&self, runner: &dyn Runner) -> bool {
        runner.has_program(Self::NAME)
    }

    pub fn invocation(&self, path: &Path) -> Invocation {
        Invocation::new(Self::NAME)
            .args(["--brief", "--mime-type", "--"])
            .arg(path)
    }

    /// MIME type of `path`, e.g. `image/png`.
    ///
    /// `--brief` keeps the file name out of the output so a path containing
    /// `image/` cannot be mistaken for an image type.
    pub fn mime_type(&self, runner: &dyn Runner, path: &Path) -> Result<String, ToolError> {
        let output = runner.capture(&self.invocation(path))?;
        Ok(output.trim().to_string())
    }
}

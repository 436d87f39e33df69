//! bat syntax-highlighting pager.

use super::method::ToolMethod;
use super::tool::PreviewTool;
use crate::process::Invocation;
use std::path::Path;

/// Renders text files with line numbers and forced color.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bat;

impl Bat {
    pub fn new() -> Self {
        Self
    }
}

impl PreviewTool for Bat {
    fn method(&self) -> ToolMethod {
        ToolMethod::Bat
    }

    fn invocation(&self, path: &Path) -> Invocation {
        Invocation::new(self.name())
            .args(["--style=numbers", "--color=always"])
            .arg(path)
    }
}

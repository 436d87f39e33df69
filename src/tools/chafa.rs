//! chafa terminal image renderer.

use super::method::ToolMethod;
use super::tool::PreviewTool;
use crate::config::Geometry;
use crate::process::Invocation;
use std::path::Path;

/// Renders images as terminal graphics sized to the preview pane.
#[derive(Debug, Clone, Copy)]
pub struct Chafa {
    geometry: Geometry,
}

impl Chafa {
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }
}

impl PreviewTool for Chafa {
    fn method(&self) -> ToolMethod {
        ToolMethod::Chafa
    }

    fn invocation(&self, path: &Path) -> Invocation {
        Invocation::new(self.name())
            .arg("--size")
            .arg(self.geometry.to_string())
            .arg(path)
    }
}

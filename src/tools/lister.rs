//! eza/exa directory listers.

use super::method::ToolMethod;
use super::tool::PreviewTool;
use crate::process::Invocation;
use std::path::Path;

/// Long-format colored directory listing.
///
/// `eza` and `exa` share the same flags; eza is the maintained fork.
#[derive(Debug, Clone, Copy)]
pub struct Lister {
    method: ToolMethod,
}

impl Lister {
    pub fn eza() -> Self {
        Self {
            method: ToolMethod::Eza,
        }
    }

    pub fn exa() -> Self {
        Self {
            method: ToolMethod::Exa,
        }
    }
}

impl PreviewTool for Lister {
    fn method(&self) -> ToolMethod {
        self.method
    }

    fn invocation(&self, path: &Path) -> Invocation {
        Invocation::new(self.name())
            .args(["-l", "--color=always"])
            .arg(path)
    }
}

//! Renderer identifiers.

/// Which external renderer produced a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMethod {
    /// Syntax-highlighting pager
    Bat,
    /// Terminal image renderer
    Chafa,
    /// Enhanced directory lister
    Eza,
    /// Legacy directory lister
    Exa,
}

impl ToolMethod {
    /// Binary name, also used for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bat => "bat",
            Self::Chafa => "chafa",
            Self::Eza => "eza",
            Self::Exa => "exa",
        }
    }
}

/// How a preview ended up being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderedWith {
    Tool(ToolMethod),
    /// In-process fallback, no external tool involved
    BuiltIn,
}

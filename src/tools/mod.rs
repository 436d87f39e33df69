//! External tools the previewers delegate to.

mod bat;
mod chafa;
mod chain;
mod custom;
mod file;
mod git;
mod lister;
mod method;
mod tool;

pub use bat::Bat;
pub use chafa::Chafa;
pub use chain::ToolChain;
pub use custom::CustomCommand;
pub use file::FileSniffer;
pub use git::Git;
pub use lister::Lister;
pub use method::{RenderedWith, ToolMethod};
pub use tool::PreviewTool;

use crate::config::Geometry;

/// Directory listers in priority order.
pub fn directory_tools() -> ToolChain {
    ToolChain::new(vec![Box::new(Lister::eza()), Box::new(Lister::exa())])
}

/// Image renderers in priority order.
pub fn image_tools(geometry: Geometry) -> ToolChain {
    ToolChain::new(vec![Box::new(Chafa::new(geometry))])
}

/// Text renderers in priority order.
pub fn text_tools() -> ToolChain {
    ToolChain::new(vec![Box::new(Bat::new())])
}

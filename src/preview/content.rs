//! Generic path preview: directories, images and text files.

use super::text::{self, write_text};
use crate::config::Config;
use crate::error::PreviewError;
use crate::mime;
use crate::process::Runner;
use crate::tools::{self, FileSniffer, RenderedWith};
use chrono::{DateTime, Local};
use std::fs;
use std::io::Write;
use std::path::Path;

/// What kind of thing a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Directory,
    Image,
    Text,
}

/// Which check classified a file as an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEvidence {
    /// Extension maps to an `image/*` MIME type
    Extension,
    /// `file --mime-type` reported `image/*`
    Sniffer,
}

/// Result of a content preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPreview {
    pub kind: ContentKind,
    pub rendered_with: RenderedWith,
}

/// Previews any filesystem path.
pub struct ContentPreviewer<'a> {
    config: &'a Config,
    runner: &'a dyn Runner,
}

impl<'a> ContentPreviewer<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn Runner) -> Self {
        Self { config, runner }
    }

    /// Classify and render `path`.
    pub fn preview(
        &self,
        path: &Path,
        out: &mut dyn Write,
    ) -> Result<ContentPreview, PreviewError> {
        if !path.exists() {
            return Err(PreviewError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let kind = self.classify(path);
        tracing::debug!(path = %path.display(), ?kind, "classified");

        let rendered_with = match kind {
            ContentKind::Directory => self.render_directory(path, out)?,
            ContentKind::Image => self.render_image(path, out)?,
            ContentKind::Text => text::render_text(self.runner, path, out)?,
        };

        Ok(ContentPreview {
            kind,
            rendered_with,
        })
    }

    /// Directory first, then image, then text.
    pub fn classify(&self, path: &Path) -> ContentKind {
        if path.is_dir() {
            ContentKind::Directory
        } else if self.image_evidence(path).is_some() {
            ContentKind::Image
        } else {
            ContentKind::Text
        }
    }

    /// Why `path` looks like an image, if it does.
    ///
    /// Checks the extension's MIME type first and only asks `file` when the
    /// extension says nothing about an image.
    pub fn image_evidence(&self, path: &Path) -> Option<ImageEvidence> {
        if mime::guess(path).is_some_and(mime::is_image) {
            return Some(ImageEvidence::Extension);
        }

        let sniffer = FileSniffer::new();
        if !sniffer.is_available(self.runner) {
            return None;
        }
        match sniffer.mime_type(self.runner, path) {
            Ok(mime_type) => mime::is_image(&mime_type).then_some(ImageEvidence::Sniffer),
            Err(e) => {
                tracing::debug!(error = %e, "mime sniffing failed");
                None
            }
        }
    }

    fn render_directory(
        &self,
        path: &Path,
        out: &mut dyn Write,
    ) -> Result<RenderedWith, PreviewError> {
        if let Some(method) = tools::directory_tools().render(self.runner, path, out) {
            return Ok(RenderedWith::Tool(method));
        }

        match fs::read_dir(path) {
            Ok(entries) => {
                let mut names: Vec<String> = entries
                    .filter_map(|entry| entry.ok())
                    .map(|entry| entry.file_name().to_string_lossy().into_owned())
                    .collect();
                names.sort();
                for name in names {
                    writeln!(out, "{}", name)?;
                }
            }
            Err(e) => writeln!(out, "Error reading directory: {}", e)?,
        }
        Ok(RenderedWith::BuiltIn)
    }

    fn render_image(
        &self,
        path: &Path,
        out: &mut dyn Write,
    ) -> Result<RenderedWith, PreviewError> {
        let renderers = tools::image_tools(self.config.geometry);
        if let Some(method) = renderers.render(self.runner, path, out) {
            return Ok(RenderedWith::Tool(method));
        }

        match fs::metadata(path) {
            Ok(metadata) => write_text(out, &image_summary(path, &metadata))?,
            Err(e) => writeln!(out, "Error reading file: {}", e)?,
        }
        Ok(RenderedWith::BuiltIn)
    }
}

/// Name, size and modification time, shown instead of raw image bytes.
fn image_summary(path: &Path, metadata: &fs::Metadata) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let size = metadata.len();
    let modified = metadata
        .modified()
        .map(|time| {
            DateTime::<Local>::from(time)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| "unknown".to_string());

    format!(
        "Name: {}\nSize: {} bytes ({})\nModified: {}\n",
        name,
        size,
        humansize::format_size(size, humansize::BINARY),
        modified
    )
}

//! Plain text rendering shared by the previewers.

use crate::error::PreviewError;
use crate::process::Runner;
use crate::tools::{self, RenderedWith};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Read a file as text, replacing undecodable bytes with U+FFFD.
pub(crate) fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write `text`, terminating it with a newline if it lacks one. Empty text
/// writes nothing.
pub(crate) fn write_text(out: &mut dyn Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.is_empty() && !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Render a text file with the syntax highlighter, or print it verbatim.
///
/// A file that can't be read produces a one-line diagnostic, not an error.
pub(crate) fn render_text(
    runner: &dyn Runner,
    path: &Path,
    out: &mut dyn Write,
) -> Result<RenderedWith, PreviewError> {
    if let Some(method) = tools::text_tools().render(runner, path, out) {
        return Ok(RenderedWith::Tool(method));
    }

    match read_lossy(path) {
        Ok(text) => write_text(out, &text)?,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "read failed");
            writeln!(out, "Error reading file: {}", e)?;
        }
    }
    Ok(RenderedWith::BuiltIn)
}

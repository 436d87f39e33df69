//! MIME type guessing from file extensions.

use std::path::Path;

/// Extension (lowercase, no dot) to MIME type.
const MIME_TYPES: &[(&str, &str)] = &[
    // Images
    ("avif", "image/avif"),
    ("bmp", "image/bmp"),
    ("gif", "image/gif"),
    ("heic", "image/heic"),
    ("ico", "image/vnd.microsoft.icon"),
    ("jpe", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("pbm", "image/x-portable-bitmap"),
    ("pgm", "image/x-portable-graymap"),
    ("png", "image/png"),
    ("pnm", "image/x-portable-anymap"),
    ("ppm", "image/x-portable-pixmap"),
    ("svg", "image/svg+xml"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("webp", "image/webp"),
    ("xbm", "image/x-xbitmap"),
    // Opaque binaries
    ("a", "application/octet-stream"),
    ("bin", "application/octet-stream"),
    ("dll", "application/octet-stream"),
    ("exe", "application/octet-stream"),
    ("o", "application/octet-stream"),
    ("obj", "application/octet-stream"),
    ("so", "application/octet-stream"),
    // Archives and documents
    ("gz", "application/gzip"),
    ("pdf", "application/pdf"),
    ("tar", "application/x-tar"),
    ("zip", "application/zip"),
    // Audio/video
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("wav", "audio/x-wav"),
    // Text
    ("c", "text/x-c"),
    ("css", "text/css"),
    ("csv", "text/csv"),
    ("h", "text/x-c"),
    ("htm", "text/html"),
    ("html", "text/html"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("md", "text/markdown"),
    ("py", "text/x-python"),
    ("sh", "application/x-sh"),
    ("toml", "application/toml"),
    ("txt", "text/plain"),
    ("xml", "text/xml"),
    ("yaml", "application/yaml"),
    ("yml", "application/yaml"),
];

const OCTET_STREAM: &str = "application/octet-stream";

/// Lowercased extension of `path`, without the dot.
fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Guess a MIME type from the file extension.
pub fn guess(path: &Path) -> Option<&'static str> {
    let ext = extension(path)?;
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Opaque binary or image: content not worth annotating line by line.
pub fn is_binary_or_image(mime: &str) -> bool {
    mime.starts_with(OCTET_STREAM) || is_image(mime)
}

//! ANSI styling for messages the previewers print themselves.
//!
//! Output from external tools is passed through untouched; this only covers
//! warnings and errors. Honors `NO_COLOR`.

/// Raw ANSI escape sequences.
pub mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

/// Message styling for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Emit color escapes at all
    pub colors: bool,
    /// Warning color (duplicate package locations, etc.)
    pub warning: &'static str,
    /// Error color
    pub error: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: true,
            warning: ansi::YELLOW,
            error: ansi::RED,
        }
    }
}

impl Theme {
    /// Theme without any escape sequences.
    pub fn plain() -> Self {
        Self {
            colors: false,
            ..Self::default()
        }
    }

    /// Format text with the warning color.
    pub fn warning_text(&self, text: &str) -> String {
        self.paint(self.warning, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.colors {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

/// Theme for the current process, plain when `NO_COLOR` is set.
pub fn current_theme() -> Theme {
    match std::env::var_os("NO_COLOR") {
        Some(value) if !value.is_empty() => Theme::plain(),
        _ => Theme::default(),
    }
}

//! Visual theme and styling.

use console::Style;

/// Styles used when rendering validation results.
#[derive(Debug, Clone)]
pub struct ZooCfgTheme {
    /// Style for the `Warnings:` header (orange bold).
    pub warning: Style,
    /// Style for the `Errors:` header (red bold).
    pub error: Style,
    /// Style for keys in `--show-config` output (bold).
    pub key: Style,
    /// Style for secondary text such as rule ids (dim).
    pub dim: Style,
}

impl Default for ZooCfgTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ZooCfgTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            warning: Style::new().color256(208).bold(),
            error: Style::new().red().bold(),
            key: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
            key: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format the header line that opens the warnings section.
    pub fn format_warning_header(&self, title: &str) -> String {
        format!("{}", self.warning.apply_to(title))
    }

    /// Format the header line that opens the errors section.
    pub fn format_error_header(&self, title: &str) -> String {
        format!("{}", self.error.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = ZooCfgTheme::plain();
        assert_eq!(theme.format_warning_header("Warnings:"), "Warnings:");
        assert_eq!(theme.format_error_header("Errors:"), "Errors:");
    }

    #[test]
    fn for_color_false_is_plain() {
        let theme = ZooCfgTheme::for_color(false);
        assert_eq!(theme.format_error_header("Errors:"), "Errors:");
    }

    #[test]
    fn default_theme_keeps_text() {
        let theme = ZooCfgTheme::default();
        assert!(theme.format_warning_header("Warnings:").contains("Warnings:"));
    }
}

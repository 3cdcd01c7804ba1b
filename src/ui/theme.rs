use owo_colors::{OwoColorize, Style};
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for each kind of thing the CLI prints.
/// `Theme::default()` applies no styling at all.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub header: Style,
    pub package: Style,
    pub plugin: Style,
    pub version: Style,
    pub checksum: Style,
    pub path: Style,
    pub dim: Style,
    pub success: Style,
    pub error: Style,
}

impl Theme {
    /// Colors when stdout accepts them (a terminal, and NO_COLOR/CLICOLOR allow it)
    pub fn detect() -> Self {
        if console::colors_enabled() {
            Self::colored()
        } else {
            Self::default()
        }
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            package: Style::new().green().bold(),
            plugin: Style::new().magenta().bold(),
            version: Style::new().cyan(),
            checksum: Style::new().bright_black(),
            path: Style::new().underline(),
            dim: Style::new().white().dimmed(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
        }
    }
}

/// Render `text` with `style`
pub fn paint(style: Style, text: &str) -> String {
    text.style(style).to_string()
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}

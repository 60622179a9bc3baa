//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for the terminal screen.
//! Provides both ratatui styles (for TUI) and ANSI escape codes (for CLI).

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Transcript and prompt text
    pub text_primary: Color,
    /// Dimmed text (footer hints, processing indicator)
    pub text_secondary: Color,
    /// Frame border, title and cursor
    pub accent: Color,
    /// Error lines
    pub error: Color,
    /// Scanline highlight
    pub scanline: Color,
    /// Screen background
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::phosphor()
    }
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub const NAMES: [&'static str; 3] = ["phosphor", "amber", "classic"];

    /// Green phosphor CRT.
    pub fn phosphor() -> Self {
        Self {
            text_primary: Color::Green,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            error: Color::Red,
            scanline: Color::Rgb(0, 48, 0),
            background: Color::Black,
        }
    }

    /// Amber monochrome monitor.
    pub fn amber() -> Self {
        Self {
            text_primary: Color::Yellow,
            text_secondary: Color::DarkGray,
            accent: Color::LightYellow,
            error: Color::LightRed,
            scanline: Color::Rgb(48, 32, 0),
            background: Color::Black,
        }
    }

    /// Plain terminal colors.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::White,
            error: Color::Red,
            scanline: Color::DarkGray,
            background: Color::Reset,
        }
    }

    /// Look up a theme by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "phosphor" => Some(Self::phosphor()),
            "amber" => Some(Self::amber()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn scanline_style(&self) -> Style {
        Style::default().bg(self.scanline)
    }

    /// Washed-out look while interference is active.
    pub fn interference_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
    }

    // ANSI color helpers for CLI output

    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors fall back to no color
        _ => "",
    }
}

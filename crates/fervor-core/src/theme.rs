//! Accent color themes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Accent color used for blobs, grid, cards and the countdown digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    /// The event's signature lime (#c4ff0d).
    #[default]
    Lime,
    Cyan,
    Magenta,
    Amber,
    White,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(&self) -> Self {
        match self {
            ColorTheme::Lime => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Amber,
            ColorTheme::Amber => ColorTheme::White,
            ColorTheme::White => ColorTheme::Lime,
        }
    }

    /// Raw RGB components of the accent.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorTheme::Lime => (196, 255, 13),
            ColorTheme::Cyan => (13, 220, 255),
            ColorTheme::Magenta => (255, 40, 200),
            ColorTheme::Amber => (255, 176, 0),
            ColorTheme::White => (235, 235, 235),
        }
    }

    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_start() {
        let mut theme = ColorTheme::default();
        for _ in 0..5 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::Lime);
    }

    #[test]
    fn test_lime_is_signature_color() {
        assert_eq!(ColorTheme::Lime.color(), Color::Rgb(196, 255, 13));
    }
}

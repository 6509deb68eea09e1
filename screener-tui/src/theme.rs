//! Screener theme tokens.
//!
//! Light palette built from the dashboard's design tokens:
//! - **Primary**: blue 600 (active tab, table header, focus)
//! - **Secondary**: indigo 700 (search button when enabled)
//! - **Accent**: amber 500 (hints, cursor)
//! - **Background**: gray 100
//! - **Text**: gray 900 primary, gray 500 secondary
//!
//! Status cells use red 600 / yellow 500 / green 600.

use ratatui::style::{Color, Modifier, Style};

use screener_core::CellTone;

/// Light dashboard theme for the screener TUI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Blue 600 (active tab, table header, focused borders)
    pub primary: Color,
    /// Indigo 700 (enabled search button)
    pub secondary: Color,
    /// Amber 500 (key hints, input cursor)
    pub accent: Color,
    /// Gray 100 (primary surface)
    pub background: Color,
    /// Gray 900 (primary text, neutral change)
    pub text_primary: Color,
    /// Gray 500 (placeholders, muted text, disabled)
    pub text_secondary: Color,
    /// Green 600 (halal status, gains)
    pub positive: Color,
    /// Red 600 (haraam status, losses, errors)
    pub negative: Color,
    /// Yellow 500 (doubtful status, warnings)
    pub caution: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::screener()
    }
}

impl Theme {
    pub const fn screener() -> Self {
        Self {
            primary: Color::Rgb(0x25, 0x63, 0xEB),
            secondary: Color::Rgb(0x4F, 0x46, 0xE5),
            accent: Color::Rgb(0xF5, 0x9E, 0x0B),
            background: Color::Rgb(0xF3, 0xF4, 0xF6),
            text_primary: Color::Rgb(0x11, 0x18, 0x27),
            text_secondary: Color::Rgb(0x6B, 0x72, 0x80),
            positive: Color::Rgb(0x16, 0xA3, 0x4A),
            negative: Color::Rgb(0xDC, 0x26, 0x26),
            caution: Color::Rgb(0xEA, 0xB3, 0x08),
        }
    }

    /// Foreground color for a formatted cell.
    pub fn tone_color(&self, tone: CellTone) -> Color {
        match tone {
            CellTone::Positive => self.positive,
            CellTone::Negative => self.negative,
            CellTone::Caution => self.caution,
            CellTone::Neutral => self.text_primary,
        }
    }
}

const THEME: Theme = Theme::screener();

pub fn base() -> Style {
    Style::default().fg(THEME.text_primary).bg(THEME.background)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.text_secondary)
}

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn primary_bold() -> Style {
    Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.caution)
}

/// Filled primary block: active tab, table header.
pub fn selected() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(THEME.primary)
        .add_modifier(Modifier::BOLD)
}

pub fn tone(tone: CellTone) -> Style {
    Style::default().fg(THEME.tone_color(tone))
}

pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::White)
            .bg(THEME.secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(THEME.text_secondary)
            .add_modifier(Modifier::DIM)
    }
}

pub fn panel_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(THEME.primary)
    } else {
        muted()
    }
}

pub fn panel_title(focused: bool) -> Style {
    if focused {
        primary_bold()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_tokens() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Rgb(37, 99, 235));
        assert_eq!(theme.background, Color::Rgb(243, 244, 246));
    }

    #[test]
    fn tone_colors() {
        let theme = Theme::default();
        assert_eq!(theme.tone_color(CellTone::Positive), theme.positive);
        assert_eq!(theme.tone_color(CellTone::Negative), theme.negative);
        assert_eq!(theme.tone_color(CellTone::Caution), theme.caution);
        assert_eq!(theme.tone_color(CellTone::Neutral), theme.text_primary);
    }

    #[test]
    fn disabled_button_is_dim() {
        assert!(button(false).add_modifier.contains(Modifier::DIM));
        assert_eq!(button(true).bg, Some(Theme::default().secondary));
    }
}

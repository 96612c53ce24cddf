//! Theme system for TUI colors and styles
//!
//! Color constants consistent with the CLI output in `commands/`.

use iocraft::prelude::Color;
use once_cell::sync::Lazy;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,

    // Listing colors
    pub title: Color,
    pub price: Color,
    pub free: Color,
    pub rating: Color,
    pub live: Color,
    pub meta: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Rgb { r: 60, g: 60, b: 70 },
            border_focused: Color::Cyan,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 140,
                g: 140,
                b: 150,
            },
            highlight: Color::Cyan,

            title: Color::White,
            price: Color::Yellow,
            free: Color::Green,
            rating: Color::Yellow,
            live: Color::Magenta,
            meta: Color::Rgb {
                r: 140,
                g: 140,
                b: 150,
            },
        }
    }
}

static THEME: Lazy<Theme> = Lazy::new(Theme::default);

/// Get the shared theme instance
pub fn theme() -> &'static Theme {
    &THEME
}

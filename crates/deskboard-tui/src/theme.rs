//! Color palette for the dark and light schemes

use deskboard_core::ColorScheme;
use ratatui::style::Color;

/// Resolved colors for the active scheme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    /// Background for selected/highlighted rows
    pub highlight_bg: Color,
}

impl Palette {
    pub fn new(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self {
                fg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                highlight_bg: Color::DarkGray,
            },
            ColorScheme::Light => Self {
                fg: Color::Black,
                muted: Color::Gray,
                accent: Color::Rgb(0, 128, 128),
                success: Color::Rgb(0, 128, 0),
                warning: Color::Rgb(180, 120, 0),
                error: Color::Rgb(200, 0, 0),
                highlight_bg: Color::Rgb(220, 220, 220),
            },
        }
    }
}

use jobtrack_core::{JobStatus, Tab, Tone, ViewController};
use ratatui::style::Color;

/// Color scheme for consistent UI styling
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Tones
    pub green: Color,
    pub yellow: Color,
    pub red: Color,

    // UI element colors
    pub brand: Color,
    pub border_normal: Color,
    pub border_focused: Color,
    pub nav_active_fg: Color,
    pub nav_active_bg: Color,
    pub header: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Tile accents
    pub tile_total: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            green: Color::Green,
            yellow: Color::Yellow,
            red: Color::Red,

            brand: Color::Blue,
            border_normal: Color::DarkGray,
            border_focused: Color::Blue,
            nav_active_fg: Color::LightBlue,
            nav_active_bg: Color::Rgb(30, 41, 59),
            header: Color::Cyan,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            tile_total: Color::LightBlue,
        }
    }
}

impl ColorScheme {
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Green => self.green,
            Tone::Yellow => self.yellow,
            Tone::Red => self.red,
        }
    }

    /// Get color for a job status
    pub fn status_color(&self, status: JobStatus) -> Color {
        self.tone_color(ViewController::status_icon(status).tone)
    }

    /// Sidebar glyph for each tab
    pub fn tab_glyph(tab: Tab) -> &'static str {
        match tab {
            Tab::Dashboard => "▦",
            Tab::Jobs => "▤",
            Tab::Settings => "⚙",
        }
    }
}

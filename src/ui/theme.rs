use crate::logic::trends::GOOD_COMFORT_LINE;
use crate::models::ColorToken;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // Base colors
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Rgb(0x10, 0xb9, 0x81);
    pub const HIGHLIGHT: Color = Color::Cyan;

    // Status colors
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    // Temperature colors (°C)
    pub const TEMP_COLD: Color = Color::LightBlue;
    pub const TEMP_COOL: Color = Color::Cyan;
    pub const TEMP_WARM: Color = Color::Yellow;
    pub const TEMP_HOT: Color = Color::Red;

    // Styles
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Self::FG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    pub fn alert() -> Style {
        Style::default()
            .fg(Self::FG)
            .bg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn token(token: ColorToken) -> Style {
        Style::default().fg(token.color())
    }

    pub fn temp_color(temp_c: f64) -> Color {
        if temp_c < 5.0 {
            Self::TEMP_COLD
        } else if temp_c < 15.0 {
            Self::TEMP_COOL
        } else if temp_c < 30.0 {
            Self::TEMP_WARM
        } else {
            Self::TEMP_HOT
        }
    }

    pub fn comfort_color(score: f64) -> Color {
        if score >= GOOD_COMFORT_LINE {
            Self::SUCCESS
        } else if score >= 40.0 {
            Self::WARNING
        } else {
            Self::ERROR
        }
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }
}

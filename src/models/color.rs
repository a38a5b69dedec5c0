use serde::Serialize;

/// A `#rrggbb` display color owned by the metric that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorToken(pub &'static str);

impl ColorToken {
    pub const EMERALD: ColorToken = ColorToken("#10b981");
    pub const YELLOW: ColorToken = ColorToken("#facc15");
    pub const ORANGE: ColorToken = ColorToken("#fb923c");
    pub const RED: ColorToken = ColorToken("#ef4444");
    pub const BLUE: ColorToken = ColorToken("#3b82f6");
    pub const CYAN: ColorToken = ColorToken("#06b6d4");
    pub const VIOLET: ColorToken = ColorToken("#8b5cf6");
    pub const LAVENDER: ColorToken = ColorToken("#a78bfa");
    pub const PINK: ColorToken = ColorToken("#ec4899");
    pub const AMBER: ColorToken = ColorToken("#f59e0b");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.0.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self.rgb() {
            Some((r, g, b)) => Color::Rgb(r, g, b),
            None => Color::Gray,
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn parses_hex_tokens() {
        assert_eq!(ColorToken::EMERALD.rgb(), Some((0x10, 0xb9, 0x81)));
        assert_eq!(ColorToken::RED.color(), Color::Rgb(0xef, 0x44, 0x44));
    }

    #[test]
    fn malformed_tokens_fall_back_to_gray() {
        assert_eq!(ColorToken("red").rgb(), None);
        assert_eq!(ColorToken("#12345").color(), Color::Gray);
        assert_eq!(ColorToken("#zzzzzz").color(), Color::Gray);
    }
}

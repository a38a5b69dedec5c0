use crate::app::Screen;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SCREENS: [(char, Screen); 5] = [
    ('1', Screen::Dashboard),
    ('2', Screen::Trends),
    ('3', Screen::AirQuality),
    ('4', Screen::Comparison),
    ('5', Screen::Recommendations),
];

/// Status message line plus the global key bar.
pub struct StatusBar<'a> {
    active: Screen,
    message: Option<&'a str>,
    city: &'a str,
    compare: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(active: Screen, city: &'a str) -> Self {
        Self {
            active,
            message: None,
            city,
            compare: None,
        }
    }

    pub fn with_message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn with_compare(mut self, compare: Option<&'a str>) -> Self {
        self.compare = compare;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let mut status = vec![
            Span::styled(self.city, Theme::highlight()),
            Span::styled(
                format!(" vs {}", self.compare.unwrap_or("-")),
                Theme::dim(),
            ),
        ];
        if let Some(msg) = self.message {
            let style = if msg.contains("failed") || msg.contains("OFFLINE") {
                Theme::warning()
            } else {
                Theme::success()
            };
            status.push(Span::styled(format!("  {}", msg), style));
        }
        Paragraph::new(Line::from(status)).render(rows[0], buf);

        let mut nav = Vec::new();
        for (key, screen) in SCREENS {
            let label_style = if screen == self.active {
                Theme::highlight()
            } else {
                Theme::nav_label()
            };
            nav.push(Span::styled(format!("[{}]", key), Theme::nav_key()));
            nav.push(Span::styled(format!("{} ", screen.title()), label_style));
        }
        for (key, label) in [
            ("[c/C]", "City "),
            ("[v]", "Compare "),
            ("[r]", "Refresh "),
            ("[q]", "Quit"),
        ] {
            nav.push(Span::styled(key, Theme::nav_key()));
            nav.push(Span::styled(label, Theme::nav_label()));
        }
        Paragraph::new(Line::from(nav)).render(rows[1], buf);
    }
}

use crate::logic::CitySnapshot;
use crate::models::{ColorToken, TrendSet};
use crate::ui::components::{BarEntry, BarListWidget};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Paragraph, Widget},
};

/// 7-day outlook, hourly temperature pattern and comfort factors.
pub struct TrendsScreen<'a> {
    pub snapshot: Option<&'a CitySnapshot>,
    pub trends: Option<&'a TrendSet>,
}

impl<'a> TrendsScreen<'a> {
    pub fn new(snapshot: Option<&'a CitySnapshot>, trends: Option<&'a TrendSet>) -> Self {
        Self { snapshot, trends }
    }
}

impl Widget for TrendsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (Some(snapshot), Some(trends)) = (self.snapshot, self.trends) else {
            Paragraph::new(Span::styled("No trend data available", Theme::dim()))
                .render(area, buf);
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(9)])
            .split(area);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let outlook = trends
            .outlook
            .iter()
            .map(|day| {
                BarEntry::new(
                    day.label.clone(),
                    day.high_c,
                    format!("{:.0}° / {:.0}°", day.high_c, day.low_c),
                    Theme::temp_color(day.high_c),
                )
            })
            .collect();
        BarListWidget::new("7-Day Forecast (high / low)", outlook)
            .range(-10.0, 50.0)
            .render(rows[0], buf);

        let hourly = trends
            .hourly_temperature
            .iter()
            .map(|p| {
                BarEntry::new(
                    p.label(),
                    p.value,
                    format!("{:.1}°C", p.value),
                    ColorToken::LAVENDER.color(),
                )
            })
            .collect();
        BarListWidget::new("Hourly Temperature Pattern", hourly)
            .range(-10.0, 50.0)
            .render(bottom[0], buf);

        let factors = snapshot
            .comfort_factors()
            .into_iter()
            .map(|(label, value)| {
                BarEntry::new(
                    label,
                    value,
                    format!("{:.0}", value),
                    Theme::comfort_color(value),
                )
            })
            .collect();
        BarListWidget::new("Comfort Factors", factors)
            .range(0.0, 100.0)
            .render(bottom[1], buf);
    }
}

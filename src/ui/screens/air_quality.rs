use crate::logic::aqi::AqiCategory;
use crate::logic::CitySnapshot;
use crate::models::TrendSet;
use crate::ui::components::{BarEntry, BarListWidget};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct AirQualityScreen<'a> {
    pub snapshot: Option<&'a CitySnapshot>,
    pub trends: Option<&'a TrendSet>,
}

impl<'a> AirQualityScreen<'a> {
    pub fn new(snapshot: Option<&'a CitySnapshot>, trends: Option<&'a TrendSet>) -> Self {
        Self { snapshot, trends }
    }
}

impl Widget for AirQualityScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(snapshot) = self.snapshot else {
            Paragraph::new(Span::styled("No air quality data available", Theme::dim()))
                .render(area, buf);
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(6)])
            .split(area);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[0]);

        let composition = snapshot
            .pollutant_bars()
            .into_iter()
            .map(|bar| {
                BarEntry::new(
                    bar.label,
                    bar.value,
                    format!("{:.1}", bar.value),
                    bar.color.color(),
                )
            })
            .collect();
        BarListWidget::new("Pollutant Composition (µg/m³)", composition).render(top[0], buf);

        render_health(snapshot, top[1], buf);

        let trend = self
            .trends
            .map(|t| {
                t.aqi_trend
                    .iter()
                    .map(|p| {
                        let aqi = p.value.max(0.0) as u16;
                        BarEntry::new(
                            p.label(),
                            p.value,
                            format!("{:.0}", p.value),
                            AqiCategory::from_aqi(aqi).color(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();
        BarListWidget::new("24h AQI Trend", trend)
            .range(0.0, 300.0)
            .guide(50.0, "Good")
            .guide(100.0, "Moderate")
            .render(rows[1], buf);
    }
}

fn render_health(snapshot: &CitySnapshot, area: Rect, buf: &mut Buffer) {
    let category = snapshot.category;
    let block = Block::default()
        .title("Health Impact")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} AQI {} ", category.emoji(), snapshot.aqi_value()), Theme::header()),
            Span::styled(category.label(), Style::default().fg(category.color())),
        ]),
        Line::from(Span::styled(category.health_advice(), Theme::normal())),
    ];
    if snapshot.aqi.is_saturated() {
        lines.push(Line::from(Span::styled(
            "PM2.5 outside the breakpoint table; AQI capped at 500",
            Theme::warning(),
        )));
    }

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

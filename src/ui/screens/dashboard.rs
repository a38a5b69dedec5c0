use crate::logic::CitySnapshot;
use crate::models::Recommendation;
use crate::ui::components::{
    aqi_gauge, humidity_gauge, temperature_gauge, visibility_gauge, wind_gauge,
};
use crate::ui::Theme;
use chrono::{DateTime, Local, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct DashboardScreen<'a> {
    pub city: &'a str,
    pub snapshot: Option<&'a CitySnapshot>,
    pub refreshing: bool,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(city: &'a str, snapshot: Option<&'a CitySnapshot>) -> Self {
        Self {
            city,
            snapshot,
            refreshing: false,
        }
    }

    pub fn refreshing(mut self, refreshing: bool) -> Self {
        self.refreshing = refreshing;
        self
    }
}

fn local_time(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|t| t.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

impl Widget for DashboardScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let alert = self.snapshot.is_some_and(|s| s.air_quality_alert());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                       // Header
                Constraint::Length(if alert { 1 } else { 0 }), // Alert banner
                Constraint::Length(3),                       // Comfort
                Constraint::Length(5),                       // Gauges
                Constraint::Min(5),                          // Advisories and details
            ])
            .split(area);

        self.render_header(chunks[0], buf);

        let Some(snapshot) = self.snapshot else {
            let msg = if self.refreshing {
                "Fetching weather and air quality..."
            } else {
                "No data yet - press [r] to refresh"
            };
            Paragraph::new(Span::styled(msg, Theme::dim())).render(chunks[2], buf);
            return;
        };

        if alert {
            render_alert(snapshot, chunks[1], buf);
        }
        render_comfort(snapshot, chunks[2], buf);
        render_gauges(snapshot, chunks[3], buf);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[4]);

        render_advisories(&snapshot.recommendations, bottom[0], buf);
        render_details(snapshot, bottom[1], buf);
    }
}

impl DashboardScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = match self.snapshot.and_then(|s| s.conditions.country.as_deref()) {
            Some(country) => format!("UrbanPulse - {}, {}", self.city, country),
            None => format!("UrbanPulse - {}", self.city),
        };

        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let info = match self.snapshot {
            Some(s) => Line::from(vec![
                Span::styled(&s.conditions.condition, Theme::normal()),
                Span::styled("  Feels like ", Theme::dim()),
                Span::styled(
                    format!("{:.1}°C", s.feels_like_c),
                    Style::default().fg(Theme::temp_color(s.feels_like_c)),
                ),
                Span::styled(format!(" ({})", s.feels_like_regime.as_str()), Theme::dim()),
                Span::styled(
                    format!(
                        "  Sunrise {}  Sunset {}  Updated {}",
                        local_time(s.conditions.sunrise),
                        local_time(s.conditions.sunset),
                        local_time(Some(s.fetched_at)),
                    ),
                    Theme::dim(),
                ),
            ]),
            None => Line::from(Span::styled("Last updated: Never", Theme::dim())),
        };

        Paragraph::new(info).block(block).render(area, buf);
    }
}

fn render_alert(snapshot: &CitySnapshot, area: Rect, buf: &mut Buffer) {
    let text = format!(
        " {} Air quality alert: AQI {} ({}) - {}",
        snapshot.category.emoji(),
        snapshot.aqi_value(),
        snapshot.category.label(),
        snapshot.category.health_advice()
    );
    Paragraph::new(Span::styled(text, Theme::alert())).render(area, buf);
}

fn render_comfort(snapshot: &CitySnapshot, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title("Comfort")
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    block.render(area, buf);

    let score = snapshot.comfort_score;
    let color = Theme::comfort_color(score);
    let label = format!("{:.1}/100 {} ", score, snapshot.comfort_emoji());
    let bar_width = inner.width.saturating_sub(label.chars().count() as u16 + 1);
    let filled = ((score / 100.0).clamp(0.0, 1.0) * f64::from(bar_width)) as u16;

    let line = Line::from(vec![
        Span::styled(label, Style::default().fg(color)),
        Span::styled("█".repeat(filled as usize), Style::default().fg(color)),
        Span::styled(
            "░".repeat(bar_width.saturating_sub(filled) as usize),
            Theme::dim(),
        ),
    ]);
    Paragraph::new(line).render(inner, buf);
}

fn render_gauges(snapshot: &CitySnapshot, area: Rect, buf: &mut Buffer) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20); 5])
        .split(area);

    let reading = snapshot.conditions.reading;
    temperature_gauge("Temperature", Some(reading.temperature_c)).render(cols[0], buf);
    humidity_gauge("Humidity", Some(reading.humidity_percent)).render(cols[1], buf);
    wind_gauge("Wind", Some(reading.wind_speed_kmh())).render(cols[2], buf);
    visibility_gauge("Visibility", Some(snapshot.conditions.visibility_km)).render(cols[3], buf);
    aqi_gauge("AQI", Some(snapshot.aqi_value())).render(cols[4], buf);
}

fn render_advisories(recommendations: &[Recommendation], area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled("Advisories", Theme::header()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    block.render(area, buf);

    let items: Vec<ListItem> = recommendations
        .iter()
        .take(3)
        .map(|r| {
            let style = Theme::token(r.color);
            let title_line = Line::from(Span::styled(r.display_title(), style));
            let desc_line = Line::from(vec![
                Span::styled("  ", Theme::dim()),
                Span::styled(&r.description, Theme::dim()),
            ]);
            ListItem::new(vec![title_line, desc_line])
        })
        .collect();

    List::new(items).render(inner, buf);
}

fn render_details(snapshot: &CitySnapshot, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title("Details")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let c = &snapshot.conditions;
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Theme::dim()),
            Span::styled(value, Theme::normal()),
        ])
    };

    let lines = vec![
        row("Pressure", format!("{:.0} hPa", c.pressure_hpa)),
        row("PM2.5", format!("{:.1} µg/m³", snapshot.pollution.pm25)),
        row(
            "Wind",
            format!(
                "{:.1} m/s ({:.1} km/h)",
                c.reading.wind_speed_ms,
                c.reading.wind_speed_kmh()
            ),
        ),
        row(
            "Location",
            format!(
                "{:.2}, {:.2}",
                c.coordinates.latitude, c.coordinates.longitude
            ),
        ),
    ];

    Paragraph::new(lines).block(block).render(area, buf);
}

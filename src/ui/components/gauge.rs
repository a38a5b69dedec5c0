use crate::logic::aqi::AqiCategory;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Boxed value readout with a one-line fill bar underneath.
pub struct GaugeWidget<'a> {
    title: &'a str,
    value: Option<f64>,
    unit: &'a str,
    min: f64,
    max: f64,
    thresholds: Vec<(f64, Color)>,
    precision: usize,
    caption: Option<String>,
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: Option<f64>, unit: &'a str) -> Self {
        Self {
            title,
            value,
            unit,
            min: 0.0,
            max: 100.0,
            thresholds: Vec::new(),
            precision: 1,
            caption: None,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn thresholds(mut self, thresholds: Vec<(f64, Color)>) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Short text shown after the value, e.g. an AQI category.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    fn get_color(&self, value: f64) -> Color {
        for (threshold, color) in self.thresholds.iter().rev() {
            if value >= *threshold {
                return *color;
            }
        }
        Theme::FG
    }

    fn fill_ratio(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(value) = self.value else {
            Paragraph::new(Span::styled("N/A", Theme::dim())).render(inner, buf);
            return;
        };

        let color = self.get_color(value);
        let mut spans = vec![Span::styled(
            format!("{:.prec$}{}", value, self.unit, prec = self.precision),
            Style::default().fg(color),
        )];
        if let Some(ref caption) = self.caption {
            spans.push(Span::styled(format!(" {}", caption), Theme::dim()));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        if inner.height >= 2 {
            let bar_area = Rect {
                x: inner.x,
                y: inner.y + 1,
                width: inner.width,
                height: 1,
            };

            let filled = (bar_area.width as f64 * self.fill_ratio(value)) as u16;
            for x in bar_area.x..bar_area.x + bar_area.width {
                let ch = if x < bar_area.x + filled { '█' } else { '░' };
                buf[(x, bar_area.y)].set_char(ch).set_fg(color);
            }
        }
    }
}

pub fn temperature_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "°C")
        .range(-10.0, 50.0)
        .thresholds(vec![
            (f64::MIN, Theme::TEMP_COLD),
            (5.0, Theme::TEMP_COOL),
            (15.0, Theme::TEMP_WARM),
            (30.0, Theme::TEMP_HOT),
        ])
}

pub fn humidity_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%")
        .range(0.0, 100.0)
        .precision(0)
        .thresholds(vec![
            (0.0, Theme::SUCCESS),
            (70.0, Theme::WARNING),
            (90.0, Theme::ERROR),
        ])
}

/// Wind in km/h.
pub fn wind_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, " km/h")
        .range(0.0, 60.0)
        .thresholds(vec![
            (0.0, Theme::SUCCESS),
            (20.0, Theme::WARNING),
            (36.0, Theme::ERROR),
        ])
}

/// Visibility in km; lower is worse.
pub fn visibility_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, " km")
        .range(0.0, 10.0)
        .thresholds(vec![
            (0.0, Theme::ERROR),
            (2.0, Theme::WARNING),
            (5.0, Theme::SUCCESS),
        ])
}

pub fn aqi_gauge(title: &str, value: Option<u16>) -> GaugeWidget<'_> {
    let gauge = GaugeWidget::new(title, value.map(f64::from), "")
        .range(0.0, 300.0)
        .precision(0)
        .thresholds(vec![
            (0.0, AqiCategory::Good.color()),
            (51.0, AqiCategory::Moderate.color()),
            (101.0, AqiCategory::Poor.color()),
            (201.0, AqiCategory::VeryPoor.color()),
        ]);

    match value {
        Some(aqi) => gauge.caption(AqiCategory::from_aqi(aqi).label()),
        None => gauge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_colors() {
        let gauge = temperature_gauge("Temp", Some(32.0));
        assert_eq!(gauge.get_color(32.0), Theme::TEMP_HOT);
        assert_eq!(gauge.get_color(-20.0), Theme::TEMP_COLD);

        let aqi = aqi_gauge("AQI", Some(150));
        assert_eq!(aqi.get_color(150.0), AqiCategory::Poor.color());
        assert_eq!(aqi.caption.as_deref(), Some("Poor"));
    }

    #[test]
    fn renders_value_and_bar() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        humidity_gauge("Humidity", Some(50.0)).render(area, &mut buf);

        let row: String = (1..19).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.starts_with("50%"));
        assert_eq!(buf[(1, 2)].symbol(), "█");
        assert_eq!(buf[(18, 2)].symbol(), "░");
    }

    #[test]
    fn degenerate_range_does_not_fill() {
        let gauge = GaugeWidget::new("x", Some(5.0), "").range(1.0, 1.0);
        assert_eq!(gauge.fill_ratio(5.0), 0.0);
    }
}

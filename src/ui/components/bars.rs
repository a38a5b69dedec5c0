use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const LABEL_WIDTH: u16 = 10;
const VALUE_WIDTH: u16 = 12;

#[derive(Debug, Clone)]
pub struct BarEntry {
    pub label: String,
    pub value: f64,
    pub text: String,
    pub color: Color,
}

impl BarEntry {
    pub fn new(label: impl Into<String>, value: f64, text: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            value,
            text: text.into(),
            color,
        }
    }
}

/// One labelled horizontal bar per row, scaled over a shared range.
pub struct BarListWidget<'a> {
    title: &'a str,
    entries: Vec<BarEntry>,
    min: f64,
    max: f64,
    guides: Vec<(f64, &'a str)>,
}

impl<'a> BarListWidget<'a> {
    pub fn new(title: &'a str, entries: Vec<BarEntry>) -> Self {
        let max = entries
            .iter()
            .map(|e| e.value)
            .fold(0.0_f64, f64::max)
            .max(1.0);
        Self {
            title,
            entries,
            min: 0.0,
            max,
            guides: Vec::new(),
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Reference value listed under the bars, e.g. (100, "Moderate").
    pub fn guide(mut self, value: f64, label: &'a str) -> Self {
        self.guides.push((value, label));
        self
    }

    fn filled_cells(&self, value: f64, width: u16) -> u16 {
        if self.max <= self.min {
            return 0;
        }
        let ratio = ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        (width as f64 * ratio).round() as u16
    }
}

impl Widget for BarListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(self.title, Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            Paragraph::new(Span::styled("No data", Theme::dim())).render(inner, buf);
            return;
        }

        let bar_width = inner.width.saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 2);
        let guide_rows = if self.guides.is_empty() { 0 } else { 1 };
        let rows = inner.height.saturating_sub(guide_rows) as usize;

        for (i, entry) in self.entries.iter().take(rows).enumerate() {
            let y = inner.y + i as u16;
            let filled = self.filled_cells(entry.value, bar_width);

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<width$} ", entry.label, width = LABEL_WIDTH as usize),
                    Theme::dim(),
                ),
                Span::styled(
                    "█".repeat(filled as usize),
                    Style::default().fg(entry.color),
                ),
                Span::styled(
                    "░".repeat(bar_width.saturating_sub(filled) as usize),
                    Theme::dim(),
                ),
                Span::styled(format!(" {}", entry.text), Style::default().fg(entry.color)),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }

        if !self.guides.is_empty() && inner.height > 0 {
            let guides = self
                .guides
                .iter()
                .map(|(value, label)| format!("{}: {:.0}", label, value))
                .collect::<Vec<_>>()
                .join("  ");
            let y = inner.y + inner.height - 1;
            let line = Line::from(Span::styled(format!("┄ {}", guides), Theme::dim()));
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_defaults_to_largest_entry() {
        let widget = BarListWidget::new(
            "x",
            vec![
                BarEntry::new("a", 10.0, "10", Color::Red),
                BarEntry::new("b", 40.0, "40", Color::Red),
            ],
        );
        assert_eq!(widget.max, 40.0);
        assert_eq!(widget.filled_cells(20.0, 10), 5);
        assert_eq!(widget.filled_cells(80.0, 10), 10);
    }

    #[test]
    fn negative_values_render_empty() {
        let widget = BarListWidget::new("x", vec![]).range(0.0, 100.0);
        assert_eq!(widget.filled_cells(-5.0, 10), 0);
    }

    #[test]
    fn renders_label_and_guide() {
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        BarListWidget::new(
            "Trend",
            vec![BarEntry::new("00:00", 80.0, "80", Color::Yellow)],
        )
        .range(0.0, 200.0)
        .guide(100.0, "Moderate")
        .render(area, &mut buf);

        let first: String = (1..6).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(first, "00:00");
        let last: String = (1..14).map(|x| buf[(x, 3)].symbol().to_string()).collect();
        assert_eq!(last, "┄ Moderate: 1");
    }
}

use crate::logic::CityComparison;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

pub struct ComparisonScreen<'a> {
    pub comparison: Option<&'a CityComparison>,
    pub compare_city: Option<&'a str>,
}

impl<'a> ComparisonScreen<'a> {
    pub fn new(comparison: Option<&'a CityComparison>) -> Self {
        Self {
            comparison,
            compare_city: None,
        }
    }

    pub fn with_compare_city(mut self, city: Option<&'a str>) -> Self {
        self.compare_city = city;
        self
    }
}

impl Widget for ComparisonScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(comparison) = self.comparison else {
            let hint = match self.compare_city {
                Some(city) => format!("Waiting for data for {} - press [r] to refresh", city),
                None => "No comparison city selected - press [v] to pick one".to_string(),
            };
            Paragraph::new(Span::styled(hint, Theme::dim())).render(area, buf);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let header = Row::new(vec![
            Cell::from("Metric"),
            Cell::from(comparison.primary_city.as_str()),
            Cell::from(comparison.other_city.as_str()),
        ])
        .style(Theme::header());

        let rows: Vec<Row> = comparison
            .rows
            .iter()
            .map(|row| {
                let (a_style, b_style) = if row.primary > row.other {
                    (Theme::highlight(), Theme::normal())
                } else if row.other > row.primary {
                    (Theme::normal(), Theme::highlight())
                } else {
                    (Theme::normal(), Theme::normal())
                };
                Row::new(vec![
                    Cell::from(row.metric).style(Theme::dim()),
                    Cell::from(format!("{:.1}", row.primary)).style(a_style),
                    Cell::from(format!("{:.1}", row.other)).style(b_style),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(20),
            Constraint::Length(16),
            Constraint::Length(16),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(Span::styled("City Comparison", Theme::title()))
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            )
            .render(chunks[0], buf);

        let winner = Line::from(vec![
            Span::styled("More comfortable: ", Theme::dim()),
            Span::styled(
                comparison.winner.as_str(),
                Style::default().fg(Theme::SUCCESS),
            ),
        ]);
        Paragraph::new(winner)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border_focused()),
            )
            .render(chunks[1], buf);
    }
}

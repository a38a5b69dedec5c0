use crate::models::{BestTimeWindow, Recommendation};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct RecommendationsScreen<'a> {
    pub recommendations: &'a [Recommendation],
    pub selected_index: usize,
    pub best_time: Option<BestTimeWindow>,
}

impl<'a> RecommendationsScreen<'a> {
    pub fn new(recommendations: &'a [Recommendation]) -> Self {
        Self {
            recommendations,
            selected_index: 0,
            best_time: None,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn with_best_time(mut self, best_time: Option<BestTimeWindow>) -> Self {
        self.best_time = best_time;
        self
    }
}

impl Widget for RecommendationsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(8),    // Content
                Constraint::Length(3), // Best time outside
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Recommendations", Theme::title()),
            Span::styled(format!(" ({})", self.recommendations.len()), Theme::dim()),
            Span::styled("  [↑↓] select", Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.render_list(content[0], buf);
        self.render_details(content[1], buf);
        self.render_best_time(chunks[2], buf);
    }
}

impl RecommendationsScreen<'_> {
    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Advisories")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.recommendations.is_empty() {
            let para = Paragraph::new(Span::styled("No data yet", Theme::dim()));
            para.render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };

                let line = Line::from(vec![
                    Span::styled(format!("{} ", rec.kind.icon()), Theme::token(rec.color)),
                    Span::styled(&rec.title, Theme::token(rec.color)),
                ]);

                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(rec) = self.recommendations.get(self.selected_index) else {
            let para = Paragraph::new(Span::styled(
                "Select a recommendation to view details",
                Theme::dim(),
            ));
            para.render(inner, buf);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(rec.display_title(), Theme::header())),
            Line::default(),
            Line::from(vec![
                Span::styled("Category: ", Theme::dim()),
                Span::styled(rec.kind.as_str(), Theme::token(rec.color)),
            ]),
            Line::default(),
            Line::from(Span::styled(&rec.description, Theme::normal())),
            Line::default(),
        ];

        if !rec.data_points.is_empty() {
            lines.push(Line::from(Span::styled("Data Points:", Theme::dim())));
            for dp in &rec.data_points {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}: ", dp.label), Theme::dim()),
                    Span::styled(&dp.value, Theme::highlight()),
                    Span::styled(format!(" ({})", dp.source), Theme::dim()),
                ]));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_best_time(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Best Time Outside")
            .borders(Borders::ALL)
            .border_style(Theme::border_focused());

        let line = match self.best_time {
            Some(window) => Line::from(vec![
                Span::styled(window.to_string(), Theme::highlight()),
                Span::styled(
                    format!("  (comfort peaks at {:.0})", window.peak_score),
                    Theme::dim(),
                ),
            ]),
            None => Line::from(Span::styled("-", Theme::dim())),
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

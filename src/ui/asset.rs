//! Asset detail screen
//!
//! A title, the placeholder frame where a chart would go, and two inert
//! action buttons. Pure display; the only interaction is navigating back.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::market::Asset;

/// Detail screen widget for one asset
pub struct AssetDetailWidget {
    asset: Asset,
}

impl AssetDetailWidget {
    pub fn new(asset: Asset) -> Self {
        Self { asset }
    }
}

impl Widget for AssetDetailWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(2),  // title
            Constraint::Min(6),    // graph placeholder
            Constraint::Length(1), // spacer
            Constraint::Length(1), // indication button
            Constraint::Length(1), // report button
        ])
        .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            format!("{} Stock Graph", self.asset.name()),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .centered();
        title.render(chunks[0], buf);

        let graph = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let graph_inner = graph.inner(chunks[1]);
        graph.render(chunks[1], buf);
        if graph_inner.height > 0 {
            let hint = Paragraph::new(Line::from(Span::styled(
                "no chart data",
                Style::default().fg(Color::DarkGray),
            )))
            .centered();
            let mid = Rect {
                y: graph_inner.y + graph_inner.height / 2,
                height: 1,
                ..graph_inner
            };
            hint.render(mid, buf);
        }

        let button_style = Style::default().fg(Color::White).bg(Color::Blue);
        Paragraph::new(Line::from(Span::styled(" Indication ", button_style)))
            .centered()
            .render(chunks[3], buf);
        Paragraph::new(Line::from(Span::styled(" Generate Report ", button_style)))
            .centered()
            .render(chunks[4], buf);
    }
}

//! Hub screen: the asset list plus settings/profile triggers

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::market::Quote;

/// Selection state for the hub's asset list
#[derive(Debug, Default)]
pub struct HubView {
    selected: usize,
}

impl HubView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn widget<'a>(&self, quotes: &'a [Quote], prompt: &'a str) -> HubWidget<'a> {
        HubWidget {
            quotes,
            prompt,
            selected: self.selected,
        }
    }
}

/// Hub screen widget
pub struct HubWidget<'a> {
    quotes: &'a [Quote],
    prompt: &'a str,
    selected: usize,
}

impl Widget for HubWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(vec![
            Span::styled(
                "CryptoBot",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("[s] Settings", Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled("[p] Profile", Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::default());

        for (i, quote) in self.quotes.iter().enumerate() {
            let marker = if i == self.selected { "> " } else { "  " };
            let row_style = if i == self.selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<6}", quote.asset.symbol()), row_style),
                Span::styled(
                    format!("{:>12} ", quote.price),
                    Style::default().fg(quote.trend.color()),
                ),
                Span::styled(quote.trend.arrow(), Style::default().fg(quote.trend.color())),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            self.prompt,
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(area, buf);
    }
}

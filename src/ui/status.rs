//! Status bar component

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Status bar widget
pub struct StatusBar<'a> {
    app_name: &'a str,
    version: &'a str,
    screen: &'a str,
    hints: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(app_name: &'a str, version: &'a str, screen: &'a str, hints: &'a str) -> Self {
        Self {
            app_name,
            version,
            screen,
            hints,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().bg(Color::DarkGray).fg(Color::White);
        buf.set_style(area, style);

        let spans = vec![
            Span::styled(
                format!(" {} v{} ", self.app_name, self.version),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("│ "),
            Span::styled(
                format!("{} ", self.screen),
                Style::default().fg(Color::White),
            ),
            Span::raw("│ "),
            Span::styled(self.hints, Style::default().fg(Color::Gray)),
        ];

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

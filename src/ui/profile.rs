//! User profile screen rendered from configured display data

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::ProfileConfig;

/// Profile screen widget
pub struct ProfileWidget<'a> {
    profile: &'a ProfileConfig,
}

impl<'a> ProfileWidget<'a> {
    pub fn new(profile: &'a ProfileConfig) -> Self {
        Self { profile }
    }
}

fn info_row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {label:<26}")),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

impl Widget for ProfileWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            self.profile.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            self.profile.email.clone(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            "Account Overview",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(info_row(
            "Total Portfolio Value:",
            self.profile.portfolio_value.clone(),
        ));
        lines.push(info_row(
            "Total Trades:",
            self.profile.total_trades.to_string(),
        ));
        lines.push(info_row(
            "Successful Predictions:",
            self.profile.success_rate.clone(),
        ));
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            "Recent Trades",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for trade in &self.profile.recent_trades {
            lines.push(Line::from(vec![
                Span::raw(format!("  {:<6}", trade.asset.symbol())),
                Span::styled(
                    trade.change.clone(),
                    Style::default().fg(trade.trend.color()),
                ),
            ]));
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            " Account Settings [s] ",
            Style::default().fg(Color::White).bg(Color::Blue),
        )));

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(profile: &ProfileConfig, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| frame.render_widget(ProfileWidget::new(profile), frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut result = String::new();
        for y in 0..height {
            for x in 0..width {
                result.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            result.push('\n');
        }
        result
    }

    #[test]
    fn test_renders_configured_identity_and_figures() {
        let profile = ProfileConfig::default();
        let rendered = render_to_string(&profile, 60, 16);

        assert!(rendered.contains("Umair"));
        assert!(rendered.contains("umairslav@giki.com"));
        assert!(rendered.contains("$15,230.75"));
        assert!(rendered.contains("128"));
        assert!(rendered.contains("78%"));
    }

    #[test]
    fn test_renders_trade_history_rows() {
        let profile = ProfileConfig::default();
        let rendered = render_to_string(&profile, 60, 16);

        assert!(rendered.contains("BTC"));
        assert!(rendered.contains("+2.5%"));
        assert!(rendered.contains("ETH"));
        assert!(rendered.contains("-1.3%"));
        assert!(rendered.contains("SOL"));
        assert!(rendered.contains("+0.8%"));
        assert!(rendered.contains("Account Settings"));
    }
}

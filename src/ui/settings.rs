//! Settings screen: the fixed list of setting entries
//!
//! Section and entry labels are UI structure rather than display data, so
//! they live here instead of in the config.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Sections and their entries, in display order
const SECTIONS: &[(&str, &[&str])] = &[
    (
        "Account Settings",
        &["Manage Wallets", "Security Settings", "API Keys"],
    ),
    (
        "Trading Preferences",
        &[
            "Notification Settings",
            "Preferred Trading Pairs",
            "Trading Strategies",
        ],
    ),
    (
        "Market Analysis",
        &["Market Indicators", "Price Alerts"],
    ),
    (
        "About",
        &["Help & Support", "Terms of Service", "Privacy Policy"],
    ),
];

/// Scroll state for the settings list
#[derive(Debug, Default)]
pub struct SettingsView {
    scroll: usize,
}

impl SettingsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < line_count() {
            self.scroll += 1;
        }
    }

    pub fn widget(&self) -> SettingsWidget {
        SettingsWidget { scroll: self.scroll }
    }
}

/// Total rendered lines, used to bound scrolling
fn line_count() -> usize {
    // Title + blank, then per section: header + entries + trailing blank
    2 + SECTIONS
        .iter()
        .map(|(_, entries)| entries.len() + 2)
        .sum::<usize>()
}

fn render_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(line_count());

    lines.push(Line::from(Span::styled(
        "Settings",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    for (section, entries) in SECTIONS {
        lines.push(Line::from(Span::styled(
            *section,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for entry in *entries {
            lines.push(Line::from(format!("  {entry}")));
        }
        lines.push(Line::default());
    }

    lines
}

/// Settings screen widget
pub struct SettingsWidget {
    scroll: usize,
}

impl Widget for SettingsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let visible: Vec<Line> = render_lines()
            .into_iter()
            .skip(self.scroll)
            .take(area.height as usize)
            .collect();

        Paragraph::new(visible).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(view: &SettingsView, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| frame.render_widget(view.widget(), frame.area()))
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
    fn test_all_sections_present_in_lines() {
        let text: Vec<String> = render_lines()
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect();
        let text = text.join("\n");

        for (section, entries) in SECTIONS {
            assert!(text.contains(section), "missing section {section}");
            for entry in *entries {
                assert!(text.contains(entry), "missing entry {entry}");
            }
        }
    }

    #[test]
    fn test_scroll_reveals_later_sections() {
        let mut view = SettingsView::new();
        let top = render_to_string(&view, 40, 6);
        assert!(top.contains("Account Settings"));
        assert!(!top.contains("Privacy Policy"));

        for _ in 0..line_count() {
            view.scroll_down();
        }
        let bottom = render_to_string(&view, 40, 6);
        assert!(!bottom.contains("Account Settings"));
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut view = SettingsView::new();
        view.scroll_up();
        assert_eq!(view.scroll, 0);

        for _ in 0..1000 {
            view.scroll_down();
        }
        assert!(view.scroll < line_count());
    }
}

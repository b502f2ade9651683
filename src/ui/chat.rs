//! Conversation view for the assistant screen
//!
//! Messages render bottom-aligned with a scroll offset measured in lines
//! from the tail. While auto-follow is on the view sticks to the newest
//! message; any manual scroll detaches it until the next submit.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::conversation::{Conversation, Message, Origin};

/// Scroll state for the conversation view
#[derive(Debug)]
pub struct ChatView {
    /// Lines scrolled up from the tail; 0 means following the newest line
    scroll_offset: usize,
    auto_scroll: bool,
}

impl ChatView {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            auto_scroll: true,
        }
    }

    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        if self.scroll_offset == 0 {
            self.auto_scroll = true;
        }
    }

    pub fn page_up(&mut self, lines: usize) {
        self.auto_scroll = false;
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn page_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        if self.scroll_offset == 0 {
            self.auto_scroll = true;
        }
    }

    /// Snap back to the tail (called after a submit)
    pub fn enable_auto_scroll(&mut self) {
        self.auto_scroll = true;
        self.scroll_offset = 0;
    }

    pub fn widget<'a>(
        &self,
        conversation: &'a Conversation,
        show_timestamps: bool,
    ) -> ChatWidget<'a> {
        ChatWidget {
            conversation,
            show_timestamps,
            scroll_offset: if self.auto_scroll { 0 } else { self.scroll_offset },
        }
    }
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a message to lines (header + wrapped body + separator)
fn render_message_to_lines(message: &Message, width: u16, show_timestamps: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let (author, author_style) = match message.origin {
        Origin::User => (
            "You",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Origin::Assistant => (
            "CryptoBot",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let mut header = vec![Span::styled(author, author_style)];
    if show_timestamps {
        header.push(Span::styled(
            format!(" ({})", message.timestamp.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(header));

    let body_width = width.max(1) as usize;
    for wrapped in textwrap::wrap(&message.text, body_width) {
        lines.push(Line::from(wrapped.into_owned()));
    }

    // Separator between messages
    lines.push(Line::default());

    lines
}

/// Widget rendering the conversation bottom-aligned
pub struct ChatWidget<'a> {
    conversation: &'a Conversation,
    show_timestamps: bool,
    scroll_offset: usize,
}

impl Widget for ChatWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines: Vec<Line> = self
            .conversation
            .messages()
            .iter()
            .flat_map(|message| render_message_to_lines(message, area.width, self.show_timestamps))
            .collect();

        let visible_lines = area.height as usize;
        let total_lines = lines.len();

        // Clamp the offset so scrolling past the first line pins to the top
        let max_offset = total_lines.saturating_sub(visible_lines);
        let offset = self.scroll_offset.min(max_offset);

        let skip = total_lines.saturating_sub(visible_lines + offset);
        let visible: Vec<Line> = lines.into_iter().skip(skip).take(visible_lines).collect();

        Paragraph::new(visible).render(area, buf);
    }
}

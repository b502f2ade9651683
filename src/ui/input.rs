//! Draft input box with word-wrap and cursor positioning
//!
//! Ratatui's `Paragraph` can word-wrap, but it doesn't expose where text
//! lands after wrapping, which makes cursor placement guesswork. We pre-wrap
//! with the `textwrap` crate and compute the cursor position from the same
//! wrapped output, so cursor and display cannot drift apart. One quirk:
//! `textwrap` trims trailing spaces, so those are counted separately and
//! added back to the cursor column.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// The draft buffer: the in-progress text a user is typing before submit
#[derive(Debug)]
pub struct InputBox {
    content: String,
    /// Cursor as a byte offset into `content`, always on a char boundary
    cursor: usize,
    placeholder: String,
}

impl InputBox {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            placeholder: placeholder.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Calculate required height for the input box given a width
    pub fn required_height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2) as usize;
        if inner_width == 0 {
            return 3;
        }
        let wrapped = wrap_text(&self.content, inner_width);
        (wrapped.len() as u16 + 2).max(3)
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn delete_char(&mut self) {
        if let Some((start, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.content.remove(start);
            self.cursor = start;
        }
    }

    /// Delete the character at the cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some((start, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.cursor = start;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_cursor_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clear the draft. Callers only do this after the conversation has
    /// accepted a submit; a rejected (blank) draft stays as typed.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn widget(&self) -> InputBoxWidget<'_> {
        InputBoxWidget { state: self }
    }
}

/// Input box widget for rendering
pub struct InputBoxWidget<'a> {
    state: &'a InputBox,
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let wrapped_lines = wrap_text(&self.state.content, width);

        let paragraph = if self.state.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                self.state.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            )))
        } else {
            let lines: Vec<Line> = wrapped_lines.iter().map(|s| Line::from(s.as_str())).collect();
            Paragraph::new(lines)
        };
        paragraph.render(inner, buf);

        let (cursor_x, cursor_y) =
            cursor_position_in_wrapped(&self.state.content, self.state.cursor, &wrapped_lines);

        if cursor_y < inner.height as usize {
            let x = inner.x + cursor_x as u16;
            let y = inner.y + cursor_y as u16;
            if x < inner.x + inner.width && y < inner.y + inner.height {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
                }
            }
        }
    }
}

/// Wrap text into lines, handling explicit newlines
fn wrap_text(content: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![content.to_string()];
    }

    let mut result = Vec::new();
    for paragraph in content.split('\n') {
        if paragraph.is_empty() {
            result.push(String::new());
        } else {
            for line in wrap(paragraph, width) {
                result.push(line.into_owned());
            }
        }
    }
    if result.is_empty() {
        result.push(String::new());
    }
    result
}

/// Calculate cursor (x, y) position within wrapped lines
fn cursor_position_in_wrapped(content: &str, byte_pos: usize, wrapped_lines: &[String]) -> (usize, usize) {
    let text_before_cursor = &content[..byte_pos];

    // Trailing spaces that textwrap trimmed off the wrapped lines
    let trailing_spaces = text_before_cursor.chars().rev().take_while(|&c| c == ' ').count();
    let chars_before: usize = text_before_cursor.chars().count();

    let mut chars_consumed = 0usize;
    for (line_idx, line) in wrapped_lines.iter().enumerate() {
        let line_chars = line.chars().count();

        if chars_consumed + line_chars >= chars_before - trailing_spaces {
            let col = (chars_before - trailing_spaces) - chars_consumed;
            let prefix: String = line.chars().take(col).collect();
            let cursor_x = prefix.width() + trailing_spaces;
            return (cursor_x, line_idx);
        }

        chars_consumed += line_chars;
    }

    let last_line_width = wrapped_lines.last().map(|s| s.width()).unwrap_or(0);
    (last_line_width + trailing_spaces, wrapped_lines.len().saturating_sub(1))
}

//! Status Line Component
//!
//! Displays mode indicator, messages, and the row counter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;

/// Message type for status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::White,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Status line widget
pub struct StatusLine<'a> {
    mode: InputMode,
    search_buffer: Option<&'a str>,
    message: Option<(&'a str, MessageType)>,
    item_count: Option<(usize, usize)>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            search_buffer: None,
            message: None,
            item_count: None,
        }
    }

    pub fn search_buffer(mut self, buffer: &'a str) -> Self {
        self.search_buffer = Some(buffer);
        self
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn item_count(mut self, selected: usize, total: usize) -> Self {
        self.item_count = Some((selected, total));
        self
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mut x = area.x;

        // Mode indicator
        let mode_style = match self.mode {
            InputMode::Normal => Style::default().fg(Color::Black).bg(Color::Blue),
            InputMode::Insert => Style::default().fg(Color::Black).bg(Color::Green),
            InputMode::Search => Style::default().fg(Color::Black).bg(Color::Magenta),
            InputMode::Confirm => Style::default().fg(Color::Black).bg(Color::Red),
        };

        let mode_text = format!(" {} ", self.mode.indicator());
        buf.set_string(x, area.y, &mode_text, mode_style.add_modifier(Modifier::BOLD));
        x += mode_text.len() as u16;

        buf.set_string(x, area.y, " ", Style::default().bg(Color::DarkGray));
        x += 1;

        if let Some(buffer) = self.search_buffer {
            let text = format!("/{}", buffer);
            buf.set_string(x, area.y, &text, Style::default().fg(Color::White).bg(Color::DarkGray));
        } else if let Some((msg, msg_type)) = self.message {
            buf.set_string(x, area.y, msg, Style::default().fg(msg_type.color()).bg(Color::DarkGray));
        }

        if let Some((selected, total)) = self.item_count {
            let right_text = format!("{}/{}", selected + 1, total);
            let right_x = area.x + area.width.saturating_sub(right_text.len() as u16 + 1);
            buf.set_string(right_x, area.y, &right_text, Style::default().fg(Color::Gray).bg(Color::DarkGray));
        }
    }
}

/// Help bar widget
pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn for_mode(mode: InputMode) -> Self {
        let hints = match mode {
            InputMode::Normal => vec![
                ("1-3", "view"),
                ("j/k", "navigate"),
                ("i", "form"),
                ("e", "edit"),
                ("dd", "delete"),
                ("/", "search"),
                ("q", "quit"),
            ],
            InputMode::Insert => vec![
                ("Tab", "next field"),
                ("Enter", "submit"),
                ("C-u", "clear"),
                ("Esc", "leave"),
            ],
            InputMode::Search => vec![("Enter", "keep"), ("Esc", "clear")],
            InputMode::Confirm => vec![("y", "yes"), ("n", "no")],
        };
        Self { hints }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_message_and_counter() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusLine::new(InputMode::Normal)
            .message("Student added", MessageType::Success)
            .item_count(1, 3)
            .render(area, &mut buf);

        let text = line_text(&buf);
        assert!(text.contains("NORMAL"));
        assert!(text.contains("Student added"));
        assert!(text.contains("2/3"));
    }

    #[test]
    fn test_search_buffer_replaces_message() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusLine::new(InputMode::Search)
            .search_buffer("phy")
            .message("ignored", MessageType::Info)
            .render(area, &mut buf);

        let text = line_text(&buf);
        assert!(text.contains("/phy"));
        assert!(!text.contains("ignored"));
    }
}

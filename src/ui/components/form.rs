//! Form Component
//!
//! Renders a [`FormState`]: one labelled row per field with the field's
//! error message underneath.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::widgets::{FormField, FormState};

const LABEL_WIDTH: u16 = 16;

/// Form widget
pub struct FormWidget<'a> {
    form: &'a FormState,
    title: &'a str,
    focused: bool,
}

impl<'a> FormWidget<'a> {
    pub fn new(form: &'a FormState, title: &'a str) -> Self {
        Self {
            form,
            title,
            focused: false,
        }
    }

    /// Highlight the active field and draw the cursor
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

fn display_value(field: &FormField, width: usize) -> String {
    if field.is_masked() {
        "*".repeat(field.value.chars().count().min(width))
    } else {
        field.value.chars().take(width).collect()
    }
}

impl Widget for FormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused { Color::Magenta } else { Color::DarkGray };
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(area);
        block.render(area, buf);

        let value_x = inner.x + LABEL_WIDTH;
        let value_width = inner.width.saturating_sub(LABEL_WIDTH + 1);
        let bottom = inner.y + inner.height;

        let mut y = inner.y;
        for (i, field) in self.form.fields().iter().enumerate() {
            if y >= bottom {
                break;
            }
            let is_active = self.focused && i == self.form.active_index();

            let label_style = if is_active {
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            buf.set_string(inner.x, y, format!("{}:", field.label), label_style);

            let field_style = if is_active {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            for x in value_x..value_x + value_width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(field_style);
                }
            }

            let value_style = if field.is_masked() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            let shown = display_value(field, value_width as usize);
            buf.set_string(value_x, y, &shown, value_style.patch(field_style));

            if is_active {
                let cursor_x = value_x + self.form.cursor() as u16;
                if cursor_x < value_x + value_width {
                    if let Some(cell) = buf.cell_mut((cursor_x, y)) {
                        cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
                    }
                }
            }

            if let Some(error) = self.form.error(field.name) {
                if y + 1 < bottom {
                    buf.set_string(value_x, y + 1, error, Style::default().fg(Color::Red));
                }
            }

            y += 3;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ErrorMap;
    use crate::widgets::FieldKind;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn sample() -> FormState {
        FormState::new(vec![
            FormField::text("fullName", "Full Name"),
            FormField::new("password", "Password", FieldKind::Password),
        ])
    }

    #[test]
    fn test_password_is_masked() {
        let mut form = sample();
        form.set_field("fullName", "Ann");
        form.set_field("password", "hunter22");

        let area = Rect::new(0, 0, 50, 10);
        let mut buf = Buffer::empty(area);
        FormWidget::new(&form, " Register ").render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("Ann"));
        let password_row = row_text(&buf, 4);
        assert!(password_row.contains("********"));
        assert!(!password_row.contains("hunter22"));
    }

    #[test]
    fn test_error_shown_under_field() {
        let mut form = sample();
        let mut errors = ErrorMap::new();
        errors.insert("fullName", "Full name is required");
        form.set_errors(errors);

        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        FormWidget::new(&form, " Register ").render(area, &mut buf);

        assert!(row_text(&buf, 2).contains("Full name is required"));
    }
}

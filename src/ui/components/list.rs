//! Record Table Component
//!
//! Displays the visible rows of a widget's store in a scrollable table.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::records::{Contact, Student, VisibleRow};

#[derive(Debug, Clone, Default)]
pub struct ListViewState {
    pub selected: Option<usize>,
    pub total: usize,
    table_state: TableState,
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
        self.table_state.select(index);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.select(compute_selection_after_total_change(self.selected, total));
    }

    pub fn move_up(&mut self) {
        if self.total == 0 {
            return;
        }
        let new_index = self.selected.unwrap_or(0).saturating_sub(1);
        self.select(Some(new_index));
    }

    pub fn move_down(&mut self) {
        if self.total == 0 {
            return;
        }
        let new_index = self.selected.map_or(0, |i| (i + 1).min(self.total - 1));
        self.select(Some(new_index));
    }

    pub fn move_to_top(&mut self) {
        if self.total > 0 {
            self.select(Some(0));
        }
    }

    pub fn move_to_bottom(&mut self) {
        if self.total > 0 {
            self.select(Some(self.total - 1));
        }
    }

    pub fn table_state_mut(&mut self) -> &mut TableState {
        &mut self.table_state
    }
}

fn compute_selection_after_total_change(selected: Option<usize>, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    match selected {
        Some(sel) if sel >= total => Some(total - 1),
        Some(sel) => Some(sel),
        None => Some(0),
    }
}

/// A record that can be shown as a table row
pub trait TableRow {
    const HEADERS: &'static [&'static str];
    const WIDTHS: &'static [u16];

    fn cells(&self) -> Vec<String>;
}

impl TableRow for Student {
    const HEADERS: &'static [&'static str] = &["Name", "Email", "Age", "Course"];
    const WIDTHS: &'static [u16] = &[30, 35, 10, 25];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.age.clone(),
            self.course.clone(),
        ]
    }
}

impl TableRow for Contact {
    const HEADERS: &'static [&'static str] = &["Full Name", "Phone"];
    const WIDTHS: &'static [u16] = &[60, 40];

    fn cells(&self) -> Vec<String> {
        vec![self.full_name.clone(), self.phone.clone()]
    }
}

pub struct RecordTable<'a, R> {
    rows: &'a [VisibleRow<'a, R>],
    block: Option<Block<'a>>,
    highlight_style: Style,
}

impl<'a, R: TableRow> RecordTable<'a, R> {
    pub fn new(rows: &'a [VisibleRow<'a, R>]) -> Self {
        Self {
            rows,
            block: None,
            highlight_style: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<R: TableRow> StatefulWidget for RecordTable<'_, R> {
    type State = ListViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let header = Row::new(R::HEADERS.iter().copied())
            .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));
        let rows = self.rows.iter().map(|row| Row::new(row.record.cells()));
        let widths = R::WIDTHS.iter().map(|w| Constraint::Percentage(*w));

        let mut table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(self.highlight_style)
            .highlight_symbol(" ");
        if let Some(block) = self.block {
            table = table.block(block);
        }

        StatefulWidget::render(table, area, buf, state.table_state_mut());
    }
}

pub struct EmptyState<'a> {
    message: &'a str,
    hint: Option<&'a str>,
    block: Option<Block<'a>>,
}

impl<'a> EmptyState<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            hint: None,
            block: None,
        }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

fn center_x(area: &Rect, text_len: usize) -> u16 {
    area.x + (area.width.saturating_sub(text_len as u16)) / 2
}

impl Widget for EmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        let center_y = area.y + area.height / 2;
        let msg_x = center_x(&area, self.message.len());
        buf.set_string(msg_x, center_y, self.message, Style::default().fg(Color::DarkGray));
        render_optional_hint(buf, &area, center_y, self.hint);
    }
}

fn render_optional_hint(buf: &mut Buffer, area: &Rect, center_y: u16, hint: Option<&str>) {
    let Some(hint) = hint else { return };
    if center_y + 1 >= area.y + area.height {
        return;
    }
    let hint_x = center_x(area, hint.len());
    let style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
    buf.set_string(hint_x, center_y + 1, hint, style);
}

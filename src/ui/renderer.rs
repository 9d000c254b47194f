//! Renderer
//!
//! Main rendering logic for the application.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};

use super::components::{
    ConfirmDialog, EmptyState, FormWidget, HelpBar, ListViewState, MessageType, RecordTable,
    StatusLine, TableRow,
};
use crate::input::InputMode;
use crate::records::{Contact, Registration, Student, VisibleRow};
use crate::widgets::FormState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Registration,
    Students,
    Contacts,
}

impl View {
    pub const ALL: [View; 3] = [View::Registration, View::Students, View::Contacts];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::Students => "Students",
            Self::Contacts => "Contacts",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Registration => Self::Students,
            Self::Students => Self::Contacts,
            Self::Contacts => Self::Registration,
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Registration => 0,
            Self::Students => 1,
            Self::Contacts => 2,
        }
    }
}

/// Data for the active view
pub enum Content<'a> {
    Registration {
        form: &'a FormState,
        last: Option<&'a Registration>,
    },
    Students {
        form: &'a FormState,
        editing: bool,
        rows: &'a [VisibleRow<'a, Student>],
        list_state: &'a mut ListViewState,
        search: &'a str,
    },
    Contacts {
        form: &'a FormState,
        rows: &'a [VisibleRow<'a, Contact>],
        list_state: &'a mut ListViewState,
        search: &'a str,
    },
}

pub struct UiState<'a> {
    pub view: View,
    pub mode: InputMode,
    pub content: Content<'a>,
    pub search_buffer: Option<&'a str>,
    pub message: Option<(&'a str, MessageType)>,
    pub confirm_message: Option<&'a str>,
}

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &mut UiState) {
        let size = frame.area();
        let chunks = create_main_layout(size);

        render_tabs(frame, chunks[0], state.view);
        render_content(frame, chunks[1], state);
        render_status_line(frame, chunks[2], state);
        frame.render_widget(HelpBar::for_mode(state.mode), chunks[3]);
        render_confirm_overlay(frame, size, state);
    }
}

fn create_main_layout(size: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size)
}

fn render_tabs(frame: &mut Frame, area: Rect, view: View) {
    let titles = View::ALL
        .iter()
        .enumerate()
        .map(|(i, v)| format!(" {} {} ", i + 1, v.title()));
    let tabs = Tabs::new(titles)
        .select(view.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn split_form_and_list(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area)
}

fn render_content(frame: &mut Frame, area: Rect, state: &mut UiState) {
    let focused = state.mode == InputMode::Insert;
    match &mut state.content {
        Content::Registration { form, last } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(11), Constraint::Min(0)])
                .split(area);
            frame.render_widget(FormWidget::new(form, " Register ").focused(focused), chunks[0]);
            if let Some(user) = last {
                let note = format!("Registered: {} <{}>", user.full_name, user.email);
                frame.render_widget(
                    EmptyState::new(&note).block(records_block(" Last registration ".to_string())),
                    chunks[1],
                );
            }
        }
        Content::Students {
            form,
            editing,
            rows,
            list_state,
            search,
        } => {
            let chunks = split_form_and_list(area);
            let title = if *editing { " Edit Student " } else { " Add Student " };
            frame.render_widget(FormWidget::new(form, title).focused(focused), chunks[0]);
            render_records(frame, chunks[1], "Students", rows, list_state, search, "No students found");
        }
        Content::Contacts {
            form,
            rows,
            list_state,
            search,
        } => {
            let chunks = split_form_and_list(area);
            frame.render_widget(FormWidget::new(form, " Add Contact ").focused(focused), chunks[0]);
            render_records(frame, chunks[1], "Contacts", rows, list_state, search, "No contacts found.");
        }
    }
}

fn records_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
}

fn render_records<R: TableRow>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[VisibleRow<'_, R>],
    list_state: &mut ListViewState,
    search: &str,
    empty_message: &str,
) {
    let title = if search.is_empty() {
        format!(" {} ", title)
    } else {
        format!(" {} /{} ", title, search)
    };

    if rows.is_empty() {
        let empty = EmptyState::new(empty_message)
            .hint("Press 'i' to add one")
            .block(records_block(title));
        frame.render_widget(empty, area);
        return;
    }

    let table = RecordTable::new(rows).block(records_block(title));
    frame.render_stateful_widget(table, area, list_state);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut status = StatusLine::new(state.mode);

    if let Some(buffer) = state.search_buffer {
        status = status.search_buffer(buffer);
    } else if let Some((msg, msg_type)) = state.message {
        status = status.message(msg, msg_type);
    }

    let list_state = match &state.content {
        Content::Registration { .. } => None,
        Content::Students { list_state, .. } | Content::Contacts { list_state, .. } => Some(&**list_state),
    };
    if let Some(selected) = list_state.and_then(|s| s.selected().map(|sel| (sel, s.total))) {
        status = status.item_count(selected.0, selected.1);
    }

    frame.render_widget(status, area);
}

fn render_confirm_overlay(frame: &mut Frame, area: Rect, state: &UiState) {
    if state.mode != InputMode::Confirm {
        return;
    }
    if let Some(msg) = state.confirm_message {
        frame.render_widget(ConfirmDialog::new(" Confirm ", msg), area);
    }
}

//! Picker component: selection inside the dialog plus the keyword editor.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Clear, ListState},
};

use crate::presentation::view_models::PickerDialogViewModel;
use crate::presentation::views::tui::PickerDialogView;

use super::{centered, clamp_selection, select_next, select_previous};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    Toggle(usize),
    Select(usize),
    Confirm,
    Cancel,
    SetKeyword(String),
    NextPage,
    PreviousPage,
}

pub struct PickerComponent {
    state: ListState,
    editing_keyword: bool,
    buffer: String,
}

impl PickerComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            editing_keyword: false,
            buffer: String::new(),
        }
    }

    /// Forget selection and editor state, e.g. when the dialog closes.
    pub fn reset(&mut self) {
        self.state = ListState::default();
        self.editing_keyword = false;
        self.buffer.clear();
    }

    pub fn is_editing_keyword(&self) -> bool {
        self.editing_keyword
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        data: &PickerDialogViewModel,
    ) -> Option<PickerAction> {
        if self.editing_keyword {
            return self.handle_keyword_input(key);
        }

        let data_len = if data.loading { 0 } else { data.rows.len() };
        let selected = self.state.selected().filter(|&i| i < data_len);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                select_next(&mut self.state, data_len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                select_previous(&mut self.state);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => selected.map(PickerAction::Toggle),
            KeyCode::Char('s') => selected.map(PickerAction::Select),
            KeyCode::Char('c') => Some(PickerAction::Confirm),
            KeyCode::Char('n') | KeyCode::PageDown => {
                self.state.select(None);
                Some(PickerAction::NextPage)
            }
            KeyCode::Char('b') | KeyCode::PageUp => {
                self.state.select(None);
                Some(PickerAction::PreviousPage)
            }
            KeyCode::Char('/') => {
                self.editing_keyword = true;
                self.buffer = data.keyword.clone();
                None
            }
            KeyCode::Esc => Some(PickerAction::Cancel),
            _ => None,
        }
    }

    fn handle_keyword_input(&mut self, key: KeyEvent) -> Option<PickerAction> {
        match key.code {
            KeyCode::Char(c) => {
                self.buffer.push(c);
                None
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                None
            }
            KeyCode::Enter => {
                self.editing_keyword = false;
                self.state.select(None);
                Some(PickerAction::SetKeyword(std::mem::take(&mut self.buffer)))
            }
            KeyCode::Esc => {
                self.editing_keyword = false;
                self.buffer.clear();
                None
            }
            _ => None,
        }
    }

    /// Draw the dialog centered over `area`.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &PickerDialogViewModel) {
        let popup = centered(area, 80, 80);
        f.render_widget(Clear, popup);

        let view = PickerDialogView::new(data);
        let block = view.block();
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(inner);

        let editing = self.editing_keyword.then_some(self.buffer.as_str());
        f.render_widget(view.keyword_line(editing), chunks[0]);

        let data_len = if data.loading { 0 } else { data.rows.len() };
        clamp_selection(&mut self.state, data_len);
        f.render_stateful_widget(view.build_list(), chunks[1], &mut self.state);

        f.render_widget(view.footer(), chunks[2]);
    }
}

impl Default for PickerComponent {
    fn default() -> Self {
        Self::new()
    }
}

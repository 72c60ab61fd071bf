//! Editor component: text buffers of the edit form. The buffers are filled
//! from the view model once per opened record, so a failed save keeps what
//! was typed.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::Clear,
};

use crate::presentation::view_models::EditorViewModel;
use crate::presentation::views::tui::EditorDialogView;

use super::centered;

/// Field values submitted from the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorValues {
    pub code: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    Save(EditorValues),
    Cancel,
}

pub struct EditorComponent {
    loaded_for: Option<String>,
    values: [String; 3],
    focus: usize,
}

impl EditorComponent {
    pub fn new() -> Self {
        Self {
            loaded_for: None,
            values: Default::default(),
            focus: 0,
        }
    }

    /// Fill the buffers from `data` unless they already belong to that record.
    pub fn load(&mut self, data: &EditorViewModel) {
        if self.loaded_for.as_deref() == Some(data.id.as_str()) {
            return;
        }
        self.loaded_for = Some(data.id.clone());
        self.values = [
            data.code.clone(),
            data.name.clone(),
            data.description.clone(),
        ];
        self.focus = 0;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<EditorAction> {
        let count = self.values.len();
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % count;
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + count - 1) % count;
                None
            }
            KeyCode::Char(c) => {
                self.values[self.focus].push(c);
                None
            }
            KeyCode::Backspace => {
                self.values[self.focus].pop();
                None
            }
            KeyCode::Enter => {
                let [code, name, description] = self.values.clone();
                Some(EditorAction::Save(EditorValues {
                    code,
                    name,
                    description,
                }))
            }
            KeyCode::Esc => Some(EditorAction::Cancel),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &EditorViewModel) {
        let popup = centered(area, 70, 40);
        f.render_widget(Clear, popup);

        let view = EditorDialogView::new(data);
        let block = view.block();
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(inner);
        f.render_widget(view.fields(&self.values, self.focus), chunks[0]);
        f.render_widget(view.help(), chunks[1]);
    }
}

impl Default for EditorComponent {
    fn default() -> Self {
        Self::new()
    }
}

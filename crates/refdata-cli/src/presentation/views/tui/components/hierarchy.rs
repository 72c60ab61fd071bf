//! Hierarchy component: owns the list selection of the main table and turns
//! key presses into actions on the selected row.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListState};

use crate::presentation::view_models::BrowseScreenViewModel;
use crate::presentation::views::tui::HierarchyTableView;

use super::{clamp_selection, select_next, select_previous};

/// Actions the hierarchy table emits to the browser loop. Indices refer to
/// the rows of the screen the key was pressed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyAction {
    Toggle(usize),
    Edit(usize),
    Delete(usize),
    OpenPicker(usize),
    Reload,
    Quit,
}

pub struct HierarchyComponent {
    state: ListState,
}

impl HierarchyComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> Option<HierarchyAction> {
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
            KeyCode::Home => {
                self.state.select(Some(0));
                None
            }
            KeyCode::End => {
                if data_len > 0 {
                    self.state.select(Some(data_len - 1));
                }
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => selected.map(HierarchyAction::Toggle),
            KeyCode::Char('e') => selected.map(HierarchyAction::Edit),
            KeyCode::Char('d') => selected.map(HierarchyAction::Delete),
            KeyCode::Char('p') => selected.map(HierarchyAction::OpenPicker),
            KeyCode::Char('r') => Some(HierarchyAction::Reload),
            KeyCode::Char('q') | KeyCode::Esc => Some(HierarchyAction::Quit),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &BrowseScreenViewModel) {
        let view = HierarchyTableView::new(data);
        clamp_selection(&mut self.state, view.selectable_len());
        f.render_stateful_widget(view.build_list(), area, &mut self.state);
    }
}

impl Default for HierarchyComponent {
    fn default() -> Self {
        Self::new()
    }
}

pub mod editor;
pub mod hierarchy;
pub mod picker;

pub use editor::{EditorAction, EditorComponent, EditorValues};
pub use hierarchy::{HierarchyAction, HierarchyComponent};
pub use picker::{PickerAction, PickerComponent};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::ListState,
};

fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let next = match state.selected() {
        Some(i) if i + 1 < len => i + 1,
        Some(i) => i,
        None => 0,
    };
    state.select(Some(next));
}

fn select_previous(state: &mut ListState) {
    let prev = match state.selected() {
        Some(i) => i.saturating_sub(1),
        None => 0,
    };
    state.select(Some(prev));
}

/// Keep the selection inside `len` rows after the data changed.
fn clamp_selection(state: &mut ListState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        Some(i) if i >= len => state.select(Some(len - 1)),
        None => state.select(Some(0)),
        _ => {}
    }
}

/// Popup rectangle taking the given share of `area`, centered.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}

//! Ratatui widgets for the interactive browser
//!
//! Views borrow a view model and only map it onto widgets. Selection and
//! scroll state live in `components/`.

pub mod components;
pub mod editor_dialog;
pub mod hierarchy_table;
pub mod picker_dialog;
pub mod status_bar;

pub use components::{
    EditorAction, EditorComponent, EditorValues, HierarchyAction, HierarchyComponent,
    PickerAction, PickerComponent,
};
pub use editor_dialog::EditorDialogView;
pub use hierarchy_table::HierarchyTableView;
pub use picker_dialog::PickerDialogView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

//! View models for the interactive browser, rebuilt from domain state after
//! every key press.

use serde::Serialize;

use super::common::StatusLevel;
use super::hierarchy::HierarchyRowViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub message: String,
    pub level: StatusLevel,
    pub record_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PickerRowViewModel {
    pub row: HierarchyRowViewModel,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PickerDialogViewModel {
    /// Record whose parent is being chosen
    pub target: String,
    pub keyword: String,
    pub loading: bool,
    pub rows: Vec<PickerRowViewModel>,
    pub page_label: String,
    pub selected_label: Option<String>,
    pub can_confirm: bool,
}

/// Field values of the record open in the edit form
#[derive(Debug, Clone, Serialize)]
pub struct EditorViewModel {
    pub id: String,
    /// "CODE - Name" as the record was when the form opened
    pub target: String,
    pub code: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrowseScreenViewModel {
    pub title: String,
    pub loading: bool,
    pub indent_width: usize,
    pub rows: Vec<HierarchyRowViewModel>,
    pub picker: Option<PickerDialogViewModel>,
    pub editor: Option<EditorViewModel>,
    /// Pending yes/no question, shown instead of the key help
    pub confirm_prompt: Option<String>,
    pub status_bar: StatusBarViewModel,
}

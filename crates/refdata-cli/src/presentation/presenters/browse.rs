use refdata_engine::{AncestorPicker, ExpansionState, build_and_flatten};
use refdata_types::Record;

use super::hierarchy::present_row;
use crate::presentation::view_models::{
    BrowseScreenViewModel, EditorViewModel, PickerDialogViewModel, PickerRowViewModel,
    StatusBarViewModel, StatusLevel,
};

/// Everything the browser screen is built from
pub struct BrowseState<'a> {
    pub title: &'a str,
    pub records: &'a [Record],
    pub loading: bool,
    pub expansion: &'a ExpansionState,
    /// Open picker and the label of the record being re-parented
    pub picker: Option<(&'a AncestorPicker, String)>,
    /// Record open in the edit form
    pub editor: Option<&'a Record>,
    pub confirm_prompt: Option<String>,
    pub status: (&'a str, StatusLevel),
    pub indent_width: usize,
}

pub fn present_picker(picker: &AncestorPicker, target: String) -> PickerDialogViewModel {
    let rows = picker
        .rows()
        .iter()
        .map(|row| PickerRowViewModel {
            row: present_row(row, picker.expansion()),
            selected: picker.is_selected(row.id()),
        })
        .collect();

    PickerDialogViewModel {
        target,
        keyword: picker.keyword().to_string(),
        loading: picker.is_loading(),
        rows,
        page_label: format!(
            "Page {} of {} ({} total, {} per page)",
            picker.page() + 1,
            picker.page_count(),
            picker.total_count(),
            picker.page_size()
        ),
        selected_label: picker
            .selected()
            .map(|record| format!("{} - {}", record.code, record.name)),
        can_confirm: picker.can_confirm(),
    }
}

pub fn present_editor(record: &Record) -> EditorViewModel {
    EditorViewModel {
        id: record.id.to_string(),
        target: format!("{} - {}", record.code, record.name),
        code: record.code.clone(),
        name: record.name.clone(),
        description: record.description.clone().unwrap_or_default(),
    }
}

pub fn present_browse_screen(state: BrowseState<'_>) -> BrowseScreenViewModel {
    let rows = if state.loading {
        Vec::new()
    } else {
        build_and_flatten(state.records, state.expansion)
            .iter()
            .map(|row| present_row(row, state.expansion))
            .collect()
    };

    let (message, level) = state.status;

    BrowseScreenViewModel {
        title: state.title.to_string(),
        loading: state.loading,
        indent_width: state.indent_width,
        rows,
        picker: state
            .picker
            .map(|(picker, target)| present_picker(picker, target)),
        editor: state.editor.map(present_editor),
        confirm_prompt: state.confirm_prompt,
        status_bar: StatusBarViewModel {
            message: message.to_string(),
            level,
            record_count: state.records.len(),
        },
    }
}

use refdata_types::{CatalogKind, Page, Record};
use serde_json::Value;

use crate::presentation::view_models::{
    CommandResultViewModel, DeleteResultViewModel, ExtraFieldViewModel, Guidance,
    RecordDetailViewModel, RecordListViewModel, RecordViewModel, SaveAction, SaveResultViewModel,
    StatusBadge,
};

pub fn present_record(record: &Record) -> RecordViewModel {
    RecordViewModel {
        id: record.id.to_string(),
        code: record.code.clone(),
        name: record.name.clone(),
        description: record.description.clone().filter(|d| !d.is_empty()),
        parent_id: record.effective_parent_id().map(ToString::to_string),
    }
}

pub struct ListInput<'a> {
    pub kind: CatalogKind,
    pub page: &'a Page<Record>,
    /// Zero-based page that was requested
    pub page_index: usize,
    pub page_size: usize,
    pub keyword: &'a str,
}

pub fn present_list(input: ListInput<'_>) -> CommandResultViewModel<RecordListViewModel> {
    let paged = !input.kind.is_hierarchical();
    let page_size = input.page_size.max(1);
    let page_count = if paged {
        input.page.total_count.div_ceil(page_size).max(1)
    } else {
        1
    };
    let keyword = input.keyword.trim();

    let mut result = CommandResultViewModel::new(RecordListViewModel {
        kind: input.kind.slug().to_string(),
        title: input.kind.title().to_string(),
        page: if paged { input.page_index + 1 } else { 1 },
        page_count,
        page_size,
        total_count: input.page.total_count,
        keyword: (!keyword.is_empty()).then(|| keyword.to_string()),
        paged,
        records: input.page.items.iter().map(present_record).collect(),
    });

    if paged && input.page_index + 1 < page_count {
        result = result.with_suggestion(Guidance::new("Next page").with_command(format!(
            "refdata list {} --page {}",
            input.kind,
            input.page_index + 2
        )));
    }
    if !paged {
        result = result.with_suggestion(
            Guidance::new("Show the hierarchy").with_command("refdata tree --expand-all"),
        );
    }

    result
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// `parent` is the resolved parent record, when it still exists
pub fn present_detail(
    kind: CatalogKind,
    record: &Record,
    parent: Option<&Record>,
    child_count: usize,
) -> CommandResultViewModel<RecordDetailViewModel> {
    let parent_label = parent
        .map(|p| format!("{} - {}", p.code, p.name))
        .or_else(|| record.parent_label());

    let extra = record
        .extra
        .iter()
        .filter(|(name, _)| name.as_str() != "foundedDate")
        .map(|(name, value)| ExtraFieldViewModel {
            name: name.clone(),
            value: display_value(value),
        })
        .collect();

    let mut result = CommandResultViewModel::new(RecordDetailViewModel {
        kind: kind.slug().to_string(),
        record: present_record(record),
        parent_label,
        founded_date: record.founded_date().map(|d| d.format("%Y-%m-%d").to_string()),
        extra,
        child_count,
    });

    if let Some(parent_id) = record.effective_parent_id()
        && parent.is_none()
    {
        result = result.with_badge(StatusBadge::warning(format!(
            "Parent '{}' does not exist; this record shows as a root",
            parent_id
        )));
    }

    result
}

pub fn present_save(
    kind: CatalogKind,
    action: SaveAction,
    record: &Record,
    warning: Option<String>,
) -> CommandResultViewModel<SaveResultViewModel> {
    let badge = match (&warning, &action) {
        (Some(message), _) => StatusBadge::warning(message.clone()),
        (None, SaveAction::Created) => StatusBadge::success("Created successfully"),
        (None, SaveAction::Updated) => StatusBadge::success("Updated successfully"),
    };

    CommandResultViewModel::new(SaveResultViewModel {
        kind: kind.slug().to_string(),
        action,
        record: present_record(record),
    })
    .with_badge(badge)
    .with_suggestion(
        Guidance::new("Show the record").with_command(format!("refdata show {} {}", kind, record.id)),
    )
}

pub fn present_delete(
    kind: CatalogKind,
    id: &str,
    orphaned_children: usize,
) -> CommandResultViewModel<DeleteResultViewModel> {
    let mut result = CommandResultViewModel::new(DeleteResultViewModel {
        kind: kind.slug().to_string(),
        id: id.to_string(),
        orphaned_children,
    })
    .with_badge(StatusBadge::success("Deleted successfully"));

    if orphaned_children > 0 {
        result = result.with_suggestion(
            Guidance::new(format!(
                "{} child record(s) kept their parent id and now show as roots",
                orphaned_children
            ))
            .with_command("refdata tree"),
        );
    }

    result
}

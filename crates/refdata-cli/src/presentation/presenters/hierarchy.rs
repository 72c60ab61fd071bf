use refdata_engine::{AncestorPicker, ExpansionState, Forest, Row};
use refdata_types::CatalogKind;

use crate::presentation::view_models::{
    CandidatesViewModel, CommandResultViewModel, Guidance, HierarchyRowViewModel,
    HierarchyViewModel, StatusBadge,
};

pub fn present_row(row: &Row<'_>, expansion: &ExpansionState) -> HierarchyRowViewModel {
    let record = row.record;
    HierarchyRowViewModel {
        id: record.id.to_string(),
        code: record.code.clone(),
        name: record.name.clone(),
        description: record.description.clone().filter(|d| !d.is_empty()),
        parent_id: record.effective_parent_id().map(ToString::to_string),
        level: row.level,
        has_children: row.has_children,
        expanded: row.has_children && expansion.is_expanded(row.id()),
    }
}

pub struct HierarchyInput<'a, 'r> {
    pub kind: CatalogKind,
    pub forest: &'a Forest<'r>,
    pub rows: &'a [Row<'r>],
    pub expansion: &'a ExpansionState,
    pub keyword: Option<&'a str>,
    pub total_count: usize,
    pub indent_width: usize,
}

pub fn present_hierarchy(input: HierarchyInput<'_, '_>) -> CommandResultViewModel<HierarchyViewModel> {
    let rows: Vec<HierarchyRowViewModel> = input
        .rows
        .iter()
        .map(|row| present_row(row, input.expansion))
        .collect();

    let collapsed_parents = rows.iter().filter(|r| r.has_children && !r.expanded).count();
    let cycle_breaks: Vec<String> = input.forest.cycle_breaks.iter().map(|id| id.to_string()).collect();
    let dangling: Vec<String> = input.forest.dangling.iter().map(|id| id.to_string()).collect();

    let mut result = CommandResultViewModel::new(HierarchyViewModel {
        title: input.kind.title().to_string(),
        total_count: input.total_count,
        keyword: input.keyword.map(str::to_string),
        rows,
        cycle_breaks,
        dangling,
        indent_width: input.indent_width,
    });

    let cycle_count = result.content.cycle_breaks.len();
    if cycle_count > 0 {
        result = result.with_badge(StatusBadge::warning(format!(
            "{} record(s) form a parent cycle and are shown as roots",
            cycle_count
        )));
    }

    if collapsed_parents > 0 {
        result = result
            .with_suggestion(
                Guidance::new("Expand a record").with_command("refdata tree --expand <ID>"),
            )
            .with_suggestion(
                Guidance::new("Expand everything").with_command("refdata tree --expand-all"),
            );
    }

    result
}

pub fn present_candidates(
    picker: &AncestorPicker,
    indent_width: usize,
) -> CommandResultViewModel<CandidatesViewModel> {
    let rows = picker
        .rows()
        .iter()
        .map(|row| present_row(row, picker.expansion()))
        .collect();
    let keyword = picker.keyword().trim();

    CommandResultViewModel::new(CandidatesViewModel {
        exclude_id: picker.exclude_id().map(ToString::to_string),
        keyword: (!keyword.is_empty()).then(|| keyword.to_string()),
        page: picker.page() + 1,
        page_count: picker.page_count(),
        page_size: picker.page_size(),
        total_count: picker.total_count(),
        rows,
        indent_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;
    use refdata_engine::{build_forest, flatten};
    use refdata_types::{Record, RecordId};

    fn present(records: &[Record], expansion: &ExpansionState) -> CommandResultViewModel<HierarchyViewModel> {
        let forest = build_forest(records);
        let rows = flatten(&forest.roots, expansion);
        present_hierarchy(HierarchyInput {
            kind: CatalogKind::Department,
            forest: &forest,
            rows: &rows,
            expansion,
            keyword: None,
            total_count: records.len(),
            indent_width: 2,
        })
    }

    #[test]
    fn test_expanded_flag_only_for_parents() {
        let records = vec![
            Record::new("a", "A", "Alpha"),
            Record::new("b", "B", "Beta").with_parent("a"),
        ];
        let mut expansion = ExpansionState::new();
        expansion.expand_all(&records);

        let result = present(&records, &expansion);
        let rows = &result.content.rows;
        assert!(rows[0].expanded);
        assert!(!rows[1].expanded);
        assert_eq!(rows[1].parent_id.as_deref(), Some("a"));
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_cycle_gets_warning_badge() {
        let records = vec![
            Record::new("a", "A", "Alpha").with_parent("b"),
            Record::new("b", "B", "Beta").with_parent("a"),
        ];
        let result = present(&records, &ExpansionState::new());
        assert_eq!(result.content.cycle_breaks, vec!["a", "b"]);
        let badge = result.badge.expect("cycle badge");
        assert_eq!(badge.level, StatusLevel::Warning);
        assert_eq!(
            badge.label,
            "2 record(s) form a parent cycle and are shown as roots"
        );
    }

    #[test]
    fn test_blank_description_is_dropped() {
        let records = vec![Record::new("a", "A", "Alpha").with_description("")];
        let result = present(&records, &ExpansionState::new());
        assert_eq!(result.content.rows[0].description, None);
        assert_eq!(result.content.rows[0].id, RecordId::new("a").to_string());
    }
}

//! Ancestor Picker
//!
//! Headless state of the modal used to choose a record's parent. The host
//! fetches candidate pages (using [`AncestorPicker::filter`]) and hands them
//! to [`AncestorPicker::apply_page`]; everything else is local state.
//!
//! Only the record being edited is excluded from the candidates. Its
//! descendants stay selectable, and choosing one of them would create a
//! cycle once saved. Callers that want to flag this can use
//! [`crate::descendant_ids`].

use refdata_types::{Page, PageFilter, Record, RecordId};

use crate::expansion::ExpansionState;
use crate::flatten::Row;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct AncestorPicker {
    exclude_id: Option<RecordId>,
    open: bool,
    loading: bool,
    /// Zero-based page shown in the dialog
    page: usize,
    page_size: usize,
    keyword: String,
    candidates: Vec<Record>,
    total_count: usize,
    expansion: ExpansionState,
    selected: Option<Record>,
}

impl Default for AncestorPicker {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl AncestorPicker {
    pub fn new(page_size: usize) -> Self {
        Self {
            exclude_id: None,
            open: false,
            loading: false,
            page: 0,
            page_size: page_size.max(1),
            keyword: String::new(),
            candidates: Vec::new(),
            total_count: 0,
            expansion: ExpansionState::new(),
            selected: None,
        }
    }

    /// Open the dialog for the record being edited (`None` when creating).
    pub fn open(&mut self, exclude_id: Option<RecordId>) {
        self.exclude_id = exclude_id;
        self.open = true;
        self.loading = true;
    }

    /// Dismiss without confirming: the pending selection, search keyword,
    /// page and expansion are all discarded.
    pub fn close(&mut self) {
        self.open = false;
        self.loading = false;
        self.selected = None;
        self.keyword.clear();
        self.page = 0;
        self.expansion.clear();
        self.candidates.clear();
        self.total_count = 0;
    }

    /// Listing request for the current page and keyword (1-based page index)
    pub fn filter(&self) -> PageFilter {
        PageFilter::new(self.page + 1, self.page_size).with_keyword(Some(&self.keyword))
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Install a freshly fetched page. The excluded record is removed before
    /// any tree is built from the candidates.
    pub fn apply_page(&mut self, page: Page<Record>) {
        let exclude = self.exclude_id.as_ref();
        self.candidates = page
            .items
            .into_iter()
            .filter(|record| Some(&record.id) != exclude)
            .collect();
        self.total_count = page.total_count;
        self.loading = false;
    }

    /// A fetch failed: stop loading and keep whatever was shown before.
    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        self.page = 0;
    }

    /// Jump to a zero-based page. Not clamped: the total is only known once
    /// the page has been fetched.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn page_count(&self) -> usize {
        self.total_count.div_ceil(self.page_size).max(1)
    }

    pub fn toggle(&mut self, id: &RecordId) -> bool {
        self.expansion.toggle(id)
    }

    /// Mark a candidate as the pending choice (radio semantics).
    ///
    /// Returns false when `id` is not among the current candidates.
    pub fn choose(&mut self, id: &RecordId) -> bool {
        match self.candidates.iter().find(|record| &record.id == id) {
            Some(record) => {
                self.selected = Some(record.clone());
                true
            }
            None => false,
        }
    }

    /// Hand the pending choice to the caller and close the dialog.
    ///
    /// Without a pending choice nothing happens and `None` is returned.
    pub fn confirm(&mut self) -> Option<Record> {
        let chosen = self.selected.take()?;
        self.close();
        Some(chosen)
    }

    /// Visible candidate rows for the current expansion
    pub fn rows(&self) -> Vec<Row<'_>> {
        crate::build_and_flatten(&self.candidates, &self.expansion)
    }

    pub fn candidates(&self) -> &[Record] {
        &self.candidates
    }

    pub fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.as_ref().is_some_and(|record| &record.id == id)
    }

    pub fn can_confirm(&self) -> bool {
        self.selected.is_some()
    }

    pub fn exclude_id(&self) -> Option<&RecordId> {
        self.exclude_id.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page<Record> {
        Page::new(
            vec![
                Record::new("a", "A", "Alpha"),
                Record::new("b", "B", "Beta").with_parent("a"),
                Record::new("c", "C", "Gamma"),
            ],
            3,
        )
    }

    fn opened(exclude: Option<&str>) -> AncestorPicker {
        let mut picker = AncestorPicker::default();
        picker.open(exclude.map(RecordId::from));
        picker.apply_page(page());
        picker
    }

    #[test]
    fn test_open_starts_loading() {
        let mut picker = AncestorPicker::default();
        picker.open(None);
        assert!(picker.is_open());
        assert!(picker.is_loading());

        picker.apply_page(page());
        assert!(!picker.is_loading());
        assert_eq!(picker.candidates().len(), 3);
    }

    #[test]
    fn test_filter_is_one_based_with_trimmed_keyword() {
        let mut picker = opened(None);
        picker.set_keyword("  sales ");
        let filter = picker.filter();
        assert_eq!(filter.page_index, 1);
        assert_eq!(filter.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(filter.keyword.as_deref(), Some("sales"));
    }

    #[test]
    fn test_row_click_alone_does_not_confirm() {
        let mut picker = opened(None);
        assert!(picker.choose(&RecordId::new("c")));
        assert!(picker.is_open());
        assert!(picker.is_selected(&RecordId::new("c")));
    }

    #[test]
    fn test_choose_is_single_select() {
        let mut picker = opened(None);
        picker.choose(&RecordId::new("a"));
        picker.choose(&RecordId::new("c"));
        assert!(!picker.is_selected(&RecordId::new("a")));
        assert_eq!(picker.selected().map(|r| r.code.as_str()), Some("C"));
    }

    #[test]
    fn test_choose_unknown_candidate() {
        let mut picker = opened(Some("a"));
        assert!(!picker.choose(&RecordId::new("a")));
        assert!(!picker.can_confirm());
    }

    #[test]
    fn test_confirm_returns_full_record_and_resets() {
        let mut picker = opened(None);
        picker.toggle(&RecordId::new("a"));
        picker.set_keyword("x");
        picker.apply_page(page());
        picker.choose(&RecordId::new("b"));

        let chosen = picker.confirm().expect("selection");
        assert_eq!(chosen.name, "Beta");
        assert_eq!(chosen.effective_parent_id(), Some(&RecordId::new("a")));

        assert!(!picker.is_open());
        assert!(picker.expansion().is_empty());
        assert_eq!(picker.keyword(), "");
        assert_eq!(picker.page(), 0);
    }

    #[test]
    fn test_confirm_without_selection_stays_open() {
        let mut picker = opened(None);
        assert_eq!(picker.confirm(), None);
        assert!(picker.is_open());
    }

    #[test]
    fn test_close_discards_pending_state() {
        let mut picker = opened(None);
        picker.toggle(&RecordId::new("a"));
        picker.choose(&RecordId::new("a"));
        picker.set_keyword("alp");

        picker.close();
        assert!(!picker.is_open());
        assert_eq!(picker.selected(), None);
        assert!(picker.expansion().is_empty());
        assert_eq!(picker.keyword(), "");
    }

    #[test]
    fn test_paging() {
        let mut picker = AncestorPicker::new(2);
        picker.open(None);
        picker.apply_page(Page::new(vec![Record::new("a", "A", "Alpha")], 5));

        assert_eq!(picker.page_count(), 3);
        assert!(picker.next_page());
        assert!(picker.next_page());
        assert!(!picker.next_page());
        assert_eq!(picker.filter().page_index, 3);

        picker.set_page_size(10);
        assert_eq!(picker.page(), 0);
        assert!(!picker.previous_page());
    }

    #[test]
    fn test_failed_load_keeps_candidates() {
        let mut picker = opened(None);
        picker.set_loading(true);
        picker.fail_load();
        assert!(!picker.is_loading());
        assert_eq!(picker.candidates().len(), 3);
    }
}

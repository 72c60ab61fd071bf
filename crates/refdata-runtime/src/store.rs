//! Per-dataset list state: page, keyword, loaded records, edit dialog and
//! the notice queue the view drains after every action.
//!
//! Flat catalogs are fetched one page at a time. The hierarchical catalog is
//! fetched in a single oversized request so the whole tree can be built
//! client-side. Mutations never patch `records` locally; they reload.

use refdata_types::{CatalogKind, PageFilter, Record, RecordDraft, RecordId};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::source::RecordSource;
use crate::validation::validate_draft;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Toast-style message produced by a store action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

pub struct CatalogStore<S> {
    source: S,
    kind: CatalogKind,
    fetch_page_size: usize,
    records: Vec<Record>,
    /// Zero-based page shown in the list
    page: usize,
    page_size: usize,
    total_count: usize,
    keyword: String,
    current: Option<Record>,
    open: bool,
    loading: bool,
    notices: Vec<Notice>,
}

impl<S: RecordSource> CatalogStore<S> {
    pub fn new(source: S, kind: CatalogKind, config: &Config) -> Self {
        Self {
            source,
            kind,
            fetch_page_size: config.hierarchy.fetch_page_size.max(1),
            records: Vec::new(),
            page: 0,
            page_size: config.view.page_size.max(1),
            total_count: 0,
            keyword: String::new(),
            current: None,
            open: false,
            loading: false,
            notices: Vec::new(),
        }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn records(&self) -> &[Record] {
        &self.records
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

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn current(&self) -> Option<&Record> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        self.page = 0;
    }

    pub fn open_create(&mut self) {
        self.current = None;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.current = None;
        self.open = false;
    }

    /// Open the edit dialog for `row`, preferring the full record from the
    /// source. Falls back to the row itself when the fetch fails or finds
    /// nothing.
    pub fn open_edit(&mut self, row: &Record) {
        let full = match self.source.get(self.kind, &row.id) {
            Ok(Some(record)) => record,
            Ok(None) => {
                warn!(kind = %self.kind, id = %row.id, "record vanished, editing listed copy");
                row.clone()
            }
            Err(err) => {
                warn!(kind = %self.kind, id = %row.id, error = %err, "fetch failed, editing listed copy");
                row.clone()
            }
        };
        self.current = Some(full);
        self.open = true;
    }

    /// Request sent by [`CatalogStore::load`]
    pub fn filter(&self) -> PageFilter {
        let filter = if self.kind.is_hierarchical() {
            PageFilter::new(1, self.fetch_page_size)
        } else {
            PageFilter::new(self.page + 1, self.page_size)
        };
        filter.with_keyword(Some(&self.keyword))
    }

    /// Fetch the current page. On failure the previous records stay in
    /// place and an error notice is queued.
    pub fn load(&mut self) -> Result<()> {
        self.loading = true;
        let filter = self.filter();
        let result = self.source.list(self.kind, &filter);
        self.loading = false;

        match result {
            Ok(page) => {
                debug!(
                    kind = %self.kind,
                    page = filter.page_index,
                    count = page.items.len(),
                    total = page.total_count,
                    "loaded page"
                );
                self.records = page.items;
                self.total_count = page.total_count;
                Ok(())
            }
            Err(err) => {
                self.notices
                    .push(Notice::error(format!("Failed to load data: {}", err)));
                Err(err)
            }
        }
    }

    pub fn create(&mut self, draft: RecordDraft) -> Option<Record> {
        if !self.accepts(&draft, "create") {
            return None;
        }
        match self.source.create(self.kind, draft) {
            Ok(record) => {
                self.notices.push(Notice::success("Created successfully"));
                self.reload_after("create");
                self.close();
                Some(record)
            }
            Err(err) => {
                self.notices
                    .push(Notice::error(format!("Failed to create: {}", err)));
                None
            }
        }
    }

    pub fn update(&mut self, id: &RecordId, draft: RecordDraft) -> Option<Record> {
        if !self.accepts(&draft, "update") {
            return None;
        }
        match self.source.update(self.kind, id, draft) {
            Ok(record) => {
                self.notices.push(Notice::success("Updated successfully"));
                self.reload_after("update");
                self.close();
                Some(record)
            }
            Err(err) => {
                self.notices
                    .push(Notice::error(format!("Failed to update: {}", err)));
                None
            }
        }
    }

    pub fn delete(&mut self, id: &RecordId) -> bool {
        match self.source.delete(self.kind, id) {
            Ok(()) => {
                self.notices.push(Notice::success("Deleted successfully"));
                self.reload_after("delete");
                true
            }
            Err(err) => {
                self.notices
                    .push(Notice::error(format!("Failed to delete: {}", err)));
                false
            }
        }
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn accepts(&mut self, draft: &RecordDraft, action: &str) -> bool {
        match validate_draft(self.kind, draft) {
            Ok(()) => true,
            Err(errors) => {
                let err = Error::Validation(errors);
                self.notices
                    .push(Notice::error(format!("Failed to {}: {}", action, err)));
                false
            }
        }
    }

    fn reload_after(&mut self, action: &str) {
        // load() already queued the error notice; the mutation itself stands.
        if let Err(err) = self.load() {
            warn!(kind = %self.kind, action, error = %err, "reload after mutation failed");
        }
    }
}

//! Data access for reference datasets.
//!
//! [`RecordSource`] is the boundary the stores talk to. [`FileSource`] keeps
//! one JSON snapshot per catalog in the data directory and answers listing
//! requests the way the upstream service does: 1-based page index (0 is
//! treated as 1), keyword matched case-insensitively against code or name,
//! and a total that counts every match.

use refdata_types::{CatalogKind, Page, PageFilter, Record, RecordDraft, RecordId};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Error, Result};

pub trait RecordSource {
    fn list(&self, kind: CatalogKind, filter: &PageFilter) -> Result<Page<Record>>;

    fn get(&self, kind: CatalogKind, id: &RecordId) -> Result<Option<Record>>;

    fn create(&self, kind: CatalogKind, draft: RecordDraft) -> Result<Record>;

    fn update(&self, kind: CatalogKind, id: &RecordId, draft: RecordDraft) -> Result<Record>;

    /// Remove a record. Children are left pointing at the removed id.
    fn delete(&self, kind: CatalogKind, id: &RecordId) -> Result<()>;
}

/// Accepted on-disk shapes: a bare array, or a saved listing response.
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Records(Vec<Record>),
    Page(Page<Record>),
}

#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, kind: CatalogKind) -> PathBuf {
        self.root.join(format!("{}.json", kind.slug()))
    }

    /// Every record of a dataset in file order. A missing file is empty.
    pub fn load_all(&self, kind: CatalogKind) -> Result<Vec<Record>> {
        let path = self.path_for(kind);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records = match serde_json::from_str::<Snapshot>(&content)? {
            Snapshot::Records(records) => records,
            Snapshot::Page(page) => page.items,
        };
        debug!(kind = %kind, count = records.len(), "loaded dataset");
        Ok(records)
    }

    pub fn save_all(&self, kind: CatalogKind, records: &[Record]) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let content = serde_json::to_string_pretty(records)?;
        std::fs::write(self.path_for(kind), content)?;
        Ok(())
    }
}

fn matches_keyword(record: &Record, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    record.code.to_lowercase().contains(&needle) || record.name.to_lowercase().contains(&needle)
}

impl RecordSource for FileSource {
    fn list(&self, kind: CatalogKind, filter: &PageFilter) -> Result<Page<Record>> {
        let records = self.load_all(kind)?;
        let matching: Vec<Record> = match filter.keyword.as_deref() {
            Some(keyword) => records
                .into_iter()
                .filter(|record| matches_keyword(record, keyword))
                .collect(),
            None => records,
        };

        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(filter.offset())
            .take(filter.page_size)
            .collect();
        Ok(Page::new(items, total))
    }

    fn get(&self, kind: CatalogKind, id: &RecordId) -> Result<Option<Record>> {
        Ok(self
            .load_all(kind)?
            .into_iter()
            .find(|record| &record.id == id))
    }

    fn create(&self, kind: CatalogKind, draft: RecordDraft) -> Result<Record> {
        let mut records = self.load_all(kind)?;
        let record = draft.into_record(RecordId::new(uuid::Uuid::new_v4().to_string()));
        records.push(record.clone());
        self.save_all(kind, &records)?;
        debug!(kind = %kind, id = %record.id, "created record");
        Ok(record)
    }

    fn update(&self, kind: CatalogKind, id: &RecordId, draft: RecordDraft) -> Result<Record> {
        let mut records = self.load_all(kind)?;
        let slot = records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| Error::NotFound {
                kind,
                id: id.clone(),
            })?;
        *slot = draft.into_record(id.clone());
        let record = slot.clone();
        self.save_all(kind, &records)?;
        debug!(kind = %kind, id = %id, "updated record");
        Ok(record)
    }

    fn delete(&self, kind: CatalogKind, id: &RecordId) -> Result<()> {
        let mut records = self.load_all(kind)?;
        let before = records.len();
        records.retain(|record| &record.id != id);
        if records.len() == before {
            return Err(Error::NotFound {
                kind,
                id: id.clone(),
            });
        }
        self.save_all(kind, &records)?;
        debug!(kind = %kind, id = %id, "deleted record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded(records: &[Record]) -> (TempDir, FileSource) {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path());
        source.save_all(CatalogKind::Religion, records).unwrap();
        (dir, source)
    }

    fn sample() -> Vec<Record> {
        vec![
            Record::new("1", "BUD", "Buddhism"),
            Record::new("2", "CAT", "Catholicism"),
            Record::new("3", "CAO", "Cao Dai"),
            Record::new("4", "HOA", "Hoa Hao Buddhism"),
            Record::new("5", "PRO", "Protestantism"),
        ]
    }

    fn codes(page: &Page<Record>) -> Vec<&str> {
        page.items.iter().map(|r| r.code.as_str()).collect()
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path());
        let page = source
            .list(CatalogKind::Country, &PageFilter::new(1, 10))
            .unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_paging_is_one_based_and_clamps_zero() {
        let (_dir, source) = seeded(&sample());

        let second = source
            .list(CatalogKind::Religion, &PageFilter::new(2, 2))
            .unwrap();
        assert_eq!(codes(&second), vec!["CAO", "HOA"]);
        assert_eq!(second.total_count, 5);

        let zero = source
            .list(CatalogKind::Religion, &PageFilter::new(0, 2))
            .unwrap();
        assert_eq!(codes(&zero), vec!["BUD", "CAT"]);

        let past_end = source
            .list(CatalogKind::Religion, &PageFilter::new(9, 2))
            .unwrap();
        assert!(past_end.is_empty());
        assert_eq!(past_end.total_count, 5);
    }

    #[test]
    fn test_keyword_matches_code_or_name() {
        let (_dir, source) = seeded(&sample());
        let filter = PageFilter::new(1, 10).with_keyword(Some("  buddh "));
        let page = source.list(CatalogKind::Religion, &filter).unwrap();
        assert_eq!(codes(&page), vec!["BUD", "HOA"]);
        assert_eq!(page.total_count, 2);

        let filter = PageFilter::new(1, 10).with_keyword(Some("ca"));
        let page = source.list(CatalogKind::Religion, &filter).unwrap();
        assert_eq!(codes(&page), vec!["CAT", "CAO"]);
    }

    #[test]
    fn test_create_assigns_fresh_id() {
        let (_dir, source) = seeded(&[]);
        let created = source
            .create(CatalogKind::Religion, RecordDraft::new("ISL", "Islam"))
            .unwrap();
        assert!(!created.id.is_empty());

        let fetched = source.get(CatalogKind::Religion, &created.id).unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[test]
    fn test_update_and_delete_unknown_id() {
        let (_dir, source) = seeded(&sample());
        let missing = RecordId::new("nope");

        let err = source
            .update(CatalogKind::Religion, &missing, RecordDraft::new("X", "Xx"))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));

        let err = source.delete(CatalogKind::Religion, &missing).unwrap_err();
        assert_eq!(err.to_string(), "No religion record with id 'nope'");
    }

    #[test]
    fn test_delete_does_not_cascade() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path());
        source
            .save_all(
                CatalogKind::Department,
                &[
                    Record::new("a", "A", "Alpha"),
                    Record::new("b", "B", "Beta").with_parent("a"),
                ],
            )
            .unwrap();

        source
            .delete(CatalogKind::Department, &RecordId::new("a"))
            .unwrap();
        let remaining = source.load_all(CatalogKind::Department).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].effective_parent_id(), Some(&RecordId::new("a")));
    }

    #[test]
    fn test_reads_saved_listing_response() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path());
        std::fs::write(
            source.path_for(CatalogKind::Country),
            r#"{"content": [{"id": 7, "code": "VN", "name": "Viet Nam"}], "totalElements": 1}"#,
        )
        .unwrap();

        let records = source.load_all(CatalogKind::Country).unwrap();
        assert_eq!(records[0].id.as_str(), "7");
    }
}

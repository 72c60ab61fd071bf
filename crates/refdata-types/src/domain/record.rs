use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque record identifier, stable across requests.
///
/// Upstream payloads carry either string or numeric ids; both are kept in
/// their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `None` for the empty id, which upstream uses to mean "no reference"
    fn non_empty(self) -> Option<Self> {
        if self.0.is_empty() { None } else { Some(self) }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => RecordId(s),
            RawId::Signed(n) => RecordId(n.to_string()),
            RawId::Unsigned(n) => RecordId(n.to_string()),
        })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Nested parent object as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentSummary {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The two upstream shapes of a parent reference
#[derive(Debug, Clone, PartialEq)]
pub enum ParentLink {
    /// Flat `parentId` field
    Id(RecordId),
    /// Nested `parent` object
    Embedded(ParentSummary),
}

impl ParentLink {
    pub fn id(&self) -> &RecordId {
        match self {
            ParentLink::Id(id) => id,
            ParentLink::Embedded(summary) => &summary.id,
        }
    }

    pub fn summary(&self) -> Option<&ParentSummary> {
        match self {
            ParentLink::Id(_) => None,
            ParentLink::Embedded(summary) => Some(summary),
        }
    }
}

/// A reference-data entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireRecord", into = "WireRecord")]
pub struct Record {
    pub id: RecordId,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub parent: Option<ParentLink>,
    /// Upstream fields this tool does not interpret (kept for round trips)
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            description: None,
            parent: None,
            extra: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<RecordId>) -> Self {
        self.parent = RecordId::non_empty(parent_id.into()).map(ParentLink::Id);
        self
    }

    pub fn with_embedded_parent(mut self, summary: ParentSummary) -> Self {
        self.parent = Some(ParentLink::Embedded(summary));
        self
    }

    /// The parent id this record points at, whichever shape carried it
    pub fn effective_parent_id(&self) -> Option<&RecordId> {
        self.parent.as_ref().map(ParentLink::id)
    }

    /// Summary suitable for embedding as another record's parent
    pub fn summary(&self) -> ParentSummary {
        ParentSummary {
            id: self.id.clone(),
            code: Some(self.code.clone()),
            name: Some(self.name.clone()),
        }
    }

    /// `code - name` label of the embedded parent, when one is carried
    pub fn parent_label(&self) -> Option<String> {
        let summary = self.parent.as_ref()?.summary()?;
        match (&summary.code, &summary.name) {
            (Some(code), Some(name)) => Some(format!("{} - {}", code, name)),
            (Some(code), None) => Some(code.clone()),
            (None, Some(name)) => Some(name.clone()),
            (None, None) => None,
        }
    }

    /// Founding date of a department, if the upstream payload carries one
    pub fn founded_date(&self) -> Option<NaiveDate> {
        let raw = self.extra.get("foundedDate")?.as_str()?;
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

/// Create/edit form values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RecordDraft {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Form values pre-filled from an existing record
    pub fn from_record(record: &Record) -> Self {
        Self {
            code: record.code.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            parent_id: record.effective_parent_id().cloned(),
            parent: record.parent.as_ref().and_then(|p| p.summary().cloned()),
            extra: record.extra.clone(),
        }
    }

    /// Write both the display reference and the raw id of the chosen parent
    pub fn apply_parent(&mut self, parent: &Record) {
        self.parent = Some(parent.summary());
        self.parent_id = Some(parent.id.clone());
    }

    pub fn clear_parent(&mut self) {
        self.parent = None;
        self.parent_id = None;
    }

    pub fn into_record(self, id: RecordId) -> Record {
        let parent = resolve_parent(self.parent_id, self.parent);
        Record {
            id,
            code: self.code,
            name: self.name,
            description: self.description,
            parent,
            extra: self.extra,
        }
    }
}

// --------------------------------------------------------
// Wire shape
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    id: RecordId,
    #[serde(default)]
    code: String,
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<ParentSummary>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Explicit `parentId` wins; a nested parent is kept as the display
/// reference only when it names the same record.
fn resolve_parent(
    parent_id: Option<RecordId>,
    parent: Option<ParentSummary>,
) -> Option<ParentLink> {
    let parent = parent.filter(|p| !p.id.is_empty());
    match (parent_id.and_then(RecordId::non_empty), parent) {
        (Some(id), Some(summary)) if summary.id == id => Some(ParentLink::Embedded(summary)),
        (Some(id), _) => Some(ParentLink::Id(id)),
        (None, Some(summary)) => Some(ParentLink::Embedded(summary)),
        (None, None) => None,
    }
}

impl From<WireRecord> for Record {
    fn from(wire: WireRecord) -> Self {
        Record {
            id: wire.id,
            code: wire.code,
            name: wire.name,
            description: wire.description,
            parent: resolve_parent(wire.parent_id, wire.parent),
            extra: wire.extra,
        }
    }
}

impl From<Record> for WireRecord {
    fn from(record: Record) -> Self {
        let (parent_id, parent) = match record.parent {
            Some(ParentLink::Id(id)) => (Some(id), None),
            Some(ParentLink::Embedded(summary)) => (Some(summary.id.clone()), Some(summary)),
            None => (None, None),
        };
        WireRecord {
            id: record.id,
            code: record.code,
            name: record.name,
            description: record.description,
            parent_id,
            parent,
            extra: record.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_flat_parent_id() {
        let record = parse(json!({"id": "b", "code": "B", "name": "Beta", "parentId": "a"}));
        assert_eq!(record.effective_parent_id(), Some(&RecordId::new("a")));
        assert!(matches!(record.parent, Some(ParentLink::Id(_))));
    }

    #[test]
    fn test_nested_parent_object() {
        let record = parse(json!({
            "id": "b", "code": "B", "name": "Beta",
            "parent": {"id": "a", "code": "A", "name": "Alpha"}
        }));
        assert_eq!(record.effective_parent_id(), Some(&RecordId::new("a")));
        assert_eq!(record.parent_label().as_deref(), Some("A - Alpha"));
    }

    #[test]
    fn test_explicit_parent_id_wins_over_nested() {
        let record = parse(json!({
            "id": "c", "code": "C", "name": "Gamma",
            "parentId": "a",
            "parent": {"id": "b"}
        }));
        assert_eq!(record.effective_parent_id(), Some(&RecordId::new("a")));
        assert_eq!(record.parent_label(), None);
    }

    #[test]
    fn test_null_and_empty_parent_are_roots() {
        let null_parent = parse(json!({"id": 1, "parentId": null, "parent": null}));
        assert_eq!(null_parent.effective_parent_id(), None);

        let empty_parent = parse(json!({"id": 2, "parentId": ""}));
        assert_eq!(empty_parent.effective_parent_id(), None);
    }

    #[test]
    fn test_numeric_ids_are_textual() {
        let record = parse(json!({"id": 4, "parentId": 2}));
        assert_eq!(record.id.as_str(), "4");
        assert_eq!(record.effective_parent_id().map(RecordId::as_str), Some("2"));
    }

    #[test]
    fn test_missing_display_fields_default() {
        let record = parse(json!({"id": "x"}));
        assert_eq!(record.code, "");
        assert_eq!(record.name, "");
        assert_eq!(record.description, None);
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let record = parse(json!({
            "id": "d1", "code": "D1", "name": "Ops",
            "foundedDate": "2019-04-01T00:00:00.000+00:00",
            "displayOrder": "3"
        }));
        assert_eq!(record.extra.get("displayOrder"), Some(&json!("3")));
        assert_eq!(
            record.founded_date(),
            NaiveDate::from_ymd_opt(2019, 4, 1)
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["displayOrder"], json!("3"));
        assert_eq!(value["foundedDate"], json!("2019-04-01T00:00:00.000+00:00"));
    }

    #[test]
    fn test_serializes_wire_shape() {
        let parent = Record::new("a", "A", "Alpha");
        let mut draft = RecordDraft::new("B", "Beta");
        draft.apply_parent(&parent);
        let record = draft.into_record(RecordId::new("b"));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "b",
                "code": "B",
                "name": "Beta",
                "parentId": "a",
                "parent": {"id": "a", "code": "A", "name": "Alpha"}
            })
        );
    }

    #[test]
    fn test_draft_from_record_keeps_parent() {
        let record = Record::new("b", "B", "Beta").with_parent("a");
        let mut draft = RecordDraft::from_record(&record);
        assert_eq!(draft.parent_id, Some(RecordId::new("a")));
        assert_eq!(draft.parent, None);

        draft.clear_parent();
        let cleared = draft.into_record(record.id.clone());
        assert_eq!(cleared.effective_parent_id(), None);
    }
}

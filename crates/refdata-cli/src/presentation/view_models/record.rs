use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordViewModel {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordListViewModel {
    pub kind: String,
    pub title: String,
    /// One-based page number
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// False when the whole dataset was fetched in one request
    pub paged: bool,
    pub records: Vec<RecordViewModel>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraFieldViewModel {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDetailViewModel {
    pub kind: String,
    pub record: RecordViewModel,
    /// `code - name` of the parent when it could be resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_date: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<ExtraFieldViewModel>,
    pub child_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveAction {
    Created,
    Updated,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResultViewModel {
    pub kind: String,
    pub action: SaveAction,
    pub record: RecordViewModel,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResultViewModel {
    pub kind: String,
    pub id: String,
    /// Direct children left pointing at the deleted record
    pub orphaned_children: usize,
}

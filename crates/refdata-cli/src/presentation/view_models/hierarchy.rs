use serde::Serialize;

/// One visible line of a department tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyRowViewModel {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub level: usize,
    pub has_children: bool,
    pub expanded: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyViewModel {
    pub title: String,
    pub total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub rows: Vec<HierarchyRowViewModel>,
    /// Records promoted to roots because their parent chain loops
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cycle_breaks: Vec<String>,
    /// Records whose parent is not in the fetched set
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dangling: Vec<String>,
    #[serde(skip)]
    pub indent_width: usize,
}

/// Ancestor Picker candidates, shown outside the interactive browser
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatesViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// One-based page number
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub rows: Vec<HierarchyRowViewModel>,
    #[serde(skip)]
    pub indent_width: usize,
}

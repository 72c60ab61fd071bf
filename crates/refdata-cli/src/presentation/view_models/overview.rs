use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummaryViewModel {
    pub kind: String,
    pub title: String,
    pub records: usize,
    pub hierarchical: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewViewModel {
    pub data_dir: String,
    pub initialized: bool,
    pub datasets: Vec<DatasetSummaryViewModel>,
}

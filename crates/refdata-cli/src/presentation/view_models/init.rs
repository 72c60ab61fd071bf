use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetState {
    Created,
    Existing,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInitViewModel {
    pub kind: String,
    pub file: String,
    pub state: DatasetState,
    pub records: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitResultViewModel {
    pub data_dir: String,
    pub config_path: String,
    pub config_created: bool,
    pub datasets: Vec<DatasetInitViewModel>,
}

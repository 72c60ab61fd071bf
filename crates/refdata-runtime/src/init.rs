use refdata_types::{CatalogKind, Record};
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::source::FileSource;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetStatus {
    /// File was written by this run
    Created { records: usize },
    /// File was already present and left untouched
    Existing { records: usize },
}

#[derive(Debug, Clone)]
pub struct InitReport {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_created: bool,
    pub datasets: Vec<(CatalogKind, DatasetStatus)>,
}

pub struct InitConfig {
    pub data_dir: PathBuf,
    /// Seed the department dataset with a small example hierarchy
    pub sample: bool,
}

pub struct InitService;

impl InitService {
    pub fn run(config: InitConfig) -> Result<InitReport> {
        std::fs::create_dir_all(&config.data_dir)?;

        let config_path = Config::path_in(&config.data_dir);
        let config_created = !config_path.exists();
        if config_created {
            Config::default().save_to(&config_path)?;
        }

        let source = FileSource::new(&config.data_dir);
        let mut datasets = Vec::with_capacity(CatalogKind::ALL.len());
        for kind in CatalogKind::ALL {
            let status = if source.path_for(kind).exists() {
                DatasetStatus::Existing {
                    records: source.load_all(kind)?.len(),
                }
            } else {
                let records = if config.sample && kind.is_hierarchical() {
                    sample_departments()
                } else {
                    Vec::new()
                };
                source.save_all(kind, &records)?;
                DatasetStatus::Created {
                    records: records.len(),
                }
            };
            debug!(kind = %kind, ?status, "dataset ready");
            datasets.push((kind, status));
        }

        Ok(InitReport {
            data_dir: config.data_dir,
            config_path,
            config_created,
            datasets,
        })
    }
}

/// Small department tree used by `init --sample`
pub fn sample_departments() -> Vec<Record> {
    vec![
        Record::new("1", "HQ", "Head office").with_description("Board and executive office"),
        Record::new("2", "FIN", "Finance").with_parent("1"),
        Record::new("3", "ACC", "Accounting").with_parent("2"),
        Record::new("4", "TRE", "Treasury").with_parent("2"),
        Record::new("5", "IT", "Information technology").with_parent("1"),
        Record::new("6", "SUP", "IT support").with_parent("5"),
        Record::new("7", "HR", "Human resources").with_parent("1"),
        Record::new("8", "BR1", "Northern branch"),
        Record::new("9", "SAL", "Sales").with_parent("8"),
    ]
}

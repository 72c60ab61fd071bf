use refdata_types::CatalogKind;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::init::{InitConfig, InitReport, InitService};
use crate::source::FileSource;
use crate::store::CatalogStore;
use crate::Result;

/// An opened data directory: its configuration and dataset files.
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
    source: FileSource,
}

impl Workspace {
    pub fn setup(config: InitConfig) -> Result<InitReport> {
        InitService::run(config)
    }

    /// Open `data_dir`. A missing config file means defaults; missing
    /// dataset files read as empty.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        let source = FileSource::new(&data_dir);
        Ok(Self {
            data_dir,
            config,
            source,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &FileSource {
        &self.source
    }

    pub fn store(&self, kind: CatalogKind) -> CatalogStore<FileSource> {
        CatalogStore::new(self.source.clone(), kind, &self.config)
    }
}

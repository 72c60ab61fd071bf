pub mod config;
pub mod error;
pub mod init;
pub mod source;
pub mod store;
pub mod validation;
pub mod workspace;

pub use config::{Config, HierarchyConfig, ViewConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use init::{DatasetStatus, InitConfig, InitReport, InitService};
pub use source::{FileSource, RecordSource};
pub use store::{CatalogStore, Notice, NoticeLevel};
pub use validation::{FieldError, validate_draft};
pub use workspace::Workspace;

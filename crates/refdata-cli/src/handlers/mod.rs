mod context;

pub mod browse;
pub mod candidates;
pub mod create;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod overview;
pub mod show;
pub mod tree;

pub use context::HandlerContext;

use anyhow::{Result, bail};
use refdata_engine::AncestorPicker;
use refdata_runtime::{CatalogStore, NoticeLevel, RecordSource, Workspace};
use refdata_types::{CatalogKind, Record, RecordId};
use tracing::debug;

/// Look up `parent_id` among the candidates the ancestor picker would offer
/// while editing `editing` (or creating, when `None`).
fn resolve_parent(
    workspace: &Workspace,
    kind: CatalogKind,
    editing: Option<&RecordId>,
    parent_id: &RecordId,
) -> Result<Record> {
    if !kind.is_hierarchical() {
        bail!("{} records have no parent", kind);
    }
    if editing == Some(parent_id) {
        bail!("A record cannot be its own parent");
    }

    let mut picker = AncestorPicker::new(workspace.config().hierarchy.fetch_page_size);
    picker.open(editing.cloned());
    match workspace.source().list(kind, &picker.filter()) {
        Ok(page) => picker.apply_page(page),
        Err(err) => {
            picker.fail_load();
            return Err(err.into());
        }
    }

    if !picker.choose(parent_id) {
        bail!("No {} record with id '{}' to use as parent", kind, parent_id);
    }
    match picker.confirm() {
        Some(parent) => Ok(parent),
        None => bail!("No {} record with id '{}' to use as parent", kind, parent_id),
    }
}

/// Turn the error notice left by a failed store action into an error.
fn store_failure<S: RecordSource>(store: &mut CatalogStore<S>, fallback: &str) -> anyhow::Error {
    let message = store
        .drain_notices()
        .into_iter()
        .find(|notice| notice.level == NoticeLevel::Error)
        .map(|notice| notice.message)
        .unwrap_or_else(|| fallback.to_string());
    anyhow::anyhow!(message)
}

fn log_notices<S: RecordSource>(store: &mut CatalogStore<S>) {
    for notice in store.drain_notices() {
        debug!(level = ?notice.level, message = %notice.message, "store notice");
    }
}

use crate::handlers::{HandlerContext, log_notices, store_failure};
use crate::presentation::presenters;
use anyhow::Result;
use refdata_runtime::Workspace;
use refdata_types::{CatalogKind, RecordId};
use tracing::debug;

pub fn handle(
    workspace: &Workspace,
    kind: CatalogKind,
    id: RecordId,
    ctx: &HandlerContext,
) -> Result<()> {
    let mut store = workspace.store(kind);

    // Children are left in place with a dangling parent id.
    let orphaned = if kind.is_hierarchical() {
        store.load()?;
        store
            .records()
            .iter()
            .filter(|r| r.effective_parent_id() == Some(&id))
            .count()
    } else {
        0
    };

    if !store.delete(&id) {
        return Err(store_failure(&mut store, "Failed to delete"));
    }
    log_notices(&mut store);
    debug!(kind = %kind, id = %id, orphaned, "record deleted");

    let view_model = presenters::present_delete(kind, id.as_str(), orphaned);
    ctx.render(view_model)
}

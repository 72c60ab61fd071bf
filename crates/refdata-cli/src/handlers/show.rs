use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use refdata_runtime::{Error, RecordSource, Workspace};
use refdata_types::{CatalogKind, RecordId};

pub fn handle(
    workspace: &Workspace,
    kind: CatalogKind,
    id: RecordId,
    ctx: &HandlerContext,
) -> Result<()> {
    let source = workspace.source();
    let record = source
        .get(kind, &id)?
        .ok_or_else(|| Error::NotFound { kind, id: id.clone() })?;

    let parent = match record.effective_parent_id() {
        Some(parent_id) => source.get(kind, parent_id)?,
        None => None,
    };

    let child_count = if kind.is_hierarchical() {
        let mut store = workspace.store(kind);
        store.load()?;
        store
            .records()
            .iter()
            .filter(|r| r.effective_parent_id() == Some(&id))
            .count()
    } else {
        0
    };

    let view_model = presenters::present_detail(kind, &record, parent.as_ref(), child_count);
    ctx.render(view_model)
}

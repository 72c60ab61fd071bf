use crate::handlers::{HandlerContext, log_notices, resolve_parent, store_failure};
use crate::presentation::presenters;
use crate::presentation::view_models::SaveAction;
use anyhow::Result;
use refdata_runtime::Workspace;
use refdata_types::{CatalogKind, RecordDraft, RecordId};
use tracing::debug;

pub struct CreateInput {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub parent: Option<RecordId>,
}

pub fn handle(
    workspace: &Workspace,
    kind: CatalogKind,
    input: CreateInput,
    ctx: &HandlerContext,
) -> Result<()> {
    let mut draft = RecordDraft::new(input.code, input.name);
    draft.description = input.description.filter(|d| !d.is_empty());

    if let Some(parent_id) = &input.parent {
        let parent = resolve_parent(workspace, kind, None, parent_id)?;
        draft.apply_parent(&parent);
    }

    let mut store = workspace.store(kind);
    store.open_create();
    let Some(created) = store.create(draft) else {
        return Err(store_failure(&mut store, "Failed to create"));
    };
    log_notices(&mut store);
    debug!(kind = %kind, id = %created.id, "record created");

    let view_model = presenters::present_save(kind, SaveAction::Created, &created, None);
    ctx.render(view_model)
}

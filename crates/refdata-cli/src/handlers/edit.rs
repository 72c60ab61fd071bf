use crate::handlers::{HandlerContext, log_notices, resolve_parent, store_failure};
use crate::presentation::presenters;
use crate::presentation::view_models::SaveAction;
use anyhow::Result;
use refdata_engine::descendant_ids;
use refdata_runtime::{Error, RecordSource, Workspace};
use refdata_types::{CatalogKind, RecordDraft, RecordId};
use tracing::warn;

pub struct EditInput {
    pub code: Option<String>,
    pub name: Option<String>,
    /// An empty string clears the description
    pub description: Option<String>,
    pub parent: Option<RecordId>,
    pub clear_parent: bool,
}

pub fn handle(
    workspace: &Workspace,
    kind: CatalogKind,
    id: RecordId,
    input: EditInput,
    ctx: &HandlerContext,
) -> Result<()> {
    let listed = workspace
        .source()
        .get(kind, &id)?
        .ok_or_else(|| Error::NotFound { kind, id: id.clone() })?;

    let mut store = workspace.store(kind);
    store.open_edit(&listed);
    let current = store.current().cloned().unwrap_or(listed);

    let mut draft = RecordDraft::from_record(&current);
    if let Some(code) = input.code {
        draft.code = code;
    }
    if let Some(name) = input.name {
        draft.name = name;
    }
    if let Some(description) = input.description {
        draft.description = (!description.is_empty()).then_some(description);
    }

    let mut warning = None;
    if input.clear_parent {
        draft.clear_parent();
    } else if let Some(parent_id) = &input.parent {
        let parent = resolve_parent(workspace, kind, Some(&id), parent_id)?;

        store.load()?;
        if descendant_ids(store.records(), &id).contains(&parent.id) {
            warn!(
                id = %id,
                parent = %parent.id,
                "new parent is a descendant, the hierarchy now contains a cycle"
            );
            warning = Some(format!(
                "'{}' is a descendant of '{}'; the hierarchy now contains a cycle",
                parent.code, current.code
            ));
        }
        draft.apply_parent(&parent);
    }

    let Some(updated) = store.update(&id, draft) else {
        return Err(store_failure(&mut store, "Failed to update"));
    };
    log_notices(&mut store);

    let view_model = presenters::present_save(kind, SaveAction::Updated, &updated, warning);
    ctx.render(view_model)
}

use crate::args::{ExpansionArgs, PagingArgs};
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use refdata_engine::AncestorPicker;
use refdata_runtime::{RecordSource, Workspace};
use refdata_types::{CatalogKind, RecordId};

pub fn handle(
    workspace: &Workspace,
    exclude: Option<RecordId>,
    paging: &PagingArgs,
    expansion: &ExpansionArgs,
    ctx: &HandlerContext,
) -> Result<()> {
    let config = workspace.config();
    let mut picker = AncestorPicker::new(config.view.page_size);
    picker.open(exclude);

    if let Some(size) = paging.page_size {
        picker.set_page_size(size);
    }
    if let Some(keyword) = &paging.keyword {
        picker.set_keyword(keyword.clone());
    }
    picker.set_page(paging.page.saturating_sub(1));

    match workspace
        .source()
        .list(CatalogKind::Department, &picker.filter())
    {
        Ok(page) => picker.apply_page(page),
        Err(err) => {
            picker.fail_load();
            return Err(err.into());
        }
    }

    let to_expand: Vec<RecordId> = if expansion.expand_all {
        picker.candidates().iter().map(|r| r.id.clone()).collect()
    } else {
        expansion.expand.iter().map(|id| RecordId::new(id.as_str())).collect()
    };
    for id in &to_expand {
        if !picker.expansion().is_expanded(id) {
            picker.toggle(id);
        }
    }

    let view_model = presenters::present_candidates(&picker, config.view.indent_width);
    ctx.render(view_model)
}

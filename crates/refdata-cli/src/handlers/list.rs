use crate::args::PagingArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters::{self, ListInput};
use anyhow::Result;
use refdata_runtime::Workspace;
use refdata_types::{CatalogKind, Page};
use tracing::warn;

pub fn handle(
    workspace: &Workspace,
    kind: CatalogKind,
    paging: &PagingArgs,
    ctx: &HandlerContext,
) -> Result<()> {
    let mut store = workspace.store(kind);

    if let Some(size) = paging.page_size {
        if !workspace.config().is_offered_page_size(size) {
            warn!(page_size = size, "page size is not one of the configured options");
        }
        store.set_page_size(size);
    }
    if let Some(keyword) = &paging.keyword {
        store.set_keyword(keyword.clone());
    }
    // Set last: page size and keyword changes go back to the first page.
    store.set_page(paging.page.saturating_sub(1));

    store.load()?;

    let page = Page::new(store.records().to_vec(), store.total_count());
    let view_model = presenters::present_list(ListInput {
        kind,
        page: &page,
        page_index: store.page(),
        page_size: store.page_size(),
        keyword: store.keyword(),
    });
    ctx.render(view_model)
}

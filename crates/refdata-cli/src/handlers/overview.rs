use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use refdata_runtime::{Config, Workspace};
use refdata_types::CatalogKind;

pub fn handle(workspace: &Workspace, ctx: &HandlerContext) -> Result<()> {
    let initialized = Config::path_in(workspace.data_dir()).exists();

    let mut counts = Vec::new();
    if initialized {
        for kind in CatalogKind::ALL {
            counts.push((kind, workspace.source().load_all(kind)?.len()));
        }
    }

    let view_model = presenters::present_overview(
        &workspace.data_dir().display().to_string(),
        initialized,
        &counts,
    );
    ctx.render(view_model)
}

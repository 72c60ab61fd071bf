use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use refdata_runtime::{InitConfig, Workspace};
use std::path::PathBuf;
use tracing::info;

pub fn handle(data_dir: PathBuf, sample: bool, ctx: &HandlerContext) -> Result<()> {
    let report = Workspace::setup(InitConfig { data_dir, sample })?;
    info!(
        data_dir = %report.data_dir.display(),
        config_created = report.config_created,
        "data directory ready"
    );

    let view_model = presenters::present_init_result(&report);
    ctx.render(view_model)
}

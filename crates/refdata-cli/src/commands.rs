use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::logging;
use anyhow::Result;
use refdata_runtime::{Workspace, resolve_workspace_path};
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");
    let ctx = HandlerContext::new(cli.format);

    let open = || Workspace::open(data_dir.clone());

    let Some(command) = cli.command else {
        return handlers::overview::handle(&open()?, &ctx);
    };

    match command {
        Commands::Init { sample } => handlers::init::handle(data_dir.clone(), sample, &ctx),

        Commands::Tree { expansion, keyword } => {
            handlers::tree::handle(&open()?, &expansion, keyword, &ctx)
        }

        Commands::List { kind, paging } => handlers::list::handle(&open()?, kind, &paging, &ctx),

        Commands::Show { kind, id } => handlers::show::handle(&open()?, kind, id.into(), &ctx),

        Commands::Create {
            kind,
            code,
            name,
            description,
            parent,
        } => handlers::create::handle(
            &open()?,
            kind,
            handlers::create::CreateInput {
                code,
                name,
                description,
                parent: parent.map(Into::into),
            },
            &ctx,
        ),

        Commands::Edit {
            kind,
            id,
            code,
            name,
            description,
            parent,
            clear_parent,
        } => handlers::edit::handle(
            &open()?,
            kind,
            id.into(),
            handlers::edit::EditInput {
                code,
                name,
                description,
                parent: parent.map(Into::into),
                clear_parent,
            },
            &ctx,
        ),

        Commands::Delete { kind, id } => handlers::delete::handle(&open()?, kind, id.into(), &ctx),

        Commands::Candidates {
            exclude,
            paging,
            expansion,
        } => handlers::candidates::handle(
            &open()?,
            exclude.map(Into::into),
            &paging,
            &expansion,
            &ctx,
        ),

        Commands::Browse => handlers::browse::handle(&open()?),
    }
}

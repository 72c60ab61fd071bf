use crate::args::ExpansionArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters::{self, HierarchyInput};
use anyhow::Result;
use refdata_engine::{ExpansionState, build_forest, flatten};
use refdata_runtime::Workspace;
use refdata_types::{CatalogKind, Record};
use tracing::{debug, warn};

/// Expansion set requested on the command line
fn expansion_from_args(args: &ExpansionArgs, records: &[Record]) -> ExpansionState {
    let mut expansion = ExpansionState::new();
    if args.expand_all {
        expansion.expand_all(records);
    }
    for id in &args.expand {
        expansion.expand(id.as_str());
    }
    expansion
}

pub fn handle(
    workspace: &Workspace,
    args: &ExpansionArgs,
    keyword: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    let kind = CatalogKind::Department;
    let mut store = workspace.store(kind);
    if let Some(keyword) = keyword {
        store.set_keyword(keyword);
    }
    store.load()?;

    let records = store.records();
    let expansion = expansion_from_args(args, records);
    let forest = build_forest(records);

    if !forest.cycle_breaks.is_empty() {
        warn!(
            records = ?forest.cycle_breaks,
            "parent cycle detected, records shown as roots"
        );
    }
    if !forest.dangling.is_empty() {
        debug!(records = ?forest.dangling, "parent not found, records shown as roots");
    }

    let rows = flatten(&forest.roots, &expansion);
    let keyword = store.keyword().trim();

    let view_model = presenters::present_hierarchy(HierarchyInput {
        kind,
        forest: &forest,
        rows: &rows,
        expansion: &expansion,
        keyword: (!keyword.is_empty()).then_some(keyword),
        total_count: store.total_count(),
        indent_width: workspace.config().view.indent_width,
    });
    ctx.render(view_model)
}

use refdata_types::CatalogKind;

use crate::presentation::view_models::{
    CommandResultViewModel, DatasetSummaryViewModel, Guidance, OverviewViewModel,
};

pub fn present_overview(
    data_dir: &str,
    initialized: bool,
    counts: &[(CatalogKind, usize)],
) -> CommandResultViewModel<OverviewViewModel> {
    let datasets = counts
        .iter()
        .map(|(kind, records)| DatasetSummaryViewModel {
            kind: kind.slug().to_string(),
            title: kind.title().to_string(),
            records: *records,
            hierarchical: kind.is_hierarchical(),
        })
        .collect();

    let result = CommandResultViewModel::new(OverviewViewModel {
        data_dir: data_dir.to_string(),
        initialized,
        datasets,
    });

    if !initialized {
        return result.with_suggestion(
            Guidance::new("Set up the data directory").with_command("refdata init"),
        );
    }

    result
        .with_suggestion(Guidance::new("Show the department tree").with_command("refdata tree"))
        .with_suggestion(Guidance::new("Browse interactively").with_command("refdata browse"))
        .with_suggestion(Guidance::new("All commands").with_command("refdata --help"))
}

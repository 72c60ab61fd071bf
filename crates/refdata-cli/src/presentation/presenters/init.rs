use refdata_runtime::{DatasetStatus, FileSource, InitReport};
use refdata_types::CatalogKind;

use crate::presentation::view_models::{
    CommandResultViewModel, DatasetInitViewModel, DatasetState, Guidance, InitResultViewModel,
    StatusBadge,
};

pub fn present_init_result(report: &InitReport) -> CommandResultViewModel<InitResultViewModel> {
    let source = FileSource::new(&report.data_dir);
    let datasets = report
        .datasets
        .iter()
        .map(|(kind, status)| {
            let (state, records) = match status {
                DatasetStatus::Created { records } => (DatasetState::Created, *records),
                DatasetStatus::Existing { records } => (DatasetState::Existing, *records),
            };
            DatasetInitViewModel {
                kind: kind.slug().to_string(),
                file: source.path_for(*kind).display().to_string(),
                state,
                records,
            }
        })
        .collect();

    let department_empty = report.datasets.iter().any(|(kind, status)| {
        *kind == CatalogKind::Department
            && matches!(
                status,
                DatasetStatus::Created { records: 0 } | DatasetStatus::Existing { records: 0 }
            )
    });

    let mut result = CommandResultViewModel::new(InitResultViewModel {
        data_dir: report.data_dir.display().to_string(),
        config_path: report.config_path.display().to_string(),
        config_created: report.config_created,
        datasets,
    })
    .with_badge(StatusBadge::success("Data directory ready"));

    if department_empty {
        result = result.with_suggestion(
            Guidance::new("Add a department")
                .with_command("refdata create department --code HQ --name \"Head office\""),
        );
    }
    result.with_suggestion(Guidance::new("Browse the hierarchy").with_command("refdata browse"))
}

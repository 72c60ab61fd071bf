use std::fmt;

use crate::presentation::view_models::{DatasetState, InitResultViewModel};

pub struct InitResultView<'a> {
    data: &'a InitResultViewModel,
}

impl<'a> InitResultView<'a> {
    pub fn new(data: &'a InitResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data directory: {}", self.data.data_dir)?;
        writeln!(f)?;

        writeln!(f, "Configuration:")?;
        if self.data.config_created {
            writeln!(f, "  Written to {}", self.data.config_path)?;
        } else {
            writeln!(f, "  Loaded from {}", self.data.config_path)?;
        }

        writeln!(f, "\nDatasets:")?;
        for dataset in &self.data.datasets {
            let state = match dataset.state {
                DatasetState::Created => "created",
                DatasetState::Existing => "kept",
            };
            writeln!(
                f,
                "  {:<20} {:<8} {} record(s)",
                dataset.kind, state, dataset.records
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for InitResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        InitResultView::new(self).fmt(f)
    }
}

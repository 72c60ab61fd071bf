use std::fmt;

use crate::presentation::view_models::OverviewViewModel;

pub struct OverviewView<'a> {
    data: &'a OverviewViewModel,
}

impl<'a> OverviewView<'a> {
    pub fn new(data: &'a OverviewViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for OverviewView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "refdata - reference data catalogs\n")?;
        writeln!(f, "Data directory: {}", self.data.data_dir)?;

        if !self.data.initialized {
            writeln!(f, "Not initialized yet.")?;
            return Ok(());
        }

        writeln!(f)?;
        for dataset in &self.data.datasets {
            writeln!(
                f,
                "  {:<22} {:>6} record(s){}",
                dataset.title,
                dataset.records,
                if dataset.hierarchical { "  (tree)" } else { "" }
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for OverviewViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        OverviewView::new(self).fmt(f)
    }
}

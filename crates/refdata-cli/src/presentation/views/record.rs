use std::fmt;

use crate::presentation::view_models::{
    DeleteResultViewModel, RecordDetailViewModel, RecordListViewModel, SaveAction,
    SaveResultViewModel,
};

// --------------------------------------------------------
// Record List View
// --------------------------------------------------------

pub struct RecordListView<'a> {
    data: &'a RecordListViewModel,
}

impl<'a> RecordListView<'a> {
    pub fn new(data: &'a RecordListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for RecordListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.title)?;
        if let Some(keyword) = &self.data.keyword {
            write!(f, " matching \"{}\"", keyword)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        if self.data.records.is_empty() {
            writeln!(f, "No data")?;
        } else {
            let code_width = self
                .data
                .records
                .iter()
                .map(|r| r.code.chars().count())
                .max()
                .unwrap_or(0)
                .max("CODE".len());
            let name_width = self
                .data
                .records
                .iter()
                .map(|r| r.name.chars().count())
                .max()
                .unwrap_or(0)
                .max("NAME".len());

            writeln!(
                f,
                "{:<cw$}  {:<nw$}  DESCRIPTION",
                "CODE",
                "NAME",
                cw = code_width,
                nw = name_width
            )?;
            for record in &self.data.records {
                writeln!(
                    f,
                    "{:<cw$}  {:<nw$}  {}",
                    record.code,
                    record.name,
                    record.description.as_deref().unwrap_or("-"),
                    cw = code_width,
                    nw = name_width
                )?;
            }
        }

        writeln!(f)?;
        if self.data.paged {
            writeln!(
                f,
                "Page {} of {} ({} total, {} per page)",
                self.data.page, self.data.page_count, self.data.total_count, self.data.page_size
            )
        } else {
            writeln!(f, "{} total", self.data.total_count)
        }
    }
}

impl fmt::Display for RecordListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        RecordListView::new(self).fmt(f)
    }
}

// --------------------------------------------------------
// Record Detail View
// --------------------------------------------------------

pub struct RecordDetailView<'a> {
    data: &'a RecordDetailViewModel,
}

impl<'a> RecordDetailView<'a> {
    pub fn new(data: &'a RecordDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for RecordDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let record = &self.data.record;
        writeln!(f, "{:<14}{}", "Id:", record.id)?;
        writeln!(f, "{:<14}{}", "Code:", record.code)?;
        writeln!(f, "{:<14}{}", "Name:", record.name)?;
        writeln!(
            f,
            "{:<14}{}",
            "Description:",
            record.description.as_deref().unwrap_or("-")
        )?;

        if let Some(parent_id) = &record.parent_id {
            match &self.data.parent_label {
                Some(label) => writeln!(f, "{:<14}{} ({})", "Parent:", label, parent_id)?,
                None => writeln!(f, "{:<14}{}", "Parent:", parent_id)?,
            }
        }
        if self.data.child_count > 0 {
            writeln!(f, "{:<14}{}", "Children:", self.data.child_count)?;
        }
        if let Some(date) = &self.data.founded_date {
            writeln!(f, "{:<14}{}", "Founded:", date)?;
        }

        if !self.data.extra.is_empty() {
            writeln!(f)?;
            writeln!(f, "Other fields:")?;
            for field in &self.data.extra {
                writeln!(f, "  {}: {}", field.name, field.value)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for RecordDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        RecordDetailView::new(self).fmt(f)
    }
}

// --------------------------------------------------------
// Mutation Views
// --------------------------------------------------------

pub struct SaveResultView<'a> {
    data: &'a SaveResultViewModel,
}

impl<'a> SaveResultView<'a> {
    pub fn new(data: &'a SaveResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SaveResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let verb = match self.data.action {
            SaveAction::Created => "Created",
            SaveAction::Updated => "Updated",
        };
        let record = &self.data.record;
        writeln!(
            f,
            "{} {} {} ({} - {})",
            verb, self.data.kind, record.id, record.code, record.name
        )?;
        if let Some(parent_id) = &record.parent_id {
            writeln!(f, "  parent: {}", parent_id)?;
        }
        Ok(())
    }
}

impl fmt::Display for SaveResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SaveResultView::new(self).fmt(f)
    }
}

pub struct DeleteResultView<'a> {
    data: &'a DeleteResultViewModel,
}

impl<'a> DeleteResultView<'a> {
    pub fn new(data: &'a DeleteResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DeleteResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Deleted {} {}", self.data.kind, self.data.id)
    }
}

impl fmt::Display for DeleteResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DeleteResultView::new(self).fmt(f)
    }
}

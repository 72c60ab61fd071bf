use std::fmt;

use crate::presentation::view_models::{
    CandidatesViewModel, HierarchyRowViewModel, HierarchyViewModel,
};

pub const EXPANDED_MARKER: &str = "▾";
pub const COLLAPSED_MARKER: &str = "▸";
/// Same width as a marker, for rows without children
pub const LEAF_MARKER: &str = " ";

pub fn marker(row: &HierarchyRowViewModel) -> &'static str {
    match (row.has_children, row.expanded) {
        (true, true) => EXPANDED_MARKER,
        (true, false) => COLLAPSED_MARKER,
        (false, _) => LEAF_MARKER,
    }
}

pub fn tree_label(row: &HierarchyRowViewModel, indent_width: usize) -> String {
    format!(
        "{}{} {}  {}",
        " ".repeat(row.level * indent_width),
        marker(row),
        row.code,
        row.name
    )
}

fn write_rows(
    f: &mut fmt::Formatter<'_>,
    rows: &[HierarchyRowViewModel],
    indent_width: usize,
) -> fmt::Result {
    if rows.is_empty() {
        return writeln!(f, "No data");
    }

    let labels: Vec<String> = rows.iter().map(|r| tree_label(r, indent_width)).collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    for (row, label) in rows.iter().zip(&labels) {
        writeln!(
            f,
            "{:<width$}  {}",
            label,
            row.description.as_deref().unwrap_or("-"),
            width = width
        )?;
    }
    Ok(())
}

// --------------------------------------------------------
// Hierarchy View
// --------------------------------------------------------

pub struct HierarchyView<'a> {
    data: &'a HierarchyViewModel,
}

impl<'a> HierarchyView<'a> {
    pub fn new(data: &'a HierarchyViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for HierarchyView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} records", self.data.title, self.data.total_count)?;
        if let Some(keyword) = &self.data.keyword {
            write!(f, " matching \"{}\"", keyword)?;
        }
        writeln!(f, ")")?;
        writeln!(f)?;

        write_rows(f, &self.data.rows, self.data.indent_width)?;

        if !self.data.dangling.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "Shown as roots (parent not found): {}",
                self.data.dangling.join(", ")
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for HierarchyViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        HierarchyView::new(self).fmt(f)
    }
}

// --------------------------------------------------------
// Candidates View
// --------------------------------------------------------

pub struct CandidatesView<'a> {
    data: &'a CandidatesViewModel,
}

impl<'a> CandidatesView<'a> {
    pub fn new(data: &'a CandidatesViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CandidatesView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Parent candidates")?;
        if let Some(id) = &self.data.exclude_id {
            write!(f, " for {}", id)?;
        }
        if let Some(keyword) = &self.data.keyword {
            write!(f, " matching \"{}\"", keyword)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        write_rows(f, &self.data.rows, self.data.indent_width)?;

        writeln!(f)?;
        writeln!(
            f,
            "Page {} of {} ({} total, {} per page)",
            self.data.page, self.data.page_count, self.data.total_count, self.data.page_size
        )
    }
}

impl fmt::Display for CandidatesViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        CandidatesView::new(self).fmt(f)
    }
}

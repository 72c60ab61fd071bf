//! Hierarchy table: one list item per flattened row, or a single
//! placeholder item while loading and when there is nothing to show.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::view_models::BrowseScreenViewModel;
use crate::presentation::views::hierarchy::tree_label;

pub struct HierarchyTableView<'a> {
    model: &'a BrowseScreenViewModel,
}

impl<'a> HierarchyTableView<'a> {
    pub fn new(model: &'a BrowseScreenViewModel) -> Self {
        Self { model }
    }

    /// Number of selectable rows (placeholders are not selectable)
    pub fn selectable_len(&self) -> usize {
        if self.model.loading {
            0
        } else {
            self.model.rows.len()
        }
    }

    pub fn build_list(&self) -> List<'a> {
        let block = Block::default()
            .title(format!(" {} ", self.model.title))
            .borders(Borders::ALL);

        if self.model.loading {
            return List::new(vec![placeholder("Loading...")]).block(block);
        }
        if self.model.rows.is_empty() {
            return List::new(vec![placeholder("No data")]).block(block);
        }

        let labels: Vec<String> = self
            .model
            .rows
            .iter()
            .map(|row| tree_label(row, self.model.indent_width))
            .collect();
        let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let items: Vec<ListItem> = self
            .model
            .rows
            .iter()
            .zip(labels)
            .map(|(row, label)| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<width$}  ", label, width = width)),
                    Span::styled(
                        row.description.clone().unwrap_or_default(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    }
}

fn placeholder(text: &str) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
}

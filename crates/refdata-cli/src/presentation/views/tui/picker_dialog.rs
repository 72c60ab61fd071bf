//! Ancestor picker dialog: keyword line, radio list of candidates and a
//! footer with paging and the pending choice.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

use crate::presentation::view_models::PickerDialogViewModel;
use crate::presentation::views::hierarchy::tree_label;

const PICKER_INDENT: usize = 2;

pub struct PickerDialogView<'a> {
    model: &'a PickerDialogViewModel,
}

impl<'a> PickerDialogView<'a> {
    pub fn new(model: &'a PickerDialogViewModel) -> Self {
        Self { model }
    }

    pub fn block(&self) -> Block<'a> {
        Block::default()
            .title(format!(" Choose parent for {} ", self.model.target))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
    }

    pub fn build_list(&self) -> List<'a> {
        if self.model.loading {
            return List::new(vec![ListItem::new("Loading...")]);
        }
        if self.model.rows.is_empty() {
            return List::new(vec![ListItem::new("No data")]);
        }

        let items: Vec<ListItem> = self
            .model
            .rows
            .iter()
            .map(|candidate| {
                let radio = if candidate.selected { "(•) " } else { "( ) " };
                let style = if candidate.selected {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(radio, style),
                    Span::styled(tree_label(&candidate.row, PICKER_INDENT), style),
                ]))
            })
            .collect();

        List::new(items).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    }

    /// Keyword line. `editing` shows the in-progress buffer with a cursor.
    pub fn keyword_line(&self, editing: Option<&str>) -> Paragraph<'a> {
        let line = match editing {
            Some(buffer) => Line::from(vec![
                Span::styled("Search: ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("{}_", buffer)),
            ]),
            None if self.model.keyword.is_empty() => Line::from(Span::styled(
                "Search: (press / to filter)",
                Style::default().fg(Color::DarkGray),
            )),
            None => Line::from(vec![
                Span::raw("Search: "),
                Span::raw(self.model.keyword.clone()),
            ]),
        };
        Paragraph::new(line)
    }

    pub fn footer(&self) -> PickerFooter<'a> {
        PickerFooter { model: self.model }
    }
}

pub struct PickerFooter<'a> {
    model: &'a PickerDialogViewModel,
}

impl<'a> Widget for PickerFooter<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chosen = match &self.model.selected_label {
            Some(label) => Span::styled(
                format!("Selected: {}", label),
                Style::default().fg(Color::Green),
            ),
            None => Span::styled("Nothing selected", Style::default().fg(Color::DarkGray)),
        };
        let confirm_style = if self.model.can_confirm {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines = vec![
            Line::from(vec![Span::raw(self.model.page_label.clone())]),
            Line::from(chosen),
            Line::from(vec![
                Span::styled("[s]", Style::default().fg(Color::Yellow)),
                Span::raw("elect "),
                Span::styled("[c]", confirm_style),
                Span::raw("onfirm "),
                Span::styled("[n/b]", Style::default().fg(Color::Yellow)),
                Span::raw(" page "),
                Span::styled("[/]", Style::default().fg(Color::Yellow)),
                Span::raw(" search "),
                Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
                Span::raw(" cancel"),
            ]),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}

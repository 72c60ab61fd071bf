//! Edit form for the selected record: one line per field, the focused field
//! shows a cursor.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::view_models::EditorViewModel;

pub const FIELD_LABELS: [&str; 3] = ["Code", "Name", "Description"];

pub struct EditorDialogView<'a> {
    model: &'a EditorViewModel,
}

impl<'a> EditorDialogView<'a> {
    pub fn new(model: &'a EditorViewModel) -> Self {
        Self { model }
    }

    pub fn block(&self) -> Block<'a> {
        Block::default()
            .title(format!(" Edit {} ", self.model.target))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
    }

    /// Field lines for the in-progress `values`, with `focus` marked.
    pub fn fields(&self, values: &[String; 3], focus: usize) -> Paragraph<'a> {
        let lines: Vec<Line> = FIELD_LABELS
            .iter()
            .zip(values)
            .enumerate()
            .map(|(i, (label, value))| {
                let label = Span::styled(
                    format!("{:<13}", format!("{}:", label)),
                    Style::default().fg(Color::DarkGray),
                );
                if i == focus {
                    Line::from(vec![
                        label,
                        Span::styled(
                            format!("{}_", value),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![label, Span::raw(value.clone())])
                }
            })
            .collect();
        Paragraph::new(lines)
    }

    pub fn help(&self) -> Paragraph<'a> {
        Paragraph::new(Line::from(vec![
            Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
            Span::raw(" next field "),
            Span::styled("[⏎]", Style::default().fg(Color::Yellow)),
            Span::raw(" save "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" cancel"),
        ]))
    }
}

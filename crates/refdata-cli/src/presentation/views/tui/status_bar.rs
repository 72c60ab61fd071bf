use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
    prompt: Option<&'a str>,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self {
            model,
            prompt: None,
        }
    }

    /// Replace the key help with a yes/no question
    pub fn with_prompt(mut self, prompt: Option<&'a str>) -> Self {
        self.prompt = prompt;
        self
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::raw(format!("Records: {} ", self.model.record_count)),
            Span::raw("| "),
            Span::styled(self.model.message.as_str(), Style::default().fg(color)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let right = match self.prompt {
            Some(prompt) => Line::from(vec![
                Span::styled(
                    prompt,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" [y/n]"),
            ]),
            None => Line::from(vec![
                Span::styled("[q]", Style::default().fg(Color::Yellow)),
                Span::raw("uit "),
                Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
                Span::raw("move "),
                Span::styled("[⏎]", Style::default().fg(Color::Yellow)),
                Span::raw("toggle "),
                Span::styled("[e]", Style::default().fg(Color::Yellow)),
                Span::raw("dit "),
                Span::styled("[p]", Style::default().fg(Color::Yellow)),
                Span::raw("arent "),
                Span::styled("[d]", Style::default().fg(Color::Yellow)),
                Span::raw("elete "),
                Span::styled("[r]", Style::default().fg(Color::Yellow)),
                Span::raw("eload"),
            ]),
        };
        Paragraph::new(right).render(chunks[1], buf);
    }
}

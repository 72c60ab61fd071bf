//! Interactive browser loop
//!
//! The renderer owns terminal setup and the UI-only state (list selection,
//! keyword editor, edit form buffers). Domain state lives behind
//! [`BrowseController`]: the loop asks it for a fresh screen view model every
//! frame and forwards resolved actions to it. Component state of a dialog is
//! dropped once the screen no longer shows that dialog.
//!
//! Fetches are deferred to [`BrowseController::tick`], which runs after a
//! frame has been drawn, so the loading placeholder is visible while the
//! source is read.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::presentation::view_models::BrowseScreenViewModel;
use crate::presentation::views::tui::{
    EditorAction, EditorComponent, EditorValues, HierarchyAction, HierarchyComponent,
    PickerAction, PickerComponent, StatusBarView,
};

/// Requests from the browser loop, with row indices already resolved to ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Toggle(String),
    OpenEditor(String),
    EditorSave(EditorValues),
    EditorCancel,
    RequestDelete(String),
    ConfirmDelete(bool),
    OpenPicker(String),
    PickerToggle(String),
    PickerSelect(String),
    PickerConfirm,
    PickerCancel,
    PickerKeyword(String),
    PickerNextPage,
    PickerPreviousPage,
    Reload,
    Quit,
}

pub trait BrowseController {
    fn screen(&self) -> BrowseScreenViewModel;

    fn dispatch(&mut self, action: BrowseAction) -> Result<()>;

    /// Run deferred work (fetches). Returns true when something ran, so the
    /// loop redraws right away.
    fn tick(&mut self) -> Result<bool>;

    fn should_quit(&self) -> bool;
}

pub struct TuiRenderer {
    hierarchy: HierarchyComponent,
    picker: PickerComponent,
    editor: EditorComponent,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            hierarchy: HierarchyComponent::new(),
            picker: PickerComponent::new(),
            editor: EditorComponent::new(),
        }
    }

    pub fn run<C: BrowseController>(mut self, controller: &mut C) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, controller);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<C: BrowseController>(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        controller: &mut C,
    ) -> Result<()> {
        while !controller.should_quit() {
            let screen = controller.screen();
            self.sync_dialogs(&screen);
            terminal.draw(|f| self.draw(f, &screen))?;

            if controller.tick()? {
                continue;
            }

            if event::poll(Duration::from_millis(250))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(action) = self.handle_key_event(key, &screen)
            {
                controller.dispatch(action)?;
            }
        }
        Ok(())
    }

    /// Fill or drop dialog component state to match what `screen` shows.
    fn sync_dialogs(&mut self, screen: &BrowseScreenViewModel) {
        if screen.picker.is_none() {
            self.picker.reset();
        }
        match &screen.editor {
            Some(form) => self.editor.load(form),
            None => self.editor.reset(),
        }
    }

    fn handle_key_event(
        &mut self,
        key: KeyEvent,
        screen: &BrowseScreenViewModel,
    ) -> Option<BrowseAction> {
        if screen.confirm_prompt.is_some() {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Some(BrowseAction::ConfirmDelete(true)),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(BrowseAction::ConfirmDelete(false))
                }
                _ => None,
            };
        }

        if screen.editor.is_some() {
            return match self.editor.handle_input(key)? {
                EditorAction::Save(values) => Some(BrowseAction::EditorSave(values)),
                EditorAction::Cancel => Some(BrowseAction::EditorCancel),
            };
        }

        if let Some(dialog) = &screen.picker {
            let id_at = |i: usize| dialog.rows.get(i).map(|r| r.row.id.clone());
            let action = match self.picker.handle_input(key, dialog)? {
                PickerAction::Toggle(i) => BrowseAction::PickerToggle(id_at(i)?),
                PickerAction::Select(i) => BrowseAction::PickerSelect(id_at(i)?),
                PickerAction::Confirm => BrowseAction::PickerConfirm,
                PickerAction::Cancel => BrowseAction::PickerCancel,
                PickerAction::SetKeyword(keyword) => BrowseAction::PickerKeyword(keyword),
                PickerAction::NextPage => BrowseAction::PickerNextPage,
                PickerAction::PreviousPage => BrowseAction::PickerPreviousPage,
            };
            return Some(action);
        }

        let data_len = if screen.loading { 0 } else { screen.rows.len() };
        let id_at = |i: usize| screen.rows.get(i).map(|r| r.id.clone());
        match self.hierarchy.handle_input(key, data_len)? {
            HierarchyAction::Toggle(i) => id_at(i).map(BrowseAction::Toggle),
            HierarchyAction::Edit(i) => id_at(i).map(BrowseAction::OpenEditor),
            HierarchyAction::Delete(i) => id_at(i).map(BrowseAction::RequestDelete),
            HierarchyAction::OpenPicker(i) => id_at(i).map(BrowseAction::OpenPicker),
            HierarchyAction::Reload => Some(BrowseAction::Reload),
            HierarchyAction::Quit => Some(BrowseAction::Quit),
        }
    }

    fn draw(&mut self, f: &mut Frame, screen: &BrowseScreenViewModel) {
        let chunks =
            Layout::vertical([Constraint::Min(5), Constraint::Length(3)]).split(f.area());

        self.hierarchy.render(f, chunks[0], screen);

        let status_bar = StatusBarView::new(&screen.status_bar)
            .with_prompt(screen.confirm_prompt.as_deref());
        f.render_widget(status_bar, chunks[1]);

        if let Some(dialog) = &screen.picker {
            self.picker.render(f, chunks[0], dialog);
        }
        if let Some(form) = &screen.editor {
            self.editor.render(f, chunks[0], form);
        }
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

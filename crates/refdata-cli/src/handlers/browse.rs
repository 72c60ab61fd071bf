//! Interactive department browser. [`BrowseSession`] holds the domain state
//! and answers the renderer's actions; the renderer owns the terminal.

use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use refdata_engine::{AncestorPicker, ExpansionState, descendant_ids};
use refdata_runtime::{CatalogStore, FileSource, NoticeLevel, RecordSource, Workspace};
use refdata_types::{CatalogKind, Record, RecordDraft, RecordId};
use tracing::{debug, warn};

use crate::presentation::presenters::{BrowseState, present_browse_screen};
use crate::presentation::renderers::{BrowseAction, BrowseController, TuiRenderer};
use crate::presentation::view_models::{BrowseScreenViewModel, StatusLevel};
use crate::presentation::views::tui::EditorValues;

pub fn handle(workspace: &Workspace) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `refdata tree` instead");
    }

    let mut session = BrowseSession::new(workspace);
    TuiRenderer::new().run(&mut session)
}

/// Fetch waiting for the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Reload,
    PickerPage,
}

pub struct BrowseSession<S: RecordSource> {
    store: CatalogStore<S>,
    expansion: ExpansionState,
    picker: AncestorPicker,
    /// Record whose parent the open picker is choosing
    picker_target: Option<Record>,
    /// Record open in the edit form
    editing: Option<Record>,
    pending_delete: Option<Record>,
    pending: Option<Pending>,
    status: (String, StatusLevel),
    indent_width: usize,
    quit: bool,
}

impl BrowseSession<FileSource> {
    pub fn new(workspace: &Workspace) -> Self {
        let config = workspace.config();
        Self::with_store(
            workspace.store(CatalogKind::Department),
            AncestorPicker::new(config.view.page_size),
            config.view.indent_width,
        )
    }
}

impl<S: RecordSource> BrowseSession<S> {
    pub fn with_store(store: CatalogStore<S>, picker: AncestorPicker, indent_width: usize) -> Self {
        Self {
            store,
            expansion: ExpansionState::new(),
            picker,
            picker_target: None,
            editing: None,
            pending_delete: None,
            pending: Some(Pending::Reload),
            status: ("Loading...".to_string(), StatusLevel::Info),
            indent_width,
            quit: false,
        }
    }

    fn find(&self, id: &str) -> Option<Record> {
        self.store
            .records()
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
    }

    fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status = (message.into(), level);
    }

    /// Show the last store notice in the status bar.
    fn absorb_notices(&mut self) {
        if let Some(notice) = self.store.drain_notices().pop() {
            let level = match notice.level {
                NoticeLevel::Success => StatusLevel::Success,
                NoticeLevel::Error => StatusLevel::Error,
            };
            self.set_status(notice.message, level);
        }
    }

    fn request_picker_page(&mut self) {
        self.picker.set_loading(true);
        self.pending = Some(Pending::PickerPage);
    }

    fn save_edit(&mut self, values: EditorValues) {
        let Some(current) = self.editing.clone() else {
            return;
        };

        let mut draft = RecordDraft::from_record(&current);
        draft.code = values.code.trim().to_string();
        draft.name = values.name.trim().to_string();
        let description = values.description.trim();
        draft.description = (!description.is_empty()).then(|| description.to_string());

        // A rejected draft keeps the form open so the input can be fixed.
        if self.store.update(&current.id, draft).is_some() {
            self.editing = None;
        }
        self.absorb_notices();
    }

    fn reparent(&mut self, target: Record, parent: Record) {
        self.store.open_edit(&target);
        let current = self.store.current().cloned().unwrap_or(target);

        let creates_cycle = descendant_ids(self.store.records(), &current.id).contains(&parent.id);

        let mut draft = RecordDraft::from_record(&current);
        draft.apply_parent(&parent);
        let updated = self.store.update(&current.id, draft);
        self.absorb_notices();

        if updated.is_some() && creates_cycle {
            warn!(
                id = %current.id,
                parent = %parent.id,
                "new parent is a descendant, the hierarchy now contains a cycle"
            );
            self.set_status(
                format!(
                    "Updated, but {} is a descendant of {}: the hierarchy now contains a cycle",
                    parent.code, current.code
                ),
                StatusLevel::Warning,
            );
        }
    }
}

impl<S: RecordSource> BrowseController for BrowseSession<S> {
    fn screen(&self) -> BrowseScreenViewModel {
        let picker = self.picker.is_open().then(|| {
            let target = self
                .picker_target
                .as_ref()
                .map(|r| format!("{} - {}", r.code, r.name))
                .unwrap_or_default();
            (&self.picker, target)
        });

        present_browse_screen(BrowseState {
            title: self.store.kind().title(),
            records: self.store.records(),
            loading: self.pending == Some(Pending::Reload),
            expansion: &self.expansion,
            picker,
            editor: self.editing.as_ref(),
            confirm_prompt: self
                .pending_delete
                .as_ref()
                .map(|r| format!("Delete {} - {}?", r.code, r.name)),
            status: (self.status.0.as_str(), self.status.1),
            indent_width: self.indent_width,
        })
    }

    fn dispatch(&mut self, action: BrowseAction) -> Result<()> {
        debug!(?action, "browse action");
        match action {
            BrowseAction::Toggle(id) => {
                self.expansion.toggle(&RecordId::from(id));
            }
            BrowseAction::OpenEditor(id) => {
                if let Some(record) = self.find(&id) {
                    self.store.open_edit(&record);
                    self.editing = Some(self.store.current().cloned().unwrap_or(record));
                }
            }
            BrowseAction::EditorSave(values) => self.save_edit(values),
            BrowseAction::EditorCancel => {
                self.store.close();
                self.editing = None;
                self.set_status("Edit cancelled", StatusLevel::Info);
            }
            BrowseAction::RequestDelete(id) => {
                self.pending_delete = self.find(&id);
            }
            BrowseAction::ConfirmDelete(confirmed) => {
                if let Some(record) = self.pending_delete.take() {
                    if confirmed {
                        self.store.delete(&record.id);
                        self.absorb_notices();
                    } else {
                        self.set_status("Delete cancelled", StatusLevel::Info);
                    }
                }
            }
            BrowseAction::OpenPicker(id) => {
                if let Some(record) = self.find(&id) {
                    self.picker.open(Some(record.id.clone()));
                    self.picker_target = Some(record);
                    self.request_picker_page();
                }
            }
            BrowseAction::PickerToggle(id) => {
                self.picker.toggle(&RecordId::from(id));
            }
            BrowseAction::PickerSelect(id) => {
                self.picker.choose(&RecordId::from(id));
            }
            BrowseAction::PickerConfirm => match self.picker.confirm() {
                Some(parent) => {
                    if let Some(target) = self.picker_target.take() {
                        self.reparent(target, parent);
                    }
                }
                None => self.set_status("Select a parent first", StatusLevel::Warning),
            },
            BrowseAction::PickerCancel => {
                self.picker.close();
                self.picker_target = None;
            }
            BrowseAction::PickerKeyword(keyword) => {
                self.picker.set_keyword(keyword);
                self.request_picker_page();
            }
            BrowseAction::PickerNextPage => {
                if self.picker.next_page() {
                    self.request_picker_page();
                }
            }
            BrowseAction::PickerPreviousPage => {
                if self.picker.previous_page() {
                    self.request_picker_page();
                }
            }
            BrowseAction::Reload => {
                self.pending = Some(Pending::Reload);
                self.set_status("Loading...", StatusLevel::Info);
            }
            BrowseAction::Quit => self.quit = true,
        }
        Ok(())
    }

    fn tick(&mut self) -> Result<bool> {
        match self.pending.take() {
            None => Ok(false),
            Some(Pending::Reload) => {
                if self.store.load().is_ok() {
                    let count = self.store.records().len();
                    self.set_status(format!("Loaded {} records", count), StatusLevel::Info);
                }
                self.absorb_notices();
                Ok(true)
            }
            Some(Pending::PickerPage) => {
                let kind = self.store.kind();
                match self.store.source().list(kind, &self.picker.filter()) {
                    Ok(page) => self.picker.apply_page(page),
                    Err(err) => {
                        self.picker.fail_load();
                        self.set_status(format!("Failed to load data: {}", err), StatusLevel::Error);
                    }
                }
                Ok(true)
            }
        }
    }

    fn should_quit(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refdata_testing::{TestWorld, fixtures};

    fn session(world: &TestWorld) -> BrowseSession<FileSource> {
        let workspace = Workspace::open(world.data_dir().to_path_buf()).unwrap();
        let mut session = BrowseSession::new(&workspace);
        assert!(session.screen().loading);
        assert!(session.tick().unwrap());
        session
    }

    fn world() -> TestWorld {
        TestWorld::new().with_dataset(CatalogKind::Department, fixtures::departments())
    }

    fn visible_codes(session: &BrowseSession<FileSource>) -> Vec<String> {
        session.screen().rows.into_iter().map(|r| r.code).collect()
    }

    #[test]
    fn test_first_tick_loads_collapsed_roots() {
        let world = world();
        let session = session(&world);
        let screen = session.screen();
        assert!(!screen.loading);
        assert_eq!(visible_codes(&session), vec!["HQ", "BR1"]);
        assert_eq!(screen.status_bar.record_count, 7);
    }

    #[test]
    fn test_delete_asks_then_reloads() {
        let world = world();
        let mut session = session(&world);

        session.dispatch(BrowseAction::RequestDelete("br1".into())).unwrap();
        assert_eq!(
            session.screen().confirm_prompt.as_deref(),
            Some("Delete BR1 - Northern branch?")
        );

        session.dispatch(BrowseAction::ConfirmDelete(false)).unwrap();
        assert_eq!(visible_codes(&session), vec!["HQ", "BR1"]);

        session.dispatch(BrowseAction::RequestDelete("br1".into())).unwrap();
        session.dispatch(BrowseAction::ConfirmDelete(true)).unwrap();
        assert_eq!(visible_codes(&session), vec!["HQ"]);
        assert_eq!(session.screen().status_bar.level, StatusLevel::Success);
    }

    #[test]
    fn test_picker_reparents_selected_row() {
        let world = world();
        let mut session = session(&world);

        session.dispatch(BrowseAction::OpenPicker("br1".into())).unwrap();
        assert!(session.screen().picker.unwrap().loading);
        session.tick().unwrap();

        let dialog = session.screen().picker.unwrap();
        assert!(dialog.rows.iter().all(|r| r.row.id != "br1"));

        session.dispatch(BrowseAction::PickerConfirm).unwrap();
        assert_eq!(session.screen().status_bar.level, StatusLevel::Warning);

        session.dispatch(BrowseAction::PickerSelect("hq".into())).unwrap();
        session.dispatch(BrowseAction::PickerConfirm).unwrap();
        assert!(session.screen().picker.is_none());

        session.dispatch(BrowseAction::Toggle("hq".into())).unwrap();
        assert!(visible_codes(&session).contains(&"BR1".to_string()));
    }

    #[test]
    fn test_choosing_a_descendant_warns() {
        let world = world();
        let mut session = session(&world);

        session.dispatch(BrowseAction::OpenPicker("fin".into())).unwrap();
        session.tick().unwrap();
        session.dispatch(BrowseAction::PickerSelect("acc".into())).unwrap();
        session.dispatch(BrowseAction::PickerConfirm).unwrap();

        let screen = session.screen();
        assert_eq!(screen.status_bar.level, StatusLevel::Warning);
        assert!(screen.status_bar.message.contains("cycle"));
    }

    fn values(code: &str, name: &str, description: &str) -> EditorValues {
        EditorValues {
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_edit_form_saves_fields_and_keeps_parent() {
        let world = world();
        let mut session = session(&world);

        session.dispatch(BrowseAction::OpenEditor("br1".into())).unwrap();
        let form = session.screen().editor.unwrap();
        assert_eq!(form.code, "BR1");
        assert_eq!(form.name, "Northern branch");

        session
            .dispatch(BrowseAction::EditorSave(values("BR1", " North branch ", "Regional office")))
            .unwrap();
        let screen = session.screen();
        assert!(screen.editor.is_none());
        assert_eq!(screen.status_bar.level, StatusLevel::Success);

        let saved = session.find("br1").unwrap();
        assert_eq!(saved.name, "North branch");
        assert_eq!(saved.description.as_deref(), Some("Regional office"));
        assert_eq!(saved.effective_parent_id(), None);
    }

    #[test]
    fn test_edit_form_keeps_child_parent_link() {
        let world = world();
        let mut session = session(&world);

        session.dispatch(BrowseAction::OpenEditor("acc".into())).unwrap();
        session
            .dispatch(BrowseAction::EditorSave(values("ACC", "Accounts", "")))
            .unwrap();

        let saved = session.find("acc").unwrap();
        assert_eq!(saved.name, "Accounts");
        assert_eq!(saved.effective_parent_id(), Some(&RecordId::new("fin")));
    }

    #[test]
    fn test_rejected_edit_stays_open() {
        let world = world();
        let mut session = session(&world);

        session.dispatch(BrowseAction::OpenEditor("br1".into())).unwrap();
        session
            .dispatch(BrowseAction::EditorSave(values("", "Northern branch", "")))
            .unwrap();

        let screen = session.screen();
        assert!(screen.editor.is_some());
        assert_eq!(screen.status_bar.level, StatusLevel::Error);
        assert_eq!(session.find("br1").unwrap().code, "BR1");

        session.dispatch(BrowseAction::EditorCancel).unwrap();
        assert!(session.screen().editor.is_none());
    }
}

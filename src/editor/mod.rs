// src/editor/mod.rs

mod commands;
mod form;

pub use commands::{Command, CommandType};
pub use form::{FormField, LevelForm};

use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::document::{LevelDraft, LevelId, LevelStore, LevelSummary};
use crate::generator::{self, DungeonType, GeneratorConfig};
use crate::map::Grid;

/// Which screen the editor is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The list of levels with Add/Edit/Delete buttons.
    List,
    /// The form for a single level.
    Edit,
}

/// Everything the user can ask the editor to do. The terminal front end
/// maps key presses onto these; tests drive the editor with them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    SelectNext,
    SelectPrevious,
    Add,
    Edit,
    Delete,
    Preview,
    Undo,
    Redo,
    Quit,
    FocusNext,
    FocusPrevious,
    Input(char),
    Backspace,
    Submit,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct EditorSettings {
    /// Grid size used for previews.
    pub preview: GeneratorConfig,
}

impl Default for EditorSettings {
    fn default() -> Self {
        EditorSettings {
            preview: GeneratorConfig::new(40, 16),
        }
    }
}

/// A generated grid shown next to the level list.
#[derive(Debug, Clone)]
pub struct Preview {
    pub level_id: LevelId,
    pub dungeon_type: DungeonType,
    pub grid: Grid,
}

/// The main editor state: the level list, the form being edited, and the
/// undo history.
pub struct Editor {
    store: LevelStore,
    settings: EditorSettings,
    screen: Screen,

    /// Snapshot of the store shown on the list screen.
    levels: Vec<LevelSummary>,
    selected: Option<usize>,

    /// Row the form saves into. `None` means the form creates a new row.
    current_id: Option<LevelId>,
    form: LevelForm,

    preview: Option<Preview>,
    rng: StdRng,

    undo_stack: Vec<CommandType>,
    redo_stack: Vec<CommandType>,

    pub status_message: String,
}

impl Editor {
    pub fn new(store: LevelStore, settings: EditorSettings) -> Self {
        Self::with_rng(store, settings, StdRng::from_os_rng())
    }

    /// Creates an editor whose previews draw from `rng`.
    pub fn with_rng(store: LevelStore, settings: EditorSettings, rng: StdRng) -> Self {
        let mut editor = Self {
            store,
            settings,
            screen: Screen::List,
            levels: Vec::new(),
            selected: None,
            current_id: None,
            form: LevelForm::default(),
            preview: None,
            rng,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            status_message: String::new(),
        };
        editor.reload_list(None);
        editor
    }

    pub fn store(&self) -> &LevelStore {
        &self.store
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn levels(&self) -> &[LevelSummary] {
        &self.levels
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_id(&self) -> Option<LevelId> {
        self.selected
            .and_then(|idx| self.levels.get(idx))
            .map(|level| level.id)
    }

    /// Edit and Delete need a selected row.
    pub fn has_selection(&self) -> bool {
        self.selected_id().is_some()
    }

    pub fn current_id(&self) -> Option<LevelId> {
        self.current_id
    }

    pub fn form(&self) -> &LevelForm {
        &self.form
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Applies one action to whichever screen is active.
    pub fn apply(&mut self, action: EditorAction) -> Outcome {
        match self.screen {
            Screen::List => self.apply_list(action),
            Screen::Edit => {
                self.apply_edit(action);
                Outcome::Continue
            }
        }
    }

    fn apply_list(&mut self, action: EditorAction) -> Outcome {
        match action {
            EditorAction::SelectNext => self.select_offset(1),
            EditorAction::SelectPrevious => self.select_offset(-1),
            EditorAction::Add => self.add_level(),
            EditorAction::Edit | EditorAction::Submit => self.edit_selected(),
            EditorAction::Delete => self.delete_selected(),
            EditorAction::Preview => self.preview_selected(),
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
            EditorAction::Quit => {
                info!("Quit requested");
                return Outcome::Quit;
            }
            _ => {}
        }
        Outcome::Continue
    }

    fn apply_edit(&mut self, action: EditorAction) {
        match action {
            EditorAction::FocusNext => self.form.focus_next(),
            EditorAction::FocusPrevious => self.form.focus_previous(),
            EditorAction::Input(ch) => self.form.input(ch),
            EditorAction::Backspace => self.form.backspace(),
            EditorAction::Cancel => self.cancel_edit(),
            EditorAction::Submit => match self.form.focus {
                FormField::Name | FormField::Type => self.form.focus_next(),
                FormField::Biome | FormField::Ok => self.save_form(),
                FormField::Cancel => self.cancel_edit(),
            },
            _ => {}
        }
    }

    fn select_offset(&mut self, offset: isize) {
        if self.levels.is_empty() {
            self.selected = None;
            return;
        }
        let last = self.levels.len() - 1;
        self.selected = Some(match self.selected {
            None => 0,
            Some(idx) => idx.saturating_add_signed(offset).min(last),
        });
    }

    /// Opens a blank form that will create a new level.
    pub fn add_level(&mut self) {
        self.current_id = None;
        self.form = LevelForm::default();
        self.screen = Screen::Edit;
    }

    /// Opens the form on the selected level.
    pub fn edit_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            self.status_message = "Select a level to edit.".to_string();
            return;
        };
        match self.store.get(id) {
            Some(record) => {
                self.current_id = Some(id);
                self.form = LevelForm::new(record.to_draft());
                self.screen = Screen::Edit;
            }
            None => {
                warn!("Selected level {} vanished from the store", id);
                self.status_message = format!("Level {} no longer exists.", id);
                self.reload_list(None);
            }
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            self.status_message = "Select a level to delete.".to_string();
            return;
        };
        let keep = self.selected;
        if self.execute_command(CommandType::delete(id)) {
            self.reload_list(None);
            if !self.levels.is_empty() {
                self.selected = keep.map(|idx| idx.min(self.levels.len() - 1));
            }
        }
    }

    /// Generates a grid for the selected level's type. Types the generator
    /// does not know are previewed as caverns.
    pub fn preview_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            self.status_message = "Select a level to preview.".to_string();
            return;
        };
        let Some(record) = self.store.get(id) else {
            warn!("Selected level {} vanished from the store", id);
            self.status_message = format!("Level {} no longer exists.", id);
            self.reload_list(None);
            return;
        };
        let dungeon_type = match record.level_type.parse::<DungeonType>() {
            Ok(t) => t,
            Err(e) => {
                info!("{}; previewing as {}", e, DungeonType::Cavern);
                DungeonType::Cavern
            }
        };
        match generator::generate(&self.settings.preview, dungeon_type, &mut self.rng) {
            Ok(grid) => {
                self.status_message = format!("Previewing \"{}\" as {}.", record.name, dungeon_type);
                self.preview = Some(Preview {
                    level_id: id,
                    dungeon_type,
                    grid,
                });
            }
            Err(err) => {
                error!("Preview failed: {}", err);
                self.status_message = format!("Preview failed: {}", err);
            }
        }
    }

    pub fn save_form(&mut self) {
        let draft: LevelDraft = self.form.draft.clone();
        let command = match self.current_id {
            None => CommandType::add(draft),
            Some(id) => CommandType::update(id, draft),
        };
        if let Some(id) = self.execute_command_returning_id(command) {
            self.screen = Screen::List;
            self.reload_list(Some(id));
        }
    }

    pub fn cancel_edit(&mut self) {
        self.screen = Screen::List;
        self.reload_list(self.current_id.or(self.selected_id()));
    }

    /// Refreshes the list from the store, selecting `select` if it is present.
    /// A preview of a level that is no longer listed is dropped.
    pub fn reload_list(&mut self, select: Option<LevelId>) {
        self.levels = self.store.summary();
        self.selected = select.and_then(|id| self.levels.iter().position(|l| l.id == id));
        let levels = &self.levels;
        if self
            .preview
            .as_ref()
            .is_some_and(|p| !levels.iter().any(|l| l.id == p.level_id))
        {
            self.preview = None;
        }
    }

    /// Runs a command, records it for undo and clears the redo stack.
    /// Returns false (and reports on the status line) if the store refused it.
    pub fn execute_command(&mut self, command: CommandType) -> bool {
        self.execute_command_returning_id(command).is_some()
    }

    fn execute_command_returning_id(&mut self, mut command: CommandType) -> Option<LevelId> {
        if let Err(err) = command.execute(&self.store) {
            error!("Error executing command: {}", err);
            self.status_message = format!("Could not {}: {}", command.describe(), err);
            return None;
        }
        info!("Executed: {}", command.describe());
        self.status_message = format!("Did {}.", command.describe());
        let id = command.level_id();
        self.undo_stack.push(command);
        self.redo_stack.clear();
        id
    }

    pub fn undo(&mut self) {
        let Some(mut command) = self.undo_stack.pop() else {
            self.status_message = "Nothing to undo.".to_string();
            return;
        };
        match command.undo(&self.store) {
            Ok(()) => {
                self.status_message = format!("Undid {}.", command.describe());
                let id = command.level_id();
                self.redo_stack.push(command);
                self.reload_list(id);
            }
            Err(err) => {
                error!("Error undoing command: {}", err);
                self.status_message = format!("Could not undo: {}", err);
            }
        }
    }

    pub fn redo(&mut self) {
        let Some(mut command) = self.redo_stack.pop() else {
            self.status_message = "Nothing to redo.".to_string();
            return;
        };
        match command.execute(&self.store) {
            Ok(()) => {
                self.status_message = format!("Redid {}.", command.describe());
                let id = command.level_id();
                self.undo_stack.push(command);
                self.reload_list(id);
            }
            Err(err) => {
                error!("Error redoing command: {}", err);
                self.status_message = format!("Could not redo: {}", err);
            }
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(LevelStore::new(), EditorSettings::default())
    }
}

// src/editor/commands.rs

use crate::document::{LevelDraft, LevelId, LevelRecord, LevelStore};
use crate::error::StoreError;

pub trait Command {
    fn execute(&mut self, store: &LevelStore) -> Result<(), StoreError>;
    fn unexecute(&mut self, store: &LevelStore) -> Result<(), StoreError>;
    fn undo(&mut self, store: &LevelStore) -> Result<(), StoreError> {
        self.unexecute(store)
    }
    /// Short text for the status line.
    fn describe(&self) -> String;
}

/// Store mutations the editor can undo.
///
/// Each variant records whatever it needs to reverse itself the first time
/// it runs (the id it was given, or the row it replaced).
#[derive(Clone, Debug, PartialEq)]
pub enum CommandType {
    AddLevel {
        draft: LevelDraft,
        level_id: Option<LevelId>,
    },
    UpdateLevel {
        level_id: LevelId,
        draft: LevelDraft,
        previous: Option<LevelRecord>,
    },
    DeleteLevel {
        level_id: LevelId,
        level: Option<LevelRecord>,
    },
}

impl CommandType {
    pub fn add(draft: LevelDraft) -> Self {
        CommandType::AddLevel {
            draft,
            level_id: None,
        }
    }

    pub fn update(level_id: LevelId, draft: LevelDraft) -> Self {
        CommandType::UpdateLevel {
            level_id,
            draft,
            previous: None,
        }
    }

    pub fn delete(level_id: LevelId) -> Self {
        CommandType::DeleteLevel {
            level_id,
            level: None,
        }
    }

    /// The row this command touched, once it has run.
    pub fn level_id(&self) -> Option<LevelId> {
        match self {
            CommandType::AddLevel { level_id, .. } => *level_id,
            CommandType::UpdateLevel { level_id, .. } | CommandType::DeleteLevel { level_id, .. } => {
                Some(*level_id)
            }
        }
    }
}

impl Command for CommandType {
    fn execute(&mut self, store: &LevelStore) -> Result<(), StoreError> {
        match self {
            CommandType::AddLevel { draft, level_id } => {
                // Redo puts the row back under the id it had before.
                if let Some(id) = *level_id {
                    store.restore(LevelRecord::from_draft(id, draft.clone()))?;
                } else {
                    *level_id = Some(store.add(draft.clone()));
                }
                Ok(())
            }
            CommandType::UpdateLevel {
                level_id,
                draft,
                previous,
            } => {
                *previous = Some(store.update(*level_id, draft.clone())?);
                Ok(())
            }
            CommandType::DeleteLevel { level_id, level } => {
                *level = Some(store.delete(*level_id)?);
                Ok(())
            }
        }
    }

    fn unexecute(&mut self, store: &LevelStore) -> Result<(), StoreError> {
        match self {
            CommandType::AddLevel { level_id, .. } => match level_id {
                Some(id) => store.delete(*id).map(|_| ()),
                None => Ok(()),
            },
            CommandType::UpdateLevel {
                level_id, previous, ..
            } => match previous {
                Some(old) => store.update(*level_id, old.to_draft()).map(|_| ()),
                None => Err(StoreError::NotFound(*level_id)),
            },
            CommandType::DeleteLevel { level_id, level } => match level.take() {
                Some(old) => store.restore(old),
                None => Err(StoreError::NotFound(*level_id)),
            },
        }
    }

    fn describe(&self) -> String {
        match self {
            CommandType::AddLevel { draft, .. } => format!("add level \"{}\"", draft.name),
            CommandType::UpdateLevel { draft, .. } => format!("edit level \"{}\"", draft.name),
            CommandType::DeleteLevel { level_id, level } => match level {
                Some(old) => format!("delete level \"{}\"", old.name),
                None => format!("delete level {}", level_id),
            },
        }
    }
}

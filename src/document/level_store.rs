// src/document/level_store.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::error::StoreError;

/// Row identifier. Ids start at 1 and a new row gets one more than the
/// largest id currently stored.
pub type LevelId = u32;

/// The editable columns of a level, without its id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelDraft {
    pub name: String,
    pub level_type: String,
    pub biome: String,
}

impl LevelDraft {
    pub fn new(
        name: impl Into<String>,
        level_type: impl Into<String>,
        biome: impl Into<String>,
    ) -> Self {
        LevelDraft {
            name: name.into(),
            level_type: level_type.into(),
            biome: biome.into(),
        }
    }
}

/// A stored level row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRecord {
    pub id: LevelId,
    pub name: String,
    pub level_type: String,
    pub biome: String,
}

impl LevelRecord {
    pub fn from_draft(id: LevelId, draft: LevelDraft) -> Self {
        LevelRecord {
            id,
            name: draft.name,
            level_type: draft.level_type,
            biome: draft.biome,
        }
    }

    pub fn to_draft(&self) -> LevelDraft {
        LevelDraft::new(&self.name, &self.level_type, &self.biome)
    }
}

/// What the list screen shows for each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    pub name: String,
    pub id: LevelId,
}

/// In-memory table of levels.
///
/// Clones share the same rows, so the store can be handed to several owners.
#[derive(Debug, Clone, Default)]
pub struct LevelStore {
    levels: Arc<RwLock<BTreeMap<LevelId, LevelRecord>>>,
}

impl LevelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.levels.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.read().is_empty()
    }

    /// Inserts a new row and returns its id.
    pub fn add(&self, draft: LevelDraft) -> LevelId {
        let mut levels = self.levels.write();
        let id = levels.keys().next_back().map_or(1, |last| last + 1);
        levels.insert(id, LevelRecord::from_draft(id, draft));
        debug!("Added level {}", id);
        id
    }

    /// `(name, id)` for every row, in id order.
    pub fn summary(&self) -> Vec<LevelSummary> {
        self.levels
            .read()
            .values()
            .map(|level| LevelSummary {
                name: level.name.clone(),
                id: level.id,
            })
            .collect()
    }

    pub fn get(&self, id: LevelId) -> Option<LevelRecord> {
        self.levels.read().get(&id).cloned()
    }

    /// Overwrites the columns of an existing row and returns the old row.
    pub fn update(&self, id: LevelId, draft: LevelDraft) -> Result<LevelRecord, StoreError> {
        let mut levels = self.levels.write();
        let slot = levels.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        let previous = std::mem::replace(slot, LevelRecord::from_draft(id, draft));
        debug!("Updated level {}", id);
        Ok(previous)
    }

    /// Removes a row and returns it.
    pub fn delete(&self, id: LevelId) -> Result<LevelRecord, StoreError> {
        let removed = self
            .levels
            .write()
            .remove(&id)
            .ok_or(StoreError::NotFound(id))?;
        debug!("Deleted level {}", id);
        Ok(removed)
    }

    /// Puts a previously removed row back under its own id.
    pub fn restore(&self, record: LevelRecord) -> Result<(), StoreError> {
        let mut levels = self.levels.write();
        if levels.contains_key(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        levels.insert(record.id, record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> LevelDraft {
        LevelDraft::new(name, "cavern", "tundra")
    }

    #[test]
    fn test_empty_store() {
        let store = LevelStore::new();
        assert!(store.is_empty());
        assert!(store.summary().is_empty());
        assert_eq!(store.get(1), None);
    }

    #[test]
    fn test_ids_follow_largest_existing() {
        let store = LevelStore::new();
        assert_eq!(store.add(draft("a")), 1);
        assert_eq!(store.add(draft("b")), 2);
        assert_eq!(store.add(draft("c")), 3);
        store.delete(2).unwrap();
        assert_eq!(store.add(draft("d")), 4);
        store.delete(4).unwrap();
        assert_eq!(store.add(draft("e")), 4);
    }

    #[test]
    fn test_summary_in_id_order() {
        let store = LevelStore::new();
        store.add(draft("Gloomhollow"));
        store.add(draft("Ashpit"));
        let names: Vec<_> = store.summary().into_iter().map(|s| (s.name, s.id)).collect();
        assert_eq!(
            names,
            vec![("Gloomhollow".to_string(), 1), ("Ashpit".to_string(), 2)]
        );
    }

    #[test]
    fn test_update_returns_previous() {
        let store = LevelStore::new();
        let id = store.add(draft("old"));
        let previous = store.update(id, LevelDraft::new("new", "crypt", "swamp")).unwrap();
        assert_eq!(previous.name, "old");
        let current = store.get(id).unwrap();
        assert_eq!(current.to_draft(), LevelDraft::new("new", "crypt", "swamp"));
        assert_eq!(store.update(99, draft("x")), Err(StoreError::NotFound(99)));
    }

    #[test]
    fn test_delete_and_restore() {
        let store = LevelStore::new();
        let id = store.add(draft("keep"));
        let removed = store.delete(id).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.delete(id), Err(StoreError::NotFound(id)));

        store.restore(removed.clone()).unwrap();
        assert_eq!(store.get(id), Some(removed.clone()));
        assert_eq!(store.restore(removed), Err(StoreError::DuplicateId(id)));
    }

    #[test]
    fn test_clones_share_rows() {
        let store = LevelStore::new();
        let handle = store.clone();
        handle.add(draft("shared"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_access() {
        let store = LevelStore::new();
        std::thread::scope(|s| {
            for i in 0..4 {
                let store = &store;
                s.spawn(move || {
                    store.add(draft(&format!("level {i}")));
                    let _ = store.summary();
                });
            }
        });
        let ids: Vec<_> = store.summary().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}

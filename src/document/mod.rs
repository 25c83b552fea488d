// src/document/mod.rs
mod level_store;

pub use self::level_store::{LevelDraft, LevelId, LevelRecord, LevelStore, LevelSummary};

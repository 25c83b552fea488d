// src/error.rs

use thiserror::Error;

use crate::document::LevelId;

/// Why a generator configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("`{0}` is missing")]
    Missing(&'static str),

    #[error("`{field}` must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        value: i64,
        min: i64,
    },

    #[error("a {width}x{height} grid is too large")]
    TooLarge { width: usize, height: usize },

    #[error("malformed configuration: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("level {0} not found")]
    NotFound(LevelId),

    #[error("level {0} already exists")]
    DuplicateId(LevelId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dungeon type `{0}`")]
pub struct UnknownDungeonType(pub String);

// src/generator/config.rs

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::map::Tile;

/// Smallest width or height that still leaves an interior inside the border.
pub const MIN_DIMENSION: i64 = 3;

/// Most cells a single grid allocation can hold.
const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<Tile>();

/// Size options handed to the generator by its host.
///
/// Serialized with the host's key names, e.g. `{"Width": 40, "Height": 16}`.
/// Fields are optional so that a missing key can be reported as such rather
/// than as a parse failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(rename = "Width", default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(rename = "Height", default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
}

impl GeneratorConfig {
    pub fn new(width: i64, height: i64) -> Self {
        GeneratorConfig {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Parses a JSON configuration map.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Returns a copy where every value present in `other` replaces ours.
    pub fn merged(self, other: GeneratorConfig) -> Self {
        GeneratorConfig {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
        }
    }

    /// Validates both dimensions and returns them as `(width, height)`.
    /// The cell count must also fit in one allocation.
    pub fn dimensions(&self) -> Result<(usize, usize), ConfigError> {
        let width = check_dimension("Width", self.width)?;
        let height = check_dimension("Height", self.height)?;
        width
            .checked_mul(height)
            .filter(|&cells| cells <= MAX_CELLS)
            .ok_or(ConfigError::TooLarge { width, height })?;
        Ok((width, height))
    }
}

fn check_dimension(field: &'static str, value: Option<i64>) -> Result<usize, ConfigError> {
    let value = value.ok_or(ConfigError::Missing(field))?;
    if value < MIN_DIMENSION {
        return Err(ConfigError::TooSmall {
            field,
            value,
            min: MIN_DIMENSION,
        });
    }
    usize::try_from(value).map_err(|_| ConfigError::Malformed(format!("`{field}` is too large")))
}

// src/generator/mod.rs

//! # Grid Generator
//!
//! Turns a [`GeneratorConfig`] and a [`DungeonType`] into a freshly allocated
//! [`Grid`]. Generation is pure apart from the random source, which callers
//! pass in explicitly so tests can use a seeded generator.

mod cavern;
mod config;

pub use cavern::BOULDER_ODDS;
pub use config::{GeneratorConfig, MIN_DIMENSION};

use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::{GenerateError, UnknownDungeonType};
use crate::map::Grid;

/// The layout families a level can ask for.
///
/// Only [`DungeonType::Cavern`] has a fill routine. The other variants are
/// accepted and produce the plain default grid until they get one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DungeonType {
    #[default]
    Cavern,
    Crypt,
    Ruins,
}

impl DungeonType {
    pub fn name(&self) -> &'static str {
        match self {
            DungeonType::Cavern => "cavern",
            DungeonType::Crypt => "crypt",
            DungeonType::Ruins => "ruins",
        }
    }

    pub fn all() -> &'static [DungeonType] {
        &[DungeonType::Cavern, DungeonType::Crypt, DungeonType::Ruins]
    }
}

impl fmt::Display for DungeonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DungeonType {
    type Err = UnknownDungeonType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DungeonType::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownDungeonType(wanted.to_string()))
    }
}

/// Generates a grid of the configured size using `rng` for every random draw.
///
/// Fails with [`GenerateError::InvalidConfiguration`] before allocating
/// anything if either dimension is missing or smaller than
/// [`MIN_DIMENSION`].
pub fn generate<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    dungeon_type: DungeonType,
    rng: &mut R,
) -> Result<Grid, GenerateError> {
    let (width, height) = config.dimensions()?;
    debug!("Generating {} grid {}x{}", dungeon_type, width, height);
    Ok(build(width, height, dungeon_type, rng))
}

/// Same as [`generate`], drawing from the thread-local default generator.
pub fn generate_with_thread_rng(
    config: &GeneratorConfig,
    dungeon_type: DungeonType,
) -> Result<Grid, GenerateError> {
    generate(config, dungeon_type, &mut rand::rng())
}

/// Same as [`generate`] with a fresh [`StdRng`] seeded from `seed`.
/// Equal seeds give identical grids.
pub fn generate_seeded(
    config: &GeneratorConfig,
    dungeon_type: DungeonType,
    seed: u64,
) -> Result<Grid, GenerateError> {
    generate(config, dungeon_type, &mut StdRng::seed_from_u64(seed))
}

/// Generates one grid per seed on the rayon pool.
///
/// Each grid gets its own seeded generator, so the output is identical to
/// calling [`generate_seeded`] for each seed in turn, and in the same order.
pub fn generate_batch(
    config: &GeneratorConfig,
    dungeon_type: DungeonType,
    seeds: &[u64],
) -> Result<Vec<Grid>, GenerateError> {
    let (width, height) = config.dimensions()?;
    info!(
        "Generating {} {} grids of {}x{}",
        seeds.len(),
        dungeon_type,
        width,
        height
    );
    Ok(seeds
        .par_iter()
        .map(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            build(width, height, dungeon_type, &mut rng)
        })
        .collect())
}

fn build<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    dungeon_type: DungeonType,
    rng: &mut R,
) -> Grid {
    let mut grid = Grid::new(width, height);
    match dungeon_type {
        DungeonType::Cavern => cavern::fill(&mut grid, rng),
        // No fill routine yet: these keep the default floor grid.
        DungeonType::Crypt | DungeonType::Ruins => {}
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::map::Tile;
    use assert_approx_eq::assert_approx_eq;

    fn assert_walled(grid: &Grid) {
        for (x, y, tile) in grid.cells() {
            if grid.is_border(x, y) {
                assert_eq!(tile.symbol(), '#', "border ({x}, {y})");
                assert!(!tile.is_passable(), "border ({x}, {y})");
                assert!(!tile.is_breakable(), "border ({x}, {y})");
            } else {
                assert!(
                    *tile == Tile::floor() || *tile == Tile::boulder(),
                    "interior ({x}, {y}) is {tile:?}"
                );
            }
        }
    }

    #[test]
    fn test_dimensions_match_request() {
        let mut rng = StdRng::seed_from_u64(1);
        for (w, h) in [(3, 3), (3, 9), (17, 4), (80, 24)] {
            let grid = generate(&GeneratorConfig::new(w, h), DungeonType::Cavern, &mut rng).unwrap();
            assert_eq!(grid.width(), w as usize);
            assert_eq!(grid.height(), h as usize);
            assert_eq!(grid.columns().count(), w as usize);
            assert_eq!(grid.rows().count(), h as usize);
            assert_walled(&grid);
        }
    }

    #[test]
    fn test_five_by_five_cavern() {
        for seed in 0..50 {
            let grid = generate_seeded(&GeneratorConfig::new(5, 5), DungeonType::Cavern, seed).unwrap();
            for i in 0..5 {
                assert!(grid.get(i, 0).unwrap().is_wall());
                assert!(grid.get(i, 4).unwrap().is_wall());
                assert!(grid.get(0, i).unwrap().is_wall());
                assert!(grid.get(4, i).unwrap().is_wall());
            }
            for x in 1..=3 {
                for y in 1..=3 {
                    let tile = grid.get(x, y).unwrap();
                    assert!(*tile == Tile::floor() || *tile == Tile::boulder());
                }
            }
        }
    }

    #[test]
    fn test_three_by_three_has_single_interior_cell() {
        let grid = generate_seeded(&GeneratorConfig::new(3, 3), DungeonType::Cavern, 9).unwrap();
        assert_eq!(grid.interior_len(), 1);
        assert_eq!(grid.count(Tile::is_wall), 8);
        assert_walled(&grid);
    }

    #[test]
    fn test_boulder_frequency() {
        let config = GeneratorConfig::new(102, 102);
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let mut boulders = 0;
        let mut interior = 0;
        for _ in 0..5 {
            let grid = generate(&config, DungeonType::Cavern, &mut rng).unwrap();
            boulders += grid.count(Tile::is_boulder);
            interior += grid.interior_len();
        }
        assert_eq!(interior, 50_000);
        let frequency = boulders as f64 / interior as f64;
        assert_approx_eq!(frequency, 0.10, 0.01);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = GeneratorConfig::new(30, 12);
        let a = generate_seeded(&config, DungeonType::Cavern, 42).unwrap();
        let b = generate_seeded(&config, DungeonType::Cavern, 42).unwrap();
        assert_eq!(a, b);

        let c = generate_seeded(&config, DungeonType::Cavern, 43).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_thread_rng_generation() {
        let grid = generate_with_thread_rng(&GeneratorConfig::new(12, 7), DungeonType::Cavern).unwrap();
        assert_walled(&grid);
    }

    #[test]
    fn test_placeholder_types_yield_default_grid() {
        let config = GeneratorConfig::new(6, 4);
        for dungeon_type in [DungeonType::Crypt, DungeonType::Ruins] {
            let grid = generate_seeded(&config, dungeon_type, 3).unwrap();
            assert_eq!(grid, Grid::new(6, 4));
        }
    }

    #[test]
    fn test_invalid_configuration() {
        let mut rng = StdRng::seed_from_u64(0);
        let cases = [
            GeneratorConfig::default(),
            GeneratorConfig::new(0, 5),
            GeneratorConfig::new(5, -1),
            GeneratorConfig::new(2, 5),
            GeneratorConfig {
                width: Some(5),
                height: None,
            },
        ];
        for config in cases {
            let err = generate(&config, DungeonType::Cavern, &mut rng).unwrap_err();
            assert!(matches!(err, GenerateError::InvalidConfiguration(_)));
        }
        assert_eq!(
            generate(&GeneratorConfig::default(), DungeonType::Cavern, &mut rng),
            Err(GenerateError::InvalidConfiguration(ConfigError::Missing("Width")))
        );
    }

    #[test]
    fn test_oversized_grid_is_rejected_before_allocating() {
        let config = GeneratorConfig::new(1 << 32, 1 << 32);
        assert!(config.dimensions().is_err());
        for dungeon_type in DungeonType::all() {
            let err = generate_seeded(&config, *dungeon_type, 0).unwrap_err();
            assert!(matches!(err, GenerateError::InvalidConfiguration(_)));
        }
        let batch = generate_batch(&config, DungeonType::Cavern, &[0, 1]);
        assert!(matches!(batch, Err(GenerateError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let config = GeneratorConfig::new(25, 10);
        let seeds: Vec<u64> = (100..116).collect();
        let batch = generate_batch(&config, DungeonType::Cavern, &seeds).unwrap();
        assert_eq!(batch.len(), seeds.len());
        for (grid, &seed) in batch.iter().zip(&seeds) {
            assert_eq!(*grid, generate_seeded(&config, DungeonType::Cavern, seed).unwrap());
        }
    }

    #[test]
    fn test_batch_rejects_invalid_configuration() {
        let result = generate_batch(&GeneratorConfig::new(1, 1), DungeonType::Cavern, &[1, 2]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dungeon_type_parsing() {
        assert_eq!("CAVERN".parse::<DungeonType>(), Ok(DungeonType::Cavern));
        assert_eq!(" crypt ".parse::<DungeonType>(), Ok(DungeonType::Crypt));
        assert_eq!(
            "swamp".parse::<DungeonType>(),
            Err(UnknownDungeonType("swamp".to_string()))
        );
        for t in DungeonType::all() {
            assert_eq!(t.to_string().parse::<DungeonType>(), Ok(*t));
        }
    }
}

// src/generator/cavern.rs

use rand::Rng;

use crate::map::{Grid, Tile};

/// One in this many interior cells becomes a boulder.
pub const BOULDER_ODDS: u32 = 10;

/// Fills `grid` as a cavern: the outer border becomes walls and each
/// interior cell independently becomes a breakable boulder with
/// probability `1 / BOULDER_ODDS`. Every other cell is left untouched.
///
/// Exactly one random draw is made per interior cell, in column-major order,
/// so a seeded generator always yields the same layout.
pub fn fill<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if grid.is_border(x, y) {
                grid.set(x, y, Tile::wall());
            } else if rng.random_range(0..BOULDER_ODDS) == 0 {
                grid.set(x, y, Tile::boulder());
            }
        }
    }
}

// src/map/mod.rs
pub mod grid;
pub mod tile;

pub use grid::Grid;
pub use tile::{Tile, DEFAULT_COLOR, MAX_COLOR};

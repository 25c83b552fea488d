// src/map/grid.rs

use std::fmt;

use super::tile::Tile;

/// A rectangular `width × height` collection of tiles, indexed by
/// `(column, row)`.
///
/// Tiles are stored column-major: all rows of column 0, then column 1, and so
/// on. Every cell owns its own [`Tile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates a grid with every cell set to the default floor tile.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            tiles: vec![Tile::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(x * self.height + y)
        } else {
            None
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Tile> {
        self.index(x, y).map(|idx| &self.tiles[idx])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Tile> {
        self.index(x, y).map(move |idx| &mut self.tiles[idx])
    }

    /// Replaces the tile at `(x, y)`. Out-of-bounds writes are ignored and
    /// reported as `false`.
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) -> bool {
        match self.get_mut(x, y) {
            Some(slot) => {
                *slot = tile;
                true
            }
            None => false,
        }
    }

    /// True for cells on the outer edge: first or last column, first or last row.
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    /// Iterates columns left to right; each column is a slice top to bottom.
    pub fn columns(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.height.max(1))
    }

    /// Iterates rows top to bottom, yielding the tiles of each row left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Tile>> {
        (0..self.height)
            .map(move |y| (0..self.width).map(move |x| &self.tiles[x * self.height + y]))
    }

    /// Iterates all cells as `(x, y, tile)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Tile)> {
        let height = self.height;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(idx, tile)| (idx / height, idx % height, tile))
    }

    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Tile) -> bool,
    {
        self.tiles.iter().filter(|&tile| predicate(tile)).count()
    }

    /// Number of cells that are not on the border.
    pub fn interior_len(&self) -> usize {
        self.width.saturating_sub(2) * self.height.saturating_sub(2)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.symbol())?;
            }
        }
        Ok(())
    }
}

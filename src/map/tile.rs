// src/map/tile.rs

/// Palette index used when no color is given or an invalid one is assigned.
pub const DEFAULT_COLOR: u8 = 7;

/// Highest valid palette index (the palette has eight entries, 0-7).
pub const MAX_COLOR: u8 = 7;

pub const FLOOR_SYMBOL: char = '.';
pub const WALL_SYMBOL: char = '#';

/// Identifier of an item a tile may one day hold.
pub type ItemId = u32;

/// A single cell of a generated grid.
///
/// The color is a palette index in `0..=7`. Both the constructor and
/// [`Tile::set_color`] normalize anything outside that range to
/// [`DEFAULT_COLOR`], so a `Tile` never carries an invalid color.
///
/// ```
/// use cavern_ed::map::Tile;
///
/// let mut tile = Tile::floor();
/// tile.set_color(8);
/// assert_eq!(tile.color(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    symbol: char,
    color: u8,
    passable: bool,
    breakable: bool,
    /// Reserved for tile contents; nothing fills it yet.
    inventory: Vec<ItemId>,
}

impl Tile {
    pub fn new(symbol: char, color: i32, passable: bool, breakable: bool) -> Self {
        Tile {
            symbol,
            color: normalize_color(color),
            passable,
            breakable,
            inventory: Vec::new(),
        }
    }

    /// Open ground: `.`, default color, passable.
    pub fn floor() -> Self {
        Self::new(FLOOR_SYMBOL, DEFAULT_COLOR as i32, true, false)
    }

    /// Impassable and indestructible. Used for the outer border.
    pub fn wall() -> Self {
        Self::new(WALL_SYMBOL, DEFAULT_COLOR as i32, false, false)
    }

    /// Impassable rock that can be broken to open the cell.
    pub fn boulder() -> Self {
        Self::new(WALL_SYMBOL, DEFAULT_COLOR as i32, false, true)
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn set_symbol(&mut self, symbol: char) {
        self.symbol = symbol;
    }

    pub fn color(&self) -> u8 {
        self.color
    }

    /// Sets the palette index. Values outside `0..=7` reset the color to
    /// [`DEFAULT_COLOR`] instead of failing.
    pub fn set_color(&mut self, color: i32) {
        self.color = normalize_color(color);
    }

    pub fn is_passable(&self) -> bool {
        self.passable
    }

    pub fn set_passable(&mut self, passable: bool) {
        self.passable = passable;
    }

    pub fn is_breakable(&self) -> bool {
        self.breakable
    }

    pub fn set_breakable(&mut self, breakable: bool) {
        self.breakable = breakable;
    }

    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    pub fn is_wall(&self) -> bool {
        !self.passable && !self.breakable
    }

    pub fn is_boulder(&self) -> bool {
        !self.passable && self.breakable
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::floor()
    }
}

fn normalize_color(color: i32) -> u8 {
    match u8::try_from(color) {
        Ok(c) if c <= MAX_COLOR => c,
        _ => DEFAULT_COLOR,
    }
}

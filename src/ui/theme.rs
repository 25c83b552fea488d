// src/ui/theme.rs

use ratatui::style::{Color, Modifier, Style};

use crate::map::Tile;

/// The eight-entry tile palette, indexed by [`Tile::color`].
pub const PALETTE: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

pub fn palette_color(index: u8) -> Color {
    PALETTE
        .get(index as usize)
        .copied()
        .unwrap_or(PALETTE[crate::map::DEFAULT_COLOR as usize])
}

/// Walls are bold and boulders dimmed so the two `#` glyphs can be told apart.
pub fn tile_style(tile: &Tile) -> Style {
    let style = Style::default().fg(palette_color(tile.color()));
    if tile.is_boulder() {
        style.add_modifier(Modifier::DIM)
    } else if tile.is_wall() {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn title() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn focused() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

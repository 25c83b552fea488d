// src/ui/preview.rs

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;
use crate::editor::Editor;
use crate::map::{Grid, Tile};

pub fn render(frame: &mut Frame, area: Rect, editor: &Editor) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border());

    let Some(preview) = editor.preview() else {
        let hint = Paragraph::new("Select a level and press p to preview it.")
            .alignment(Alignment::Center)
            .block(block.title(" Preview "));
        frame.render_widget(hint, area);
        return;
    };

    let name = editor
        .levels()
        .iter()
        .find(|level| level.id == preview.level_id)
        .map_or("", |level| level.name.as_str());
    let boulders = preview.grid.count(Tile::is_boulder);
    let title = format!(
        " {} ({}, {} boulders) ",
        name, preview.dungeon_type, boulders
    );

    let grid = Paragraph::new(grid_lines(&preview.grid))
        .block(block.title(Span::styled(title, theme::title())));
    frame.render_widget(grid, area);
}

/// One styled line per grid row.
pub fn grid_lines(grid: &Grid) -> Vec<Line<'static>> {
    grid.rows()
        .map(|row| {
            Line::from(
                row.map(|tile| Span::styled(tile.symbol().to_string(), theme::tile_style(tile)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

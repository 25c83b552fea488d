// src/ui/mod.rs

//! # Terminal front end
//!
//! Draws the editor with ratatui and feeds crossterm key presses into it.
//! The event loop blocks on input and redraws after every event, including
//! resizes, so the current screen survives a terminal resize.

pub mod input;
pub mod theme;

mod level_view;
mod list_view;
mod preview;
mod status_bar;

pub use preview::grid_lines;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    DefaultTerminal, Frame,
};

use crate::editor::{Editor, Outcome, Screen};

pub type Tui = DefaultTerminal;

/// Takes over the terminal, runs the editor until the user quits, then
/// restores the terminal even if the loop failed.
pub fn run(editor: &mut Editor) -> Result<()> {
    info!("Starting level editor");
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, editor);
    ratatui::restore();
    info!("Level editor closed");
    result
}

fn event_loop(terminal: &mut Tui, editor: &mut Editor) -> Result<()> {
    loop {
        terminal
            .draw(|frame| draw(frame, editor))
            .context("failed to draw frame")?;

        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if input::is_interrupt(&key) {
                    return Ok(());
                }
                if let Some(action) = input::map_key(editor.screen(), key) {
                    if editor.apply(action) == Outcome::Quit {
                        return Ok(());
                    }
                }
            }
            // Redrawn at the top of the loop.
            Event::Resize(_, _) => {}
            _ => {}
        }
    }
}

/// Renders the whole editor into `frame`.
pub fn draw(frame: &mut Frame, editor: &Editor) {
    let [main, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    match editor.screen() {
        Screen::List => list_view::render(frame, main, editor),
        Screen::Edit => level_view::render(frame, centered(main, 2, 3), editor),
    }
    status_bar::render(frame, status, editor);
}

/// A rectangle `num/den` the size of `area`, centered in it.
fn centered(area: Rect, num: u16, den: u16) -> Rect {
    let width = area.width * num / den;
    let height = (area.height * num / den).max(7);
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{LevelDraft, LevelStore};
    use crate::editor::{EditorAction, EditorSettings};
    use crate::generator::GeneratorConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(editor: &Editor) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, editor)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn editor_with_level() -> Editor {
        let store = LevelStore::new();
        store.add(LevelDraft::new("Gloomhollow", "cavern", "tundra"));
        let settings = EditorSettings {
            preview: GeneratorConfig::new(12, 6),
        };
        Editor::with_rng(store, settings, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_list_screen_renders_levels() {
        let editor = editor_with_level();
        let text = screen_text(&editor);
        assert!(text.contains("Level List"));
        assert!(text.contains("Gloomhollow"));
        assert!(text.contains("[a]dd"));
        assert!(text.contains("1 level | list"));
    }

    #[test]
    fn test_status_bar_pluralizes_count() {
        let mut editor = editor_with_level();
        editor.store().add(LevelDraft::new("Saltmarsh", "cavern", "coast"));
        editor.reload_list(None);
        assert!(screen_text(&editor).contains("2 levels | list"));

        let empty = Editor::with_rng(
            LevelStore::new(),
            EditorSettings::default(),
            StdRng::seed_from_u64(1),
        );
        assert!(screen_text(&empty).contains("0 levels | list"));
    }

    #[test]
    fn test_edit_screen_renders_form() {
        let mut editor = editor_with_level();
        editor.apply(EditorAction::SelectNext);
        editor.apply(EditorAction::Edit);
        let text = screen_text(&editor);
        assert!(text.contains("Level info (#1)"));
        assert!(text.contains("Biome:  tundra"));
        assert!(text.contains("[ Cancel ]"));
    }

    #[test]
    fn test_preview_renders_border() {
        let mut editor = editor_with_level();
        editor.apply(EditorAction::SelectNext);
        editor.apply(EditorAction::Preview);
        let text = screen_text(&editor);
        assert!(text.contains("Gloomhollow (cavern"));
        assert!(text.contains("############"));
    }

    #[test]
    fn test_grid_lines_follow_rows() {
        let grid = crate::generator::generate_seeded(
            &GeneratorConfig::new(5, 4),
            crate::generator::DungeonType::Cavern,
            3,
        )
        .unwrap();
        let lines = grid_lines(&grid);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.width() == 5));
    }
}

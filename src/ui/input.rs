// src/ui/input.rs

//! Keyboard handling for the terminal editor.
//!
//! Key bindings live here so the editor itself only ever sees
//! [`EditorAction`]s and can be driven without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::editor::{EditorAction, Screen};

/// Ctrl+C leaves the editor from any screen.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a key press into an editor action for the given screen.
pub fn map_key(screen: Screen, key: KeyEvent) -> Option<EditorAction> {
    match screen {
        Screen::List => map_list_key(key),
        Screen::Edit => map_edit_key(key),
    }
}

fn map_list_key(key: KeyEvent) -> Option<EditorAction> {
    let action = match key.code {
        KeyCode::Up => EditorAction::SelectPrevious,
        KeyCode::Down => EditorAction::SelectNext,
        KeyCode::Enter => EditorAction::Edit,
        KeyCode::Delete => EditorAction::Delete,
        KeyCode::Esc => EditorAction::Quit,
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'k' => EditorAction::SelectPrevious,
            'j' => EditorAction::SelectNext,
            'a' => EditorAction::Add,
            'e' => EditorAction::Edit,
            'd' => EditorAction::Delete,
            'p' => EditorAction::Preview,
            'u' => EditorAction::Undo,
            'r' => EditorAction::Redo,
            'q' => EditorAction::Quit,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

fn map_edit_key(key: KeyEvent) -> Option<EditorAction> {
    let action = match key.code {
        KeyCode::Tab | KeyCode::Down => EditorAction::FocusNext,
        KeyCode::BackTab | KeyCode::Up => EditorAction::FocusPrevious,
        KeyCode::Enter => EditorAction::Submit,
        KeyCode::Esc => EditorAction::Cancel,
        KeyCode::Backspace => EditorAction::Backspace,
        KeyCode::Char(ch) => EditorAction::Input(ch),
        _ => return None,
    };
    Some(action)
}

// src/ui/list_view.rs

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{preview, theme};
use crate::editor::Editor;

/// Level list on the left, preview on the right, button bar underneath.
pub fn render(frame: &mut Frame, area: Rect, editor: &Editor) {
    let [content, buttons] = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);
    let [list_area, preview_area] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).areas(content);

    render_levels(frame, list_area, editor);
    preview::render(frame, preview_area, editor);
    render_buttons(frame, buttons, editor);
}

fn render_levels(frame: &mut Frame, area: Rect, editor: &Editor) {
    let items: Vec<ListItem> = editor
        .levels()
        .iter()
        .map(|level| ListItem::new(format!("{:>3}  {}", level.id, level.name)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border())
                .title(Span::styled(" Level List ", theme::title())),
        )
        .highlight_style(theme::focused())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(editor.selected_index());
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_buttons(frame: &mut Frame, area: Rect, editor: &Editor) {
    let selected = editor.has_selection();
    let buttons = [
        ("[a]dd", true),
        ("[e]dit", selected),
        ("[d]elete", selected),
        ("[p]review", selected),
        ("[u]ndo", editor.can_undo()),
        ("[r]edo", editor.can_redo()),
        ("[q]uit", true),
    ];
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for (label, enabled) in buttons {
        spans.push(Span::styled(label, theme::button(enabled)));
        spans.push(Span::raw("  "));
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(theme::border()));
    frame.render_widget(bar, area);
}

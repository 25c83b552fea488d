// src/ui/level_view.rs

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;
use crate::editor::{Editor, FormField};

const LABEL_WIDTH: u16 = 8;

/// The "Level info" form: three text fields and OK/Cancel buttons.
pub fn render(frame: &mut Frame, area: Rect, editor: &Editor) {
    let form = editor.form();
    let title = match editor.current_id() {
        Some(id) => format!(" Level info (#{}) ", id),
        None => " Level info (new) ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(Span::styled(title, theme::title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(inner);

    for (row, field) in rows.iter().zip(FormField::text_fields()) {
        let value = form.value(*field).unwrap_or_default();
        let focused = form.focus == *field;
        let value_style = if focused { theme::focused() } else { Style::default() };
        let line = Line::from(vec![
            Span::raw(format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize)),
            Span::styled(value.to_string(), value_style),
        ]);
        frame.render_widget(Paragraph::new(line), *row);

        if focused {
            let len = value.chars().count() as u16;
            let x = (row.x + LABEL_WIDTH + len).min(row.right().saturating_sub(1));
            frame.set_cursor_position((x, row.y));
        }
    }

    let buttons = [FormField::Ok, FormField::Cancel]
        .into_iter()
        .flat_map(|button| {
            let style = if form.focus == button {
                theme::focused()
            } else {
                theme::button(true)
            };
            [
                Span::styled(format!("[ {} ]", button.label()), style),
                Span::raw("   "),
            ]
        })
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(Line::from(buttons)), rows[4]);
}

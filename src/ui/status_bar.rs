// src/ui/status_bar.rs

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::editor::{Editor, Screen};

pub fn render(frame: &mut Frame, area: Rect, editor: &Editor) {
    let [message, summary] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            editor.status_message.as_str(),
            Style::default().fg(Color::Gray),
        )),
        message,
    );

    let screen = match editor.screen() {
        Screen::List => "list",
        Screen::Edit => "edit",
    };
    let count = editor.levels().len();
    let noun = if count == 1 { "level" } else { "levels" };
    frame.render_widget(
        Paragraph::new(format!("{} {} | {}", count, noun, screen))
            .alignment(ratatui::layout::Alignment::Right),
        summary,
    );
}

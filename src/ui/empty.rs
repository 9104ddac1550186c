//! Empty state rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::colors;

/// Draws an empty list message with a hint below it.
pub fn draw_empty_state(frame: &mut Frame, area: Rect, title: &str, hint: &str) {
    let content = vec![
        Line::from(Span::styled(title, Style::default().fg(colors::MUTED).bold())),
        Line::from(Span::styled(hint, Style::default().fg(colors::MUTED))),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

//! Help line rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, AppMode};

use super::colors;

/// Draws the key hints for the current mode.
pub fn draw_help_line(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands(app);

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Returns the commands available in the current state.
fn get_commands(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.mode {
        AppMode::Selecting if app.is_filtering() => vec![
            ("tab", "apply filter"),
            ("esc", "cancel"),
            ("enter", "brew"),
            ("q", "quit"),
        ],
        AppMode::Selecting => vec![
            ("↑/k", "up"),
            ("↓/j", "down"),
            ("/", "filter"),
            ("enter", "brew"),
            ("q", "quit"),
        ],
        AppMode::Brewing => vec![("q", "quit")],
    }
}

//! Countdown and completion rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
    Frame,
};

use crate::app::{App, Brew};
use crate::timer::format_remaining;

use super::colors;
use super::status::draw_help_line;

/// Draws the brewing view inside `area` (already inset by the timer margin).
pub fn draw_brewing(frame: &mut Frame, area: Rect, app: &App, brew: &Brew) {
    let expired = brew.timer.is_expired();
    let lines = if expired {
        done_lines(brew)
    } else {
        countdown_lines(brew)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(lines.len() as u16), // Text
            Constraint::Length(1),                  // Progress bar
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(area);

    frame.render_widget(Paragraph::new(lines), chunks[0]);
    draw_progress_bar(frame, chunks[1], app, brew);
    draw_help_line(frame, chunks[3], app);
}

fn countdown_lines(brew: &Brew) -> Vec<Line<'static>> {
    let mut remaining = vec![Span::styled(
        format_remaining(brew.timer.remaining()),
        Style::default().bold(),
    )];
    if let Some(ready_at) = brew.ready_at() {
        remaining.push(Span::styled(
            format!("  ready at {}", ready_at.format("%H:%M:%S")),
            Style::default().fg(colors::MUTED),
        ));
    }

    vec![
        Line::from(vec![
            Span::styled("Brewing ", Style::default().fg(colors::MUTED)),
            Span::styled(brew.preset.name, Style::default().fg(colors::PRIMARY).bold()),
            Span::styled(
                format!(" · {}", brew.preset.description),
                Style::default().fg(colors::MUTED),
            ),
        ]),
        Line::from(""),
        Line::from(remaining),
        Line::from(""),
    ]
}

fn done_lines(brew: &Brew) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("Your {} is done brewing.", brew.preset.name),
            Style::default().fg(colors::SUCCESS).bold(),
        )),
        Line::from(""),
    ]
}

/// Draws the bar `app.bar_width` cells wide, indented by one column.
///
/// The filled part turns from the brewing color to the success color once
/// the timer is done.
fn draw_progress_bar(frame: &mut Frame, area: Rect, app: &App, brew: &Brew) {
    // The gauge leaves one column before the bar for its (empty) label
    let width = app.bar_width.saturating_add(1).min(area.width);
    let bar_area = Rect { width, ..area };

    let filled = if brew.timer.is_expired() {
        colors::SUCCESS
    } else {
        colors::SECONDARY
    };

    let gauge = LineGauge::default()
        .ratio(brew.fraction())
        .label("")
        .line_set(symbols::line::THICK)
        .filled_style(Style::default().fg(filled))
        .unfilled_style(Style::default().fg(colors::TRACK));

    frame.render_widget(gauge, bar_area);
}

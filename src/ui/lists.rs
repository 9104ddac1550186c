//! Preset list rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::constants::list::{FOOTER_ROWS, HEADER_ROWS};
use crate::selection::FilterState;

use super::colors;
use super::empty::draw_empty_state;
use super::status::draw_help_line;

/// List title.
const TITLE: &str = "Tea Timer Options";

/// Block cursor character for the filter prompt.
const BLOCK_CURSOR: &str = "█";

/// Filter prompt indicator.
const INPUT_INDICATOR: &str = "› ";

/// Draws the preset list inside `area` (already inset by the list margin).
pub fn draw_preset_list(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS), // Title + filter line
            Constraint::Min(0),              // Items
            Constraint::Length(FOOTER_ROWS), // Pagination + help
        ])
        .split(area);

    draw_title(frame, chunks[0], app);
    draw_items(frame, chunks[1], app);

    let footer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(chunks[2]);
    draw_pagination(frame, footer[0], app);
    draw_help_line(frame, footer[1], app);
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let selection = &app.selection;

    let title = Line::from(Span::styled(
        format!(" {TITLE} "),
        Style::default().fg(Color::White).bg(colors::ACCENT).bold(),
    ));

    let second = match selection.filter_state() {
        FilterState::Unfiltered => Line::from(""),
        FilterState::Filtering => Line::from(vec![
            Span::styled(INPUT_INDICATOR, Style::default().fg(colors::MUTED)),
            Span::styled("Filter: ", Style::default().fg(colors::PRIMARY)),
            Span::styled(selection.filter(), Style::default().fg(Color::White)),
            Span::styled(BLOCK_CURSOR, Style::default().fg(colors::PRIMARY)),
        ]),
        FilterState::Applied => Line::from(vec![
            Span::styled(
                format!("“{}” ", selection.filter()),
                Style::default().fg(colors::PRIMARY),
            ),
            Span::styled(
                format!("{} matching", selection.visible().len()),
                Style::default().fg(colors::MUTED),
            ),
        ]),
    };

    frame.render_widget(Paragraph::new(vec![title, second]), area);
}

fn draw_items(frame: &mut Frame, area: Rect, app: &App) {
    let selection = &app.selection;
    let visible = selection.visible();

    if visible.is_empty() {
        let hint = if selection.filter().is_empty() {
            ""
        } else {
            "Press esc to clear the filter"
        };
        draw_empty_state(frame, area, "No items.", hint);
        return;
    }

    let (start, end) = selection.page_bounds();
    let items: Vec<ListItem> = visible[start..end]
        .iter()
        .enumerate()
        .map(|(offset, preset)| {
            let is_selected = start + offset == selection.cursor();

            let (marker, title_style, desc_style) = if is_selected {
                (
                    Span::styled("│ ", Style::default().fg(colors::PRIMARY)),
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(colors::PRIMARY),
                )
            } else {
                (
                    Span::raw("  "),
                    Style::default().fg(Color::White),
                    Style::default().fg(colors::MUTED),
                )
            };

            ListItem::new(Text::from(vec![
                Line::from(vec![
                    marker.clone(),
                    Span::styled(preset.title().to_string(), title_style),
                ]),
                Line::from(vec![
                    marker,
                    Span::styled(preset.description().to_string(), desc_style),
                ]),
                Line::from(""),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), area);
}

fn draw_pagination(frame: &mut Frame, area: Rect, app: &App) {
    let pages = app.selection.total_pages();
    if pages <= 1 {
        return;
    }

    let current = app.selection.page();
    let dots: Vec<Span> = (0..pages)
        .map(|page| {
            if page == current {
                Span::styled("•", Style::default().fg(Color::White))
            } else {
                Span::styled("•", Style::default().fg(colors::TRACK))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(dots)), area);
}

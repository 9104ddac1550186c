//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Drawing only reads the [`App`], so rendering the same state twice
//! produces the same frame.

mod brewing;
mod colors;
mod empty;
mod lists;
mod status;

use ratatui::Frame;

use crate::app::{App, AppMode};
use crate::config::LayoutConfig;

use brewing::draw_brewing;
use lists::draw_preset_list;

/// Main draw function - dispatches to the renderer for the current mode.
pub fn draw(frame: &mut Frame, app: &App, config: &LayoutConfig) {
    match (app.mode, &app.brew) {
        (AppMode::Brewing, Some(brew)) => {
            let area = frame.area().inner(config.timer_margin);
            draw_brewing(frame, area, app, brew);
        }
        _ => {
            // Nothing to lay out until the list knows the terminal size
            if app.selection.size().is_none() {
                return;
            }
            let area = frame.area().inner(config.list_margin);
            draw_preset_list(frame, area, app);
        }
    }
}

//! Layout and environment configuration.
//!
//! Margins and bar limits live in a plain value passed to the renderer and
//! the selection list, so separate instances (tests included) never share
//! mutable style state.

use std::env;

use ratatui::layout::Margin;

use crate::constants::{self, progress};

/// Layout settings shared by the selection list and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Margin around the preset list.
    pub list_margin: Margin,
    /// Margin around the brewing view.
    pub timer_margin: Margin,
    /// Padding used when sizing the progress bar.
    pub bar_padding: u16,
    /// Upper bound for the progress bar width.
    pub bar_max_width: u16,
    /// Lower bound for the progress bar width.
    pub bar_min_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            list_margin: Margin::new(2, 1),
            timer_margin: Margin::new(1, 1),
            bar_padding: progress::PADDING,
            bar_max_width: progress::MAX_WIDTH,
            bar_min_width: progress::MIN_WIDTH,
        }
    }
}

/// Returns the (horizontal, vertical) cells consumed by a margin.
pub fn frame_size(margin: Margin) -> (u16, u16) {
    (margin.horizontal * 2, margin.vertical * 2)
}

/// Debug logging settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugSettings {
    /// Whether the debug log file should be written.
    pub enabled: bool,
    /// Optional filter directive overriding the default.
    pub filter: Option<String>,
}

impl DebugSettings {
    /// Reads `DEBUG` and `TEATIMER_LOG`.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var(constants::DEBUG_ENV).ok(),
            env::var(constants::LOG_FILTER_ENV).ok(),
        )
    }

    fn from_values(debug: Option<String>, filter: Option<String>) -> Self {
        Self {
            enabled: debug.is_some_and(|v| !v.is_empty()),
            filter: filter.filter(|f| !f.trim().is_empty()),
        }
    }
}

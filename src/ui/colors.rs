//! Color theme definitions for the UI.
//!
//! All color constants are defined here for consistency and easy theme changes.

use ratatui::style::Color;

/// Primary accent color (used for titles, highlights)
pub const PRIMARY: Color = Color::Rgb(56, 189, 248); // Bright cyan
/// Secondary accent color (used for the filled part of the bar)
pub const SECONDARY: Color = Color::Rgb(52, 211, 153); // Bright emerald
/// Muted text color
pub const MUTED: Color = Color::Rgb(148, 163, 184); // Brighter gray
/// Unfilled part of the progress bar
pub const TRACK: Color = Color::Rgb(71, 85, 105); // Slate
/// Success color
pub const SUCCESS: Color = Color::Rgb(74, 222, 128); // Bright green
/// Key highlight color (for keyboard shortcuts)
pub const KEY: Color = Color::Rgb(244, 114, 182); // Bright pink
/// Accent color for the list title
pub const ACCENT: Color = Color::Rgb(192, 132, 252); // Bright purple

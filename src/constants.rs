//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Event polling timeout for the terminal reader - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Interval between timer ticks while brewing.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Environment variable that enables the debug log when non-empty.
pub const DEBUG_ENV: &str = "DEBUG";

/// Environment variable overriding the debug log filter.
pub const LOG_FILTER_ENV: &str = "TEATIMER_LOG";

/// Debug log file name, created in the working directory.
pub const DEBUG_LOG_FILE: &str = "debug.log";

/// Progress bar sizing.
pub mod progress {
    /// Padding on each side of the bar.
    pub const PADDING: u16 = 2;
    /// Extra columns reserved next to the bar.
    pub const RESERVED: u16 = 4;
    /// Widest the bar will grow on large terminals.
    pub const MAX_WIDTH: u16 = 80;
    /// Narrowest usable bar.
    pub const MIN_WIDTH: u16 = 10;
}

/// Rows used by the list view outside the items themselves.
pub mod list {
    /// Title row plus the filter/spacer row.
    pub const HEADER_ROWS: u16 = 2;
    /// Pagination row plus help row.
    pub const FOOTER_ROWS: u16 = 2;
    /// Rows per item: title, description, spacer.
    pub const ITEM_HEIGHT: u16 = 3;
}

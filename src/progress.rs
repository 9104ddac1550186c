//! Progress fraction and bar sizing.
//!
//! The fraction is always recomputed from the timer rather than accumulated,
//! so it cannot drift from `elapsed / total`.

use crate::config::LayoutConfig;
use crate::constants::progress::RESERVED;
use crate::timer::TimerState;

/// Completed share of the timer in `[0.0, 1.0]`.
pub fn fraction(timer: &TimerState) -> f64 {
    let total = timer.total().as_secs_f64();
    if total <= 0.0 {
        return 1.0;
    }
    if timer.is_expired() {
        return 1.0;
    }
    (timer.elapsed().as_secs_f64() / total).clamp(0.0, 1.0)
}

/// Bar width for a terminal `term_width` columns wide.
pub fn bar_width(term_width: u16, config: &LayoutConfig) -> u16 {
    term_width
        .saturating_sub(config.bar_padding * 2 + RESERVED)
        .clamp(config.bar_min_width, config.bar_max_width.max(config.bar_min_width))
}

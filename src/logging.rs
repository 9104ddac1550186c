//! Debug logging using tracing.
//!
//! The TUI owns the terminal, so logs only ever go to a file. The file is
//! written when `DEBUG` is set:
//!
//! ```bash
//! DEBUG=1 teatimer
//! DEBUG=1 TEATIMER_LOG=trace teatimer
//! ```

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::DebugSettings;
use crate::constants::DEBUG_LOG_FILE;

/// Default filter when `TEATIMER_LOG` is unset.
const DEFAULT_FILTER: &str = "teatimer=debug";

/// Initialize the logging subsystem.
///
/// Does nothing unless debug logging is enabled; tracing macros are then
/// no-ops.
pub fn init(settings: &DebugSettings) -> Result<()> {
    if !settings.enabled {
        return Ok(());
    }

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(DEBUG_LOG_FILE)
        .build(".")
        .with_context(|| format!("Failed to open {DEBUG_LOG_FILE}"))?;

    let env_filter = settings
        .filter
        .as_deref()
        .map(EnvFilter::try_new)
        .transpose()
        .context("Invalid log filter")?
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("teatimer starting, debug log enabled");

    Ok(())
}

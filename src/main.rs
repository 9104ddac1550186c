//! Tea Timer TUI
//!
//! Pick a tea from the list and watch it brew.
//! Run with: teatimer [-l|--list]

mod app;
mod catalog;
mod config;
mod constants;
mod event;
mod logging;
mod progress;
mod selection;
mod timer;
mod ui;

use std::env;

use anyhow::{Context, Result};

use crate::app::{App, Command};
use crate::catalog::list_presets;
use crate::config::{DebugSettings, LayoutConfig};
use crate::event::{Event, EventHandler};

/// Parses command line arguments.
///
/// Supports:
/// - `-l` or `--list` to print the presets and exit
/// - `-h` or `--help` to show usage
fn parse_args() {
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-l" | "--list" => {
                for preset in list_presets() {
                    println!("{:<12} {}", preset.name, preset.description);
                }
                std::process::exit(0);
            }
            "-h" | "--help" => {
                println!("teatimer - brew timer for the terminal");
                println!();
                println!("Usage: teatimer [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -l, --list  Print the available teas and exit");
                println!("  -h, --help  Show this help message");
                println!();
                println!("Set DEBUG=1 to write a debug log to ./debug.log");
                std::process::exit(0);
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }
}

/// Entry point for the application.
#[tokio::main]
async fn main() -> Result<()> {
    parse_args();

    logging::init(&DebugSettings::from_env())?;

    // Initialize the terminal
    let terminal = ratatui::init();

    let app = App::new(list_presets(), LayoutConfig::default());

    let result = run_app(terminal, app).await;

    // Restore the terminal to its original state
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!("fatal: {e:#}");
    }
    result
}

/// Main application loop.
///
/// 1. Draw the current state
/// 2. Wait for the next event (key, resize or tick)
/// 3. Dispatch it and carry out the returned commands
/// 4. Repeat until the user quits
async fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    let mut events = EventHandler::new();
    events.spawn_terminal_reader();

    // The list needs a size before the first frame
    let size = terminal.size().context("Failed to read terminal size")?;
    app.dispatch(Event::Resize(size.width, size.height));

    loop {
        terminal
            .draw(|frame| ui::draw(frame, &app, app.config()))
            .context("Failed to draw UI")?;

        let Some(event) = events.next(app.is_filtering()).await? else {
            continue;
        };

        for command in app.dispatch(event) {
            match command {
                Command::Quit => return Ok(()),
                Command::StartTicks { id, interval } => events.start_ticks(id, interval),
                Command::StopTicks { id } => {
                    tracing::debug!("Timer {id} finished");
                    events.stop_ticks();
                }
            }
        }
    }
}

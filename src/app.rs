//! Application state and logic.
//!
//! [`App`] is the state machine behind the screen. It starts in
//! [`AppMode::Selecting`], switches once to [`AppMode::Brewing`] when a preset
//! is confirmed, and never goes back. Each call to [`App::dispatch`] handles
//! one event to completion and returns the commands the main loop must carry
//! out.

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::catalog::Preset;
use crate::config::LayoutConfig;
use crate::constants::TICK_INTERVAL;
use crate::event::{Action, Event};
use crate::progress;
use crate::selection::SelectionSurface;
use crate::timer::{TimerId, TimerState};

/// Which surface is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Picking a preset from the list
    Selecting,
    /// Counting down the chosen preset
    Brewing,
}

/// Follow-up work for the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the event loop
    Quit,
    /// Begin delivering ticks for this timer
    StartTicks { id: TimerId, interval: Duration },
    /// Stop delivering ticks for this timer
    StopTicks { id: TimerId },
}

/// The preset being brewed and its countdown.
#[derive(Debug, Clone)]
pub struct Brew {
    pub preset: Preset,
    pub timer: TimerState,
    /// Wall-clock time the brew started
    pub started_at: DateTime<Local>,
}

impl Brew {
    /// Completed share of the brew.
    pub fn fraction(&self) -> f64 {
        progress::fraction(&self.timer)
    }

    /// Wall-clock time the brew finishes, if it can be represented.
    pub fn ready_at(&self) -> Option<DateTime<Local>> {
        chrono::Duration::from_std(self.timer.total())
            .ok()
            .and_then(|total| self.started_at.checked_add_signed(total))
    }
}

/// Main application state.
pub struct App {
    /// Current mode
    pub mode: AppMode,
    /// Preset list (active while selecting)
    pub selection: SelectionSurface,
    /// Brew in progress (set once brewing starts)
    pub brew: Option<Brew>,
    /// Progress bar width for the current terminal
    pub bar_width: u16,
    /// Has the user asked to quit?
    pub quitting: bool,
    config: LayoutConfig,
    tick_interval: Duration,
    next_timer_id: TimerId,
}

impl App {
    /// Creates a new application over the given presets.
    pub fn new(presets: &[Preset], config: LayoutConfig) -> Self {
        Self {
            mode: AppMode::Selecting,
            selection: SelectionSurface::new(presets, config.list_margin),
            brew: None,
            bar_width: config.bar_min_width,
            quitting: false,
            config,
            tick_interval: TICK_INTERVAL,
            next_timer_id: TimerId(1),
        }
    }

    /// Handles one event and returns the follow-up commands.
    pub fn dispatch(&mut self, event: Event) -> Vec<Command> {
        if self.quitting {
            return Vec::new();
        }

        match event {
            Event::Tick(id) => self.on_tick(id),
            Event::Resize(width, height) => {
                self.resize(width, height);
                Vec::new()
            }
            Event::Key(Action::Quit) => {
                tracing::info!("Quit requested");
                self.quitting = true;
                vec![Command::Quit]
            }
            Event::Key(Action::Confirm) => self.confirm(),
            Event::Key(action) => {
                if self.mode == AppMode::Selecting {
                    self.selection.handle_action(&action);
                }
                Vec::new()
            }
        }
    }

    /// Whether keys should be read as text for the filter prompt.
    pub fn is_filtering(&self) -> bool {
        self.mode == AppMode::Selecting && self.selection.is_filtering()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.selection.resize(width, height);
        self.bar_width = progress::bar_width(width, &self.config);
    }

    fn confirm(&mut self) -> Vec<Command> {
        if self.mode == AppMode::Brewing {
            tracing::debug!("Confirm ignored while brewing");
            return Vec::new();
        }

        let Some(preset) = self.selection.current_selection().copied() else {
            tracing::warn!("Confirm ignored: no preset highlighted");
            return Vec::new();
        };

        let id = self.next_timer_id;
        let timer = match TimerState::start(id, preset.duration(), self.tick_interval) {
            Ok(timer) => timer,
            Err(e) => {
                tracing::warn!("Could not start timer for {:?}: {e}", preset.name);
                return Vec::new();
            }
        };
        self.next_timer_id = id.next();

        tracing::info!(
            "{:?} selected, timer duration of {} minutes",
            preset.name,
            preset.duration_minutes
        );

        let interval = timer.interval();
        self.brew = Some(Brew {
            preset,
            timer,
            started_at: Local::now(),
        });
        self.mode = AppMode::Brewing;

        vec![Command::StartTicks { id, interval }]
    }

    fn on_tick(&mut self, id: TimerId) -> Vec<Command> {
        let Some(brew) = self.brew.as_mut() else {
            tracing::debug!("Tick {id} ignored: no timer");
            return Vec::new();
        };

        if !brew.timer.on_tick(id) {
            if brew.timer.is_running() {
                tracing::debug!("Stale tick {id} ignored by timer {}", brew.timer.id());
            } else {
                tracing::debug!("Tick {id} ignored: timer stopped");
            }
            return Vec::new();
        }

        if brew.timer.is_expired() {
            tracing::info!("{} is done brewing", brew.preset.name);
            return vec![Command::StopTicks { id }];
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::list_presets;
    use crate::event::key_to_input_action;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    const TWO_TEAS: &[Preset] = &[
        Preset::new("Black Tea", "95C for 5 minutes", 5),
        Preset::new("Green Tea", "75C for 3 minutes", 3),
    ];

    fn sized_app(presets: &[Preset]) -> App {
        let mut app = App::new(presets, LayoutConfig::default());
        app.dispatch(Event::Resize(80, 24));
        app
    }

    fn key(action: Action) -> Event {
        Event::Key(action)
    }

    fn start_green_tea(app: &mut App) -> TimerId {
        app.dispatch(key(Action::Down));
        let commands = app.dispatch(key(Action::Confirm));
        match commands.as_slice() {
            [Command::StartTicks { id, interval }] => {
                assert_eq!(*interval, Duration::from_secs(1));
                *id
            }
            other => panic!("expected StartTicks, got {other:?}"),
        }
    }

    #[test]
    fn test_starts_selecting() {
        let app = App::new(list_presets(), LayoutConfig::default());
        assert_eq!(app.mode, AppMode::Selecting);
        assert!(app.brew.is_none());
    }

    #[test]
    fn test_green_tea_brews_to_completion() {
        let mut app = sized_app(TWO_TEAS);
        let id = start_green_tea(&mut app);

        assert_eq!(app.mode, AppMode::Brewing);
        let brew = app.brew.as_ref().unwrap();
        assert_eq!(brew.preset.name, "Green Tea");
        assert_eq!(brew.timer.total(), Duration::from_secs(180));

        let mut stop_commands = Vec::new();
        for _ in 0..180 {
            stop_commands.extend(app.dispatch(Event::Tick(id)));
        }

        let brew = app.brew.as_ref().unwrap();
        assert!(brew.timer.is_expired());
        assert_eq!(brew.fraction(), 1.0);
        assert_eq!(stop_commands, vec![Command::StopTicks { id }]);
    }

    #[test]
    fn test_confirm_while_brewing_is_ignored() {
        let mut app = sized_app(TWO_TEAS);
        let id = start_green_tea(&mut app);
        for _ in 0..30 {
            app.dispatch(Event::Tick(id));
        }
        let before = app.brew.as_ref().unwrap().timer.clone();

        app.dispatch(key(Action::Up));
        let commands = app.dispatch(key(Action::Confirm));

        assert!(commands.is_empty());
        let brew = app.brew.as_ref().unwrap();
        assert_eq!(brew.timer, before);
        assert_eq!(brew.preset.name, "Green Tea");
    }

    #[test]
    fn test_quit_from_selecting() {
        let mut app = sized_app(TWO_TEAS);
        assert_eq!(app.dispatch(key(Action::Quit)), vec![Command::Quit]);
        assert!(app.quitting);
    }

    #[test]
    fn test_quit_from_brewing_stops_dispatch() {
        let mut app = sized_app(TWO_TEAS);
        let id = start_green_tea(&mut app);
        assert_eq!(app.dispatch(key(Action::Quit)), vec![Command::Quit]);

        let before = app.brew.as_ref().unwrap().timer.clone();
        assert!(app.dispatch(Event::Tick(id)).is_empty());
        assert_eq!(app.brew.as_ref().unwrap().timer, before);
    }

    #[test]
    fn test_confirm_with_empty_catalog_stays_selecting() {
        let mut app = sized_app(&[]);
        assert!(app.dispatch(key(Action::Confirm)).is_empty());
        assert_eq!(app.mode, AppMode::Selecting);
        assert!(app.brew.is_none());
    }

    #[test]
    fn test_confirm_before_resize_is_ignored() {
        let mut app = App::new(TWO_TEAS, LayoutConfig::default());
        assert!(app.dispatch(key(Action::Confirm)).is_empty());
        assert_eq!(app.mode, AppMode::Selecting);
    }

    #[test]
    fn test_resize_before_selection_sizes_list() {
        let mut app = App::new(TWO_TEAS, LayoutConfig::default());
        app.dispatch(Event::Resize(40, 20));
        assert_eq!(app.selection.size(), Some((36, 18)));
        assert_eq!(app.bar_width, 32);
    }

    #[test]
    fn test_resize_while_brewing_updates_list_and_bar() {
        let mut app = sized_app(TWO_TEAS);
        start_green_tea(&mut app);
        app.dispatch(Event::Resize(200, 50));
        assert_eq!(app.selection.size(), Some((196, 48)));
        assert_eq!(app.bar_width, 80);
    }

    #[test]
    fn test_list_keys_ignored_while_brewing() {
        let mut app = sized_app(TWO_TEAS);
        start_green_tea(&mut app);
        let cursor = app.selection.cursor();
        app.dispatch(key(Action::Down));
        app.dispatch(key(Action::Filter));
        assert_eq!(app.selection.cursor(), cursor);
        assert!(!app.is_filtering());
    }

    #[test]
    fn test_ticks_ignored_while_selecting() {
        let mut app = sized_app(TWO_TEAS);
        assert!(app.dispatch(Event::Tick(TimerId(1))).is_empty());
        assert_eq!(app.mode, AppMode::Selecting);
    }

    #[test]
    fn test_stale_tick_does_not_advance_timer() {
        let mut app = sized_app(TWO_TEAS);
        let id = start_green_tea(&mut app);
        app.dispatch(Event::Tick(TimerId(id.0 + 7)));
        assert_eq!(
            app.brew.as_ref().unwrap().timer.elapsed(),
            Duration::ZERO
        );
    }

    #[test]
    fn test_progress_non_decreasing_through_brew() {
        let mut app = sized_app(TWO_TEAS);
        let id = start_green_tea(&mut app);
        let mut last = 0.0;
        for _ in 0..200 {
            app.dispatch(Event::Tick(id));
            let fraction = app.brew.as_ref().unwrap().fraction();
            assert!(fraction >= last && fraction <= 1.0);
            last = fraction;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_filter_prompt_enables_input_mode() {
        let mut app = sized_app(list_presets());
        app.dispatch(key(Action::Filter));
        assert!(app.is_filtering());
        app.dispatch(key(Action::Char('w')));
        app.dispatch(key(Action::Submit));
        assert!(!app.is_filtering());
        assert_eq!(
            app.selection.current_selection().map(|p| p.name),
            Some("White Tea")
        );
    }

    #[test]
    fn test_ready_at_adds_duration() {
        let mut app = sized_app(TWO_TEAS);
        start_green_tea(&mut app);
        let brew = app.brew.as_ref().unwrap();
        assert_eq!(
            brew.ready_at().map(|t| t - brew.started_at),
            Some(chrono::Duration::seconds(180))
        );
    }

    #[test]
    fn test_ready_at_none_when_out_of_range() {
        let brew = Brew {
            preset: TWO_TEAS[0],
            timer: TimerState::start(TimerId(1), Duration::MAX, TICK_INTERVAL).unwrap(),
            started_at: Local::now(),
        };
        assert!(brew.ready_at().is_none());
    }

    fn input_key(code: KeyCode) -> Event {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        Event::Key(key_to_input_action(key).expect("mapped key"))
    }

    #[test]
    fn test_q_quits_while_filter_prompt_open() {
        let mut app = sized_app(list_presets());
        app.dispatch(key(Action::Filter));
        assert!(app.is_filtering());

        assert_eq!(app.dispatch(input_key(KeyCode::Char('q'))), vec![Command::Quit]);
        assert!(app.quitting);
    }

    #[test]
    fn test_enter_while_filtering_brews_filtered_match() {
        let mut app = sized_app(list_presets());
        app.dispatch(key(Action::Filter));
        app.dispatch(input_key(KeyCode::Char('o')));
        app.dispatch(input_key(KeyCode::Char('o')));

        let commands = app.dispatch(input_key(KeyCode::Enter));
        assert!(matches!(commands.as_slice(), [Command::StartTicks { .. }]));
        assert_eq!(app.mode, AppMode::Brewing);
        assert_eq!(app.brew.as_ref().unwrap().preset.name, "Oolong Tea");
        assert!(!app.is_filtering());
    }
}

//! Event handling module.
//!
//! Terminal input is read with crossterm on a blocking task and timer ticks
//! come from a tokio interval. Both feed one channel, so the main loop sees a
//! single ordered stream of [`Event`]s.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::constants::POLL_TIMEOUT;
use crate::timer::TimerId;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Start brewing the highlighted preset
    Confirm,
    /// Move selection up
    Up,
    /// Move selection down
    Down,
    /// Move to the top of the list
    Top,
    /// Move to the bottom of the list
    Bottom,
    /// Show the previous page
    PrevPage,
    /// Show the next page
    NextPage,
    /// Open the filter prompt
    Filter,
    /// Clear the filter / leave the prompt
    Back,
    /// Accept the filter prompt
    Submit,
    /// Character input (for the filter prompt)
    Char(char),
    /// Backspace key (for the filter prompt)
    Backspace,
}

/// Everything the application reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A mapped key press
    Key(Action),
    /// The terminal was resized to (width, height)
    Resize(u16, u16),
    /// One tick for the timer with this id
    Tick(TimerId),
}

/// Raw messages sent by the producers.
#[derive(Debug)]
enum Message {
    Terminal(TermEvent),
    ReadFailed(String),
    Tick(TimerId),
}

/// Handles terminal events and converts them to application events.
pub struct EventHandler {
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
    ticker: Option<JoinHandle<()>>,
}

impl EventHandler {
    /// Creates a handler without any producers running.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            ticker: None,
        }
    }

    /// Starts reading terminal events on a blocking task.
    ///
    /// The task stops once the handler is dropped.
    pub fn spawn_terminal_reader(&self) {
        let tx = self.tx.clone();
        tokio::task::spawn_blocking(move || {
            while !tx.is_closed() {
                let next = match event::poll(POLL_TIMEOUT) {
                    Ok(true) => event::read().map(Some),
                    Ok(false) => Ok(None),
                    Err(e) => Err(e),
                };
                match next {
                    Ok(Some(ev)) => {
                        if tx.send(Message::Terminal(ev)).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        let _ = tx.send(Message::ReadFailed(e.to_string()));
                        break;
                    }
                }
            }
        });
    }

    /// Starts delivering `Tick(id)` every `interval`, replacing any previous ticker.
    pub fn start_ticks(&mut self, id: TimerId, interval: Duration) {
        self.stop_ticks();

        let tx = self.tx.clone();
        self.ticker = Some(tokio::spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + interval, interval);
            // Keep the tick count exact even if the loop falls behind.
            ticks.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                ticks.tick().await;
                if tx.send(Message::Tick(id)).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!("Tick source started for timer {id} every {interval:?}");
    }

    /// Stops the running ticker, if any.
    pub fn stop_ticks(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
            tracing::debug!("Tick source stopped");
        }
    }

    /// Waits for the next event.
    ///
    /// `input_mode` selects the text-entry key mapping used while the filter
    /// prompt is open. Returns Ok(None) for input that maps to nothing.
    pub async fn next(&mut self, input_mode: bool) -> Result<Option<Event>> {
        let message = self
            .rx
            .recv()
            .await
            .context("Event channel closed")?;

        match message {
            Message::Tick(id) => Ok(Some(Event::Tick(id))),
            Message::ReadFailed(e) => anyhow::bail!("Failed to read terminal event: {e}"),
            Message::Terminal(TermEvent::Resize(width, height)) => {
                Ok(Some(Event::Resize(width, height)))
            }
            Message::Terminal(TermEvent::Key(key_event)) => {
                // Only process key press events (not releases)
                if key_event.kind != KeyEventKind::Press {
                    return Ok(None);
                }
                let action = if input_mode {
                    key_to_input_action(key_event)
                } else {
                    key_to_action(key_event)
                };
                Ok(action.map(Event::Key))
            }
            Message::Terminal(_) => Ok(None),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop_ticks();
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a key event to a filter-prompt action.
///
/// Quit and confirm keys keep their meaning while the prompt is open.
pub(crate) fn key_to_input_action(key: KeyEvent) -> Option<Action> {
    if is_ctrl_c(&key) {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
        KeyCode::Tab => Some(Action::Submit),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Char(c) => Some(Action::Char(c)),
        _ => None,
    }
}

/// Converts a key event to an application action.
pub(crate) fn key_to_action(key: KeyEvent) -> Option<Action> {
    if is_ctrl_c(&key) {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => Some(Action::PrevPage),
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => Some(Action::NextPage),

        // Filtering
        KeyCode::Char('/') => Some(Action::Filter),
        KeyCode::Esc => Some(Action::Back),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_quit_actions() {
        assert_eq!(
            key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_confirm_keys() {
        assert_eq!(
            key_to_action(make_key_event(KeyCode::Enter)),
            Some(Action::Confirm)
        );
        assert_eq!(
            key_to_action(make_key_event(KeyCode::Char(' '))),
            Some(Action::Confirm)
        );
    }

    #[test]
    fn test_vim_navigation_keys() {
        assert_eq!(
            key_to_action(make_key_event(KeyCode::Char('j'))),
            Some(Action::Down)
        );
        assert_eq!(
            key_to_action(make_key_event(KeyCode::Char('k'))),
            Some(Action::Up)
        );
        assert_eq!(
            key_to_action(make_key_event(KeyCode::Char('g'))),
            Some(Action::Top)
        );
        assert_eq!(
            key_to_action(make_key_event(KeyCode::Char('G'))),
            Some(Action::Bottom)
        );
    }

    #[test]
    fn test_page_keys() {
        assert_eq!(
            key_to_action(make_key_event(KeyCode::Right)),
            Some(Action::NextPage)
        );
        assert_eq!(
            key_to_action(make_key_event(KeyCode::PageUp)),
            Some(Action::PrevPage)
        );
    }

    #[test]
    fn test_filter_keys() {
        assert_eq!(
            key_to_action(make_key_event(KeyCode::Char('/'))),
            Some(Action::Filter)
        );
        assert_eq!(key_to_action(make_key_event(KeyCode::Esc)), Some(Action::Back));
    }

    #[test]
    fn test_unknown_key_returns_none() {
        assert_eq!(key_to_action(make_key_event(KeyCode::Char('z'))), None);
        assert_eq!(key_to_action(make_key_event(KeyCode::F(12))), None);
    }

    #[test]
    fn test_input_mode_keeps_quit_and_confirm_keys() {
        assert_eq!(
            key_to_input_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            key_to_input_action(make_key_event(KeyCode::Char(' '))),
            Some(Action::Confirm)
        );
        assert_eq!(
            key_to_input_action(make_key_event(KeyCode::Enter)),
            Some(Action::Confirm)
        );
        assert_eq!(
            key_to_input_action(make_key_event(KeyCode::Tab)),
            Some(Action::Submit)
        );
        assert_eq!(
            key_to_input_action(make_key_event(KeyCode::Char('g'))),
            Some(Action::Char('g'))
        );
        assert_eq!(
            key_to_input_action(make_key_event(KeyCode::Backspace)),
            Some(Action::Backspace)
        );
    }

    #[test]
    fn test_input_mode_ctrl_c_quits() {
        assert_eq!(
            key_to_input_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_carry_timer_id() {
        let mut handler = EventHandler::new();
        handler.start_ticks(TimerId(4), Duration::from_secs(1));

        for _ in 0..3 {
            let event = handler.next(false).await.unwrap();
            assert_eq!(event, Some(Event::Tick(TimerId(4))));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_before_first_interval() {
        let mut handler = EventHandler::new();
        handler.start_ticks(TimerId(1), Duration::from_secs(1));

        let early = time::timeout(Duration::from_millis(900), handler.next(false)).await;
        assert!(early.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ticks_silences_source() {
        let mut handler = EventHandler::new();
        handler.start_ticks(TimerId(1), Duration::from_secs(1));
        handler.stop_ticks();

        let result = time::timeout(Duration::from_secs(5), handler.next(false)).await;
        assert!(result.is_err());
    }
}

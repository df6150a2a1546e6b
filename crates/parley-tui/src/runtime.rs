//! Async runtime
//!
//! Event loop that drives terminal I/O and coordinates between the App
//! state machine and the effect runner. Uses `tokio::select!` to interleave
//! terminal events, completed network effects, and the periodic tick on one
//! single-threaded queue; `App::handle` runs to completion per event, so no
//! two updates are ever concurrent.

use std::io::{self, stdout};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use parley_api::ApiClient;
use parley_app::{App, AppAction, AppEvent, KeyInput};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::ui;

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// What woke the event loop. Produced inside `select!` so the handler can
/// touch `self` after the polled futures are gone.
enum Wake {
    /// A terminal event arrived.
    Terminal(Event),
    /// A completed effect re-entered the queue.
    Completion(AppEvent),
    /// The periodic tick fired.
    Tick,
    /// The terminal event stream ended.
    Closed,
}

/// Async runtime for the terminal client.
///
/// Owns the terminal, the [`App`] state machine, the API client handed to
/// spawned effect tasks, and the completion channel those tasks answer on.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
    api: ApiClient,
    completions_tx: mpsc::UnboundedSender<AppEvent>,
    completions_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl Runtime {
    /// Create a runtime talking to the backend at `base_url`.
    ///
    /// Puts the terminal into raw mode and the alternate screen; both are
    /// restored on drop.
    pub fn new(base_url: String) -> Result<Self, RuntimeError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            app: App::new(),
            api: ApiClient::new(base_url),
            completions_tx,
            completions_rx,
        })
    }

    /// Run the main event loop until a quit action.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        self.render()?;

        let mut event_stream = EventStream::new();
        let mut tick_interval = tokio::time::interval(std::time::Duration::from_millis(100));

        loop {
            let wake = tokio::select! {
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => Wake::Terminal(event),
                    Some(Err(e)) => return Err(RuntimeError::Io(e)),
                    None => Wake::Closed,
                },

                maybe_event = self.completions_rx.recv() => {
                    maybe_event.map_or(Wake::Closed, Wake::Completion)
                },

                _ = tick_interval.tick() => Wake::Tick,
            };

            let should_quit = match wake {
                Wake::Terminal(event) => self.handle_terminal_event(event)?,
                Wake::Completion(event) => self.process_event(event)?,
                Wake::Tick => self.process_event(AppEvent::Tick)?,
                Wake::Closed => true,
            };

            if should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle a terminal event and return whether to quit.
    fn handle_terminal_event(&mut self, event: Event) -> Result<bool, RuntimeError> {
        let app_event = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match convert_key(key) {
                Some(key) => AppEvent::Key(key),
                None => return Ok(false),
            },
            Event::Resize(cols, rows) => AppEvent::Resize(cols, rows),
            _ => return Ok(false),
        };

        self.process_event(app_event)
    }

    /// Feed one event through the state machine and execute its actions.
    fn process_event(&mut self, event: AppEvent) -> Result<bool, RuntimeError> {
        let actions = self.app.handle(event);
        self.process_actions(actions)
    }

    /// Execute actions returned by the app. Returns true if should quit.
    ///
    /// Uses iterative processing so `Dispatch` events re-enter the update
    /// loop without recursion, in the order they were produced.
    fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, RuntimeError> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.render()?,
                    AppAction::Quit => return Ok(true),
                    AppAction::Dispatch(event) => {
                        pending_actions.extend(self.app.handle(event));
                    },
                    AppAction::SubmitLogin { email, password } => {
                        self.spawn_login(email, password);
                    },
                    AppAction::FetchUsers { token } => self.spawn_list_users(token),
                    AppAction::FetchUser { token, id } => self.spawn_get_user(token, id),
                }
            }
        }
        Ok(false)
    }

    /// Resolve a login submission off the main loop.
    fn spawn_login(&self, email: String, password: String) {
        let api = self.api.clone();
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let event = match api.login(&email, &password).await {
                Ok(session) => AppEvent::LoginSucceeded { session },
                Err(e) => AppEvent::LoginFailed { message: e.to_string() },
            };
            deliver(&completions, event);
        });
    }

    /// Resolve a list-users fetch off the main loop.
    fn spawn_list_users(&self, token: String) {
        let api = self.api.clone();
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = api.list_users(&token).await.map_err(|e| e.to_string());
            deliver(&completions, AppEvent::UsersLoaded { result });
        });
    }

    /// Resolve a user-by-id fetch off the main loop.
    fn spawn_get_user(&self, token: String, id: String) {
        let api = self.api.clone();
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = api.get_user(&token, &id).await.map_err(|e| e.to_string());
            deliver(&completions, AppEvent::UserLoaded { result });
        });
    }

    /// Render the active view.
    fn render(&mut self) -> Result<(), RuntimeError> {
        self.terminal.draw(|frame| {
            ui::render(frame, &self.app);
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Send a completion, logging if the loop is already gone.
fn deliver(completions: &mpsc::UnboundedSender<AppEvent>, event: AppEvent) {
    if completions.send(event).is_err() {
        tracing::warn!("event loop closed before a completion could be delivered");
    }
}

/// Convert a crossterm key event to the terminal-agnostic key abstraction.
fn convert_key(key: KeyEvent) -> Option<KeyInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyInput::CtrlC),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Tab => Some(KeyInput::Tab),
        KeyCode::BackTab => Some(KeyInput::BackTab),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}

//! Application orchestrator.
//!
//! Owns the active [`View`] and is the sole authority on transitions. Every
//! incoming event is either a cross-cutting signal handled here (login
//! success, collected input, the interrupt key) or is forwarded verbatim to
//! the active sub-model. Sub-models never reach into each other; they talk
//! only through signals re-dispatched by this orchestrator.

use crate::{
    action::AppAction,
    event::AppEvent,
    input::KeyInput,
    login::LoginForm,
    menu::{CHOICE_USER_BY_ID, RequestMenu},
    prompt::{InputPrompt, identity},
};

/// The active sub-model. Exactly one at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Credential entry.
    Login,
    /// Request menu, available after the first successful login.
    RequestMenu,
    /// Single-value collection prompt.
    InputPrompt,
}

/// Application state machine.
///
/// Pure state machine that processes events and produces actions; no I/O.
/// Sub-states of inactive views are retained so returning to a view resumes
/// where it left off, except the prompt, which is built fresh on entry and
/// discarded on exit.
pub struct App {
    view: View,
    login: LoginForm,
    menu: Option<RequestMenu>,
    prompt: Option<InputPrompt>,
}

impl App {
    /// Create the app on the login view.
    pub fn new() -> Self {
        Self { view: View::Login, login: LoginForm::new(), menu: None, prompt: None }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            // Global interrupt: lands on the menu from any view.
            AppEvent::LoginSucceeded { session } => {
                tracing::debug!("login succeeded; entering request menu");
                self.menu = Some(RequestMenu::new(session));
                self.prompt = None;
                self.view = View::RequestMenu;
                vec![AppAction::Render]
            },

            AppEvent::InputCollected { value } => self.finish_prompt(value),

            AppEvent::Key(KeyInput::CtrlC) => vec![AppAction::Quit],
            AppEvent::Key(key) => self.handle_key(key),

            // A redraw covers every view; resize carries no per-model state.
            AppEvent::Resize(_, _) => vec![AppAction::Render],

            other => self.dispatch(other),
        }
    }

    /// Key routing. View-local transition guards run before generic
    /// dispatch; otherwise the menu would toggle the choice instead.
    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        if self.view == View::RequestMenu
            && key == KeyInput::Enter
            && self.menu.as_ref().is_some_and(|menu| menu.cursor() == CHOICE_USER_BY_ID)
        {
            tracing::debug!("entering input prompt");
            self.prompt = Some(InputPrompt::new("User ID", identity));
            self.view = View::InputPrompt;
            return vec![AppAction::Render];
        }

        self.dispatch(AppEvent::Key(key))
    }

    /// Leave the prompt with its collected value and resume the menu.
    fn finish_prompt(&mut self, value: String) -> Vec<AppAction> {
        if self.view != View::InputPrompt {
            return vec![];
        }

        self.prompt = None;
        self.view = View::RequestMenu;

        let mut actions =
            self.menu.as_mut().map_or_else(Vec::new, |menu| menu.collect_user_id(value));
        actions.push(AppAction::Render);
        actions
    }

    /// Forward an event verbatim to the active sub-model. Events with no
    /// meaning for that sub-model are no-ops by contract.
    fn dispatch(&mut self, event: AppEvent) -> Vec<AppAction> {
        match self.view {
            View::Login => self.login.update(event),
            View::RequestMenu => {
                self.menu.as_mut().map_or_else(Vec::new, |menu| menu.update(event))
            },
            View::InputPrompt => {
                self.prompt.as_mut().map_or_else(Vec::new, |prompt| prompt.update(event))
            },
        }
    }

    /// The active view.
    pub fn view(&self) -> View {
        self.view
    }

    /// The login sub-model. Always present.
    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    /// The request menu. `None` until the first successful login.
    pub fn menu(&self) -> Option<&RequestMenu> {
        self.menu.as_ref()
    }

    /// The input prompt. `None` unless it is the active view.
    pub fn prompt(&self) -> Option<&InputPrompt> {
        self.prompt.as_ref()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

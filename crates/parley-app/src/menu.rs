//! Request-menu sub-model.
//!
//! A fixed list of requests against the backend. Toggling a choice on runs
//! its bound effect; local echoes (tokens, current user) are computed
//! synchronously in update, network fetches are returned as deferred actions
//! and their completions memoized when they arrive. Render stays a pure
//! projection of this state.

use std::collections::HashSet;

use parley_api::{Session, User};

use crate::{action::AppAction, event::AppEvent, input::KeyInput};

/// Choice index: echo the access token.
pub const CHOICE_TOKEN: usize = 0;
/// Choice index: echo the refresh token.
pub const CHOICE_REFRESH_TOKEN: usize = 1;
/// Choice index: fetch and list all users.
pub const CHOICE_ALL_USERS: usize = 2;
/// Choice index: echo the authenticated user snapshot.
pub const CHOICE_CURRENT_USER: usize = 3;
/// Choice index: collect a user id, then fetch that user. Entering the
/// collection prompt is a view transition owned by the orchestrator.
pub const CHOICE_USER_BY_ID: usize = 4;

const CHOICES: [&str; 5] =
    ["API Token", "API Refresh Token", "All Users", "This User", "User By ID"];

/// Selectable request list seeded with the session from a successful login.
#[derive(Debug, Clone)]
pub struct RequestMenu {
    cursor: usize,
    selected: HashSet<usize>,
    session: Session,
    /// At most one memoized response, tagged with the owning choice index.
    /// Selecting another choice replaces it; untoggling the owner clears it.
    response: Option<(usize, String)>,
}

impl RequestMenu {
    /// Create the menu with nothing selected and the cursor on top.
    pub fn new(session: Session) -> Self {
        Self { cursor: 0, selected: HashSet::new(), session, response: None }
    }

    /// Process an event and return actions.
    pub fn update(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::UsersLoaded { result } => {
                let text = match result {
                    Ok(users) => format_users(&users),
                    Err(message) => message,
                };
                self.memoize(CHOICE_ALL_USERS, text)
            },
            AppEvent::UserLoaded { result } => {
                let text = match result {
                    Ok(user) => format_user(&user),
                    Err(message) => message,
                };
                self.memoize(CHOICE_USER_BY_ID, text)
            },
            _ => vec![],
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Esc | KeyInput::Char('q') => vec![AppAction::Quit],
            KeyInput::Up | KeyInput::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Down | KeyInput::Char('j') => {
                // Clamped, no wraparound.
                if self.cursor + 1 < CHOICES.len() {
                    self.cursor += 1;
                }
                vec![AppAction::Render]
            },
            KeyInput::Enter | KeyInput::Char(' ') => self.toggle(self.cursor),
            _ => vec![],
        }
    }

    /// Flip membership of `index` in the selection set.
    ///
    /// Untoggling clears the memoized response if this index owns it.
    /// Toggling on runs the bound effect: local echoes synchronously,
    /// network fetches as deferred actions.
    fn toggle(&mut self, index: usize) -> Vec<AppAction> {
        if self.selected.remove(&index) {
            if self.response.as_ref().is_some_and(|(owner, _)| *owner == index) {
                self.response = None;
            }
            return vec![AppAction::Render];
        }

        self.selected.insert(index);
        match index {
            CHOICE_TOKEN => self.echo(index, self.session.token.clone()),
            CHOICE_REFRESH_TOKEN => self.echo(index, self.session.refresh_token.clone()),
            CHOICE_CURRENT_USER => self.echo(
                index,
                format!("Current User: {} ({})", self.session.user.name, self.session.user.id),
            ),
            CHOICE_ALL_USERS => {
                self.response = Some((index, "Fetching all users...".to_owned()));
                vec![
                    AppAction::FetchUsers { token: self.session.token.clone() },
                    AppAction::Render,
                ]
            },
            // The collected id arrives later through the orchestrator; a bare
            // toggle has nothing to fetch yet.
            _ => vec![AppAction::Render],
        }
    }

    fn echo(&mut self, index: usize, text: String) -> Vec<AppAction> {
        self.response = Some((index, text));
        vec![AppAction::Render]
    }

    /// Store a completed fetch, unless its choice was untoggled while the
    /// request was in flight.
    fn memoize(&mut self, index: usize, text: String) -> Vec<AppAction> {
        if !self.selected.contains(&index) {
            tracing::debug!(index, "dropping completion for untoggled choice");
            return vec![];
        }
        self.echo(index, text)
    }

    /// Accept the value collected by the input prompt and fetch that user.
    pub fn collect_user_id(&mut self, id: String) -> Vec<AppAction> {
        self.selected.insert(CHOICE_USER_BY_ID);
        self.response = Some((CHOICE_USER_BY_ID, format!("Fetching user {id}...")));
        vec![
            AppAction::FetchUser { token: self.session.token.clone(), id },
            AppAction::Render,
        ]
    }

    /// The fixed choice labels, in display order.
    pub fn choices(&self) -> &'static [&'static str] {
        &CHOICES
    }

    /// Cursor index. Always within `[0, choices().len())`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether `index` is currently selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// The memoized response text. `None` if nothing is selected or the
    /// owning choice was untoggled.
    pub fn response(&self) -> Option<&str> {
        self.response.as_ref().map(|(_, text)| text.as_str())
    }

    /// The authenticated user this menu was seeded with.
    pub fn user(&self) -> &User {
        &self.session.user
    }
}

fn format_users(users: &[User]) -> String {
    let mut lines = vec!["All Users:".to_owned()];
    for user in users {
        lines.push(format!("- {} ({})", user.name, user.id));
    }
    lines.join("\n")
}

fn format_user(user: &User) -> String {
    let presence = if user.online { "online" } else { "offline" };
    format!("{} <{}> ({}) [{presence}]", user.name, user.email, user.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(id: &str, name: &str) -> User {
        User {
            id: id.to_owned(),
            name: name.to_owned(),
            email: format!("{name}@example.com"),
            password: String::new(),
            online: false,
            channels: None,
            created: 0,
            updated: 0,
        }
    }

    fn test_session() -> Session {
        Session {
            token: "access.jwt".to_owned(),
            refresh_token: "refresh.jwt".to_owned(),
            user: test_user("u-1", "demo"),
        }
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut menu = RequestMenu::new(test_session());

        menu.update(AppEvent::Key(KeyInput::Up));
        assert_eq!(menu.cursor(), 0);

        for _ in 0..10 {
            menu.update(AppEvent::Key(KeyInput::Down));
        }
        assert_eq!(menu.cursor(), CHOICES.len() - 1);
    }

    #[test]
    fn token_choice_echoes_synchronously() {
        let mut menu = RequestMenu::new(test_session());

        let actions = menu.update(AppEvent::Key(KeyInput::Enter));
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(menu.response(), Some("access.jwt"));
        assert!(menu.is_selected(CHOICE_TOKEN));
    }

    #[test]
    fn double_toggle_restores_selection_and_clears_memo() {
        let mut menu = RequestMenu::new(test_session());

        menu.update(AppEvent::Key(KeyInput::Enter));
        menu.update(AppEvent::Key(KeyInput::Enter));

        assert!(!menu.is_selected(CHOICE_TOKEN));
        assert_eq!(menu.response(), None);
    }

    #[test]
    fn all_users_is_a_deferred_fetch() {
        let mut menu = RequestMenu::new(test_session());
        for _ in 0..CHOICE_ALL_USERS {
            menu.update(AppEvent::Key(KeyInput::Down));
        }

        let actions = menu.update(AppEvent::Key(KeyInput::Char(' ')));
        assert_eq!(
            actions,
            vec![
                AppAction::FetchUsers { token: "access.jwt".to_owned() },
                AppAction::Render,
            ]
        );

        let users = vec![test_user("u-1", "demo"), test_user("u-2", "other")];
        menu.update(AppEvent::UsersLoaded { result: Ok(users) });
        assert_eq!(menu.response(), Some("All Users:\n- demo (u-1)\n- other (u-2)"));
    }

    #[test]
    fn fetch_error_fills_buffer_and_keeps_selection() {
        let mut menu = RequestMenu::new(test_session());
        for _ in 0..CHOICE_ALL_USERS {
            menu.update(AppEvent::Key(KeyInput::Down));
        }
        menu.update(AppEvent::Key(KeyInput::Enter));

        menu.update(AppEvent::UsersLoaded {
            result: Err("unexpected status 401 Unauthorized: token expired".to_owned()),
        });

        assert!(menu.is_selected(CHOICE_ALL_USERS));
        assert!(menu.response().is_some_and(|r| r.contains("401")));
    }

    #[test]
    fn late_completion_for_untoggled_choice_is_dropped() {
        let mut menu = RequestMenu::new(test_session());
        for _ in 0..CHOICE_ALL_USERS {
            menu.update(AppEvent::Key(KeyInput::Down));
        }
        menu.update(AppEvent::Key(KeyInput::Enter));
        menu.update(AppEvent::Key(KeyInput::Enter));

        let actions = menu.update(AppEvent::UsersLoaded { result: Ok(vec![]) });
        assert!(actions.is_empty());
        assert_eq!(menu.response(), None);
    }

    #[test]
    fn collected_id_triggers_user_fetch() {
        let mut menu = RequestMenu::new(test_session());

        let actions = menu.collect_user_id("u-9".to_owned());
        assert_eq!(
            actions,
            vec![
                AppAction::FetchUser { token: "access.jwt".to_owned(), id: "u-9".to_owned() },
                AppAction::Render,
            ]
        );
        assert!(menu.is_selected(CHOICE_USER_BY_ID));

        menu.update(AppEvent::UserLoaded { result: Ok(test_user("u-9", "nine")) });
        assert_eq!(menu.response(), Some("nine <nine@example.com> (u-9) [offline]"));
    }

    #[test]
    fn selecting_a_new_choice_replaces_the_response() {
        let mut menu = RequestMenu::new(test_session());

        menu.update(AppEvent::Key(KeyInput::Enter));
        assert_eq!(menu.response(), Some("access.jwt"));

        menu.update(AppEvent::Key(KeyInput::Down));
        menu.update(AppEvent::Key(KeyInput::Enter));
        assert_eq!(menu.response(), Some("refresh.jwt"));
    }

    #[test]
    fn quit_keys_quit() {
        let mut menu = RequestMenu::new(test_session());
        assert_eq!(menu.update(AppEvent::Key(KeyInput::Char('q'))), vec![AppAction::Quit]);
        assert_eq!(menu.update(AppEvent::Key(KeyInput::Esc)), vec![AppAction::Quit]);
    }
}

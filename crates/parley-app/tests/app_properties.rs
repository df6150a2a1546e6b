//! Property-based tests for the client state machines.
//!
//! Invariants are checked under arbitrary event sequences, covering
//! execution paths the scripted tests never take.

use parley_api::{Session, User};
use parley_app::{App, AppEvent, KeyInput, RequestMenu, View};
use proptest::prelude::*;

fn test_session() -> Session {
    Session {
        token: "access.jwt".to_owned(),
        refresh_token: "refresh.jwt".to_owned(),
        user: User {
            id: "u-1".to_owned(),
            name: "demo".to_owned(),
            email: "demo@example.com".to_owned(),
            password: String::new(),
            online: false,
            channels: None,
            created: 0,
            updated: 0,
        },
    }
}

/// Keys a user can plausibly mash on the menu.
fn menu_key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        Just(KeyInput::Up),
        Just(KeyInput::Down),
        Just(KeyInput::Char('k')),
        Just(KeyInput::Char('j')),
        Just(KeyInput::Enter),
        Just(KeyInput::Char(' ')),
        Just(KeyInput::Left),
        Just(KeyInput::Home),
    ]
}

/// Arbitrary events, including completions arriving at odd times.
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        4 => menu_key_strategy().prop_map(AppEvent::Key),
        2 => proptest::char::range('a', 'z').prop_map(|c| AppEvent::Key(KeyInput::Char(c))),
        1 => Just(AppEvent::Key(KeyInput::Tab)),
        1 => Just(AppEvent::Key(KeyInput::Enter)),
        1 => Just(AppEvent::Tick),
        1 => (1u16..200, 1u16..100).prop_map(|(c, r)| AppEvent::Resize(c, r)),
        1 => Just(AppEvent::LoginSucceeded { session: test_session() }),
        1 => Just(AppEvent::LoginFailed { message: "boom".to_owned() }),
        1 => Just(AppEvent::UsersLoaded { result: Err("boom".to_owned()) }),
        1 => Just(AppEvent::UsersLoaded { result: Ok(vec![]) }),
        1 => ".{0,8}".prop_map(|value| AppEvent::InputCollected { value }),
    ]
}

proptest! {
    #[test]
    fn prop_menu_cursor_stays_in_bounds(keys in prop::collection::vec(menu_key_strategy(), 0..80)) {
        let mut menu = RequestMenu::new(test_session());
        let upper = menu.choices().len();

        for key in keys {
            let _ = menu.update(AppEvent::Key(key));
            prop_assert!(menu.cursor() < upper);
        }
    }

    #[test]
    fn prop_double_toggle_restores_the_selection_set(
        setup in prop::collection::vec(menu_key_strategy(), 0..40),
        index in 0usize..5,
    ) {
        let mut menu = RequestMenu::new(test_session());
        for key in setup {
            let _ = menu.update(AppEvent::Key(key));
        }

        let before: Vec<bool> =
            (0..menu.choices().len()).map(|i| menu.is_selected(i)).collect();

        // Walk the cursor to the target index deterministically.
        for _ in 0..menu.choices().len() {
            let _ = menu.update(AppEvent::Key(KeyInput::Up));
        }
        for _ in 0..index {
            let _ = menu.update(AppEvent::Key(KeyInput::Down));
        }

        let _ = menu.update(AppEvent::Key(KeyInput::Enter));
        let _ = menu.update(AppEvent::Key(KeyInput::Enter));

        let after: Vec<bool> =
            (0..menu.choices().len()).map(|i| menu.is_selected(i)).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_toggle_off_clears_the_memo_it_owns(index in 0usize..5) {
        let mut menu = RequestMenu::new(test_session());
        for _ in 0..index {
            let _ = menu.update(AppEvent::Key(KeyInput::Down));
        }

        let _ = menu.update(AppEvent::Key(KeyInput::Enter));
        let _ = menu.update(AppEvent::Key(KeyInput::Enter));

        prop_assert!(!menu.is_selected(index));
        prop_assert!(menu.response().is_none());
    }

    #[test]
    fn prop_active_view_always_has_backing_state(
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut app = App::new();

        for event in events {
            let _ = app.handle(event);

            match app.view() {
                View::Login => {},
                View::RequestMenu => prop_assert!(app.menu().is_some()),
                View::InputPrompt => {
                    prop_assert!(app.prompt().is_some());
                    prop_assert!(app.menu().is_some());
                },
            }

            if let Some(menu) = app.menu() {
                prop_assert!(menu.cursor() < menu.choices().len());
            }
        }
    }
}

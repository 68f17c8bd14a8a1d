mod common;

use std::sync::Arc;

use common::{ada_profile_json, Harness, UnavailableStorage};
use qa_header::header::LeftSide;
use ratatui::layout::Rect;
use qa_header::session::{SessionError, SessionIntent};
use qa_header::storage::{KeyValueStore, PROFILE_KEY, THEME_KEY};
use qa_header::view::{ThemePreference, DARK_CLASS};

#[test]
fn activation_restores_session_from_storage() {
    let profile = ada_profile_json();
    let (harness, _) = Harness::with_memory(&[(PROFILE_KEY, profile.as_str())], 1280);
    let mut menu = harness.menu("home", "home");

    menu.activate().unwrap();

    let user = menu.current_user().unwrap();
    assert_eq!(user.first_name, "Ada");
    assert_eq!(
        menu.model().left,
        LeftSide::Greeting {
            name: "Ada Lovelace".to_string()
        }
    );
}

#[test]
fn guard_may_fire_before_bootstrap_completes() {
    let profile = ada_profile_json();
    let (harness, _) = Harness::with_memory(&[(PROFILE_KEY, profile.as_str())], 1280);
    let mut menu = harness.menu("home", "home");

    menu.activate().unwrap();

    // The guard saw the empty store first; the session arrives right after.
    assert_eq!(harness.navigator.routes(), vec!["/login"]);
    assert!(menu.current_user().is_some());
}

#[test]
fn bootstrap_overwrites_in_memory_session() {
    let (harness, _) = Harness::with_memory(&[], 1280);
    harness
        .session
        .dispatch(SessionIntent::SetCurrentUser(Some(
            qa_header::session::SessionPayload::new(common::ada()),
        )))
        .unwrap();
    let mut menu = harness.menu("home", "home");

    menu.activate().unwrap();

    assert!(menu.current_user().is_none());
    assert_eq!(harness.navigator.routes(), vec!["/login"]);
}

#[test]
fn guard_redirects_once_per_logout() {
    let profile = ada_profile_json();
    let (harness, _) = Harness::with_memory(&[(PROFILE_KEY, profile.as_str())], 1280);
    let mut menu = harness.menu("saved", "home");
    menu.activate().unwrap();
    assert_eq!(harness.navigator.routes().len(), 1);

    harness
        .session
        .dispatch(SessionIntent::SetCurrentUser(None))
        .unwrap();
    harness
        .session
        .dispatch(SessionIntent::SetCurrentUser(None))
        .unwrap();

    assert_eq!(harness.navigator.routes(), vec!["/login", "/login"]);
}

#[test]
fn malformed_profile_leaves_view_state_working() {
    let (harness, storage) = Harness::with_memory(&[(PROFILE_KEY, "{\"result\":")], 1024);
    let mut menu = harness.menu("home", "home");

    let err = menu.activate().unwrap_err();
    assert!(matches!(err, SessionError::MalformedProfile(_)));

    assert!(!menu.view_state().is_compact);
    harness.viewport.resize(600);
    assert!(menu.view_state().is_compact);

    assert_eq!(menu.toggle_theme(), ThemePreference::Dark);
    assert!(harness.root.contains(DARK_CLASS));
    assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn compact_boundary_is_inclusive() {
    let (harness, _) = Harness::with_memory(&[], 1024);
    let mut menu = harness.menu("ask", "home");
    menu.activate().unwrap();

    harness.viewport.resize(768);
    assert!(menu.view_state().is_compact);
    assert_eq!(
        menu.model().left,
        LeftSide::Back {
            target: "/".to_string(),
            title: Some("Ask"),
        }
    );

    harness.viewport.resize(769);
    assert!(!menu.view_state().is_compact);
    assert_eq!(
        menu.model().left,
        LeftSide::Back {
            target: "/".to_string(),
            title: Some("Ask Question"),
        }
    );
}

#[test]
fn double_toggle_restores_theme_and_storage() {
    let (harness, storage) = Harness::with_memory(&[(THEME_KEY, "light")], 1024);
    let mut menu = harness.menu("home", "home");
    menu.activate().unwrap();

    menu.toggle_theme();
    assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    menu.toggle_theme();

    assert_eq!(menu.view_state().theme, ThemePreference::Light);
    assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    assert!(!harness.root.contains(DARK_CLASS));
}

#[test]
fn repeated_activation_cycles_do_not_leak_listeners() {
    let (harness, _) = Harness::with_memory(&[], 1024);
    let mut menu = harness.menu("home", "home");

    for _ in 0..3 {
        menu.activate().unwrap();
        menu.activate().unwrap();
        assert_eq!(harness.viewport.listener_count(), 1);
        assert_eq!(harness.session.listener_count(), 1);

        menu.deactivate();
        assert_eq!(harness.viewport.listener_count(), 0);
        assert_eq!(harness.session.listener_count(), 0);
    }

    // Resizes after teardown no longer reach the controller.
    let before = menu.view_state();
    harness.viewport.resize(320);
    assert_eq!(menu.view_state(), before);
}

#[test]
fn dropping_the_menu_releases_subscriptions() {
    let (harness, _) = Harness::with_memory(&[], 1024);
    {
        let mut menu = harness.menu("home", "home");
        menu.activate().unwrap();
    }
    assert_eq!(harness.viewport.listener_count(), 0);
    assert_eq!(harness.session.listener_count(), 0);
}

#[test]
fn saving_a_question_requires_a_session() {
    let (harness, _) = Harness::with_memory(&[], 1024);
    let mut menu = harness.menu("thread", "home");
    menu.activate().unwrap();

    let err = menu.toggle_saved_question("q9").unwrap_err();
    assert!(matches!(err, SessionError::NoActiveSession));
}

#[test]
fn saving_and_unsaving_a_question() {
    let profile = ada_profile_json();
    let (harness, _) = Harness::with_memory(&[(PROFILE_KEY, profile.as_str())], 1024);
    let mut menu = harness.menu("thread", "home");
    menu.activate().unwrap();

    assert!(menu.toggle_saved_question("q9").unwrap());
    assert!(!menu.toggle_saved_question("q9").unwrap());
    assert!(menu.toggle_saved_question("q9").unwrap());
    assert_eq!(menu.current_user().unwrap().saved_questions, vec!["q1", "q9"]);
}

#[test]
fn unavailable_storage_degrades_to_defaults() {
    let harness = Harness::new(Arc::new(UnavailableStorage), 1024);
    let mut menu = harness.menu("home", "home");

    let err = menu.activate().unwrap_err();
    assert!(matches!(err, SessionError::Storage(_)));

    assert_eq!(menu.view_state().theme, ThemePreference::Light);
    assert_eq!(menu.toggle_theme(), ThemePreference::Dark);
    assert!(harness.root.contains(DARK_CLASS));
}

#[test]
fn wide_header_occupies_fixed_columns() {
    let (harness, _) = Harness::with_memory(&[], 1600);
    let mut menu = harness.menu("home", "home");
    menu.activate().unwrap();
    let area = Rect::new(0, 0, 200, 3);

    let wide = menu.render_area(&menu.model(), area);
    assert_eq!(wide.width, 45);

    harness.viewport.resize(600);
    let compact = menu.render_area(&menu.model(), area);
    assert_eq!(compact, area);
    assert!(wide.width < compact.width);
}

//! Tests for rotation key handling.

use super::*;
use crate::state::fixtures::{app_state, bundle};
use crate::state::{FocusedSurface, SurfaceControl};
use std::time::Duration;

fn loaded(n: usize, now: Instant) -> AppState {
    let mut state = app_state(None);
    state.apply_content(bundle("northfield", n), now);
    state
}

#[test]
fn next_moves_focused_surface_only() {
    let now = Instant::now();
    let mut state = loaded(4, now);

    assert!(handle_rotation_action(&mut state, KeyAction::Next, now));

    assert_eq!(state.images.engine().unwrap().current_index(), 1);
    assert_eq!(state.news.engine().unwrap().current_index(), 0);
}

#[test]
fn prev_from_first_wraps_to_last() {
    let now = Instant::now();
    let mut state = loaded(4, now);

    assert!(handle_rotation_action(&mut state, KeyAction::Prev, now));

    assert_eq!(state.images.engine().unwrap().current_index(), 3);
}

#[test]
fn second_request_during_transition_is_dropped() {
    let now = Instant::now();
    let mut state = loaded(4, now);

    assert!(handle_rotation_action(&mut state, KeyAction::Next, now));
    assert!(!handle_rotation_action(
        &mut state,
        KeyAction::Next,
        now + Duration::from_millis(100)
    ));
    assert_eq!(state.images.engine().unwrap().current_index(), 1);

    assert!(handle_rotation_action(
        &mut state,
        KeyAction::Next,
        now + Duration::from_millis(500)
    ));
    assert_eq!(state.images.engine().unwrap().current_index(), 2);
}

#[test]
fn ticker_has_no_transition_lock() {
    let now = Instant::now();
    let mut state = loaded(5, now);
    state.focus = FocusedSurface::Updates;

    assert!(handle_rotation_action(&mut state, KeyAction::Next, now));
    assert!(handle_rotation_action(&mut state, KeyAction::Next, now));

    assert_eq!(state.updates.engine().unwrap().current_index(), 2);
}

#[test]
fn jump_goes_to_page_and_rejects_out_of_range() {
    let now = Instant::now();
    let mut state = loaded(4, now);

    assert!(handle_rotation_action(&mut state, KeyAction::JumpTo(2), now));
    assert_eq!(state.images.engine().unwrap().current_index(), 2);

    let later = now + Duration::from_secs(1);
    assert!(!handle_rotation_action(&mut state, KeyAction::JumpTo(7), later));
    assert_eq!(state.images.engine().unwrap().current_index(), 2);
}

#[test]
fn toggle_pause_stops_auto_advance() {
    let start = Instant::now();
    let mut state = loaded(4, start);

    handle_rotation_action(&mut state, KeyAction::TogglePause, start);
    state.tick(start + Duration::from_secs(10));

    assert_eq!(state.images.engine().unwrap().current_index(), 0);
    assert!(state.images.engine().unwrap().is_user_paused());
}

#[test]
fn navigation_ignored_off_the_board() {
    let now = Instant::now();
    let mut state = loaded(4, now);
    state.open_article();

    assert!(!handle_rotation_action(&mut state, KeyAction::Next, now));
    assert_eq!(state.images.engine().unwrap().current_index(), 0);
}

#[test]
fn navigation_before_content_is_a_noop() {
    let now = Instant::now();
    let mut state = app_state(None);

    assert!(!handle_rotation_action(&mut state, KeyAction::Next, now));
    assert!(state.surface(FocusedSurface::Images).engine().is_none());
}

#[test]
fn single_item_collection_cannot_rotate() {
    let now = Instant::now();
    let mut state = loaded(1, now);

    assert!(!handle_rotation_action(&mut state, KeyAction::Next, now));
    assert!(!handle_rotation_action(&mut state, KeyAction::Prev, now));
}

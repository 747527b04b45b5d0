//! Rotation key handling.
//!
//! Routes rotation actions (next, previous, jump, pause) to the focused
//! surface. Dropped requests are logged at debug level and otherwise
//! ignored: navigation during a transition is never queued.

use super::app_state::{AppState, Screen};
use crate::model::key_action::KeyAction;
use crate::rotation::Navigation;
use std::time::Instant;
use tracing::debug;

/// Apply a rotation action to the focused surface.
///
/// Returns whether the focused surface's index moved. Non-rotation actions
/// and actions while off the board are ignored.
pub fn handle_rotation_action(state: &mut AppState, action: KeyAction, now: Instant) -> bool {
    if state.screen != Screen::Board {
        return false;
    }
    let focus = state.focus;
    let surface = state.surface_mut(focus);

    let outcome = match action {
        KeyAction::Next => surface.advance(now),
        KeyAction::Prev => surface.retreat(now),
        KeyAction::JumpTo(index) => surface.jump_to(index, now),
        KeyAction::TogglePause => {
            surface.toggle_pause(now);
            return false;
        }
        _ => return false,
    };

    match outcome {
        Some(Navigation::Moved { from, to }) => {
            debug!(?focus, from, to, "manual navigation");
            true
        }
        Some(Navigation::Refused(reason)) => {
            debug!(?focus, ?reason, ?action, "navigation dropped");
            false
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "rotation_handler_tests.rs"]
mod tests;

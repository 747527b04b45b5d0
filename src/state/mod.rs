//! Board state machine (pure).
//!
//! All state transitions are testable without a terminal.

pub mod app_state;
pub mod form_editor;
pub mod rotation_handler;
pub mod surface;

// Re-export for convenience
pub use app_state::{AppState, FocusedSurface, Missing, Screen, StatusMessage};
pub use form_editor::FormEditor;
pub use rotation_handler::handle_rotation_action;
pub use surface::{marquee_strip, LoadState, Surface, SurfaceControl};

#[cfg(test)]
pub(crate) mod fixtures;

//! Rotation engine shared by every rotating surface.
//!
//! Pure core: no terminal, no threads, no clock reads. Every operation takes
//! the current [`std::time::Instant`] from the caller so the shell decides
//! when time passes and tests can step it deterministically.

pub mod engine;
pub mod timer;
pub mod viewport;

pub use engine::{Navigation, Refusal, RotationConfig, RotationEngine, RotationMode, RotationState};
pub use timer::TimerToken;
pub use viewport::{viewport_width, Breakpoints, ViewPolicy};

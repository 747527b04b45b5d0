//! TUI rendering and terminal management (impure shell)

mod article;
mod carousel;
pub mod constants;
mod form;
mod help;
mod layout;
mod marquee;
mod styles;
mod ticker;

pub use carousel::page_dots;
pub use help::render_help_overlay;
pub use layout::{calculate_board_areas, render_layout, BoardAreas};
pub use marquee::marquee_line;
pub use styles::{BoardStyles, ColorConfig};
pub use ticker::ticker_line;

use crate::config::keybindings::KeyBindings;
use crate::model::{page_metadata, KeyAction, Theme};
use crate::source::ContentFetcher;
use crate::state::{handle_rotation_action, AppState, Screen};
use crate::submission::{submit_application, ApplicationSink};
use constants::MAX_POLL_INTERVAL;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Collaborators the board talks to besides the terminal.
pub struct BoardServices {
    /// Background content loading.
    pub fetcher: ContentFetcher,
    /// Where admission applications go.
    pub sink: Arc<dyn ApplicationSink>,
    /// Key to action mapping.
    pub key_bindings: KeyBindings,
    /// Colour output.
    pub color: ColorConfig,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    fetcher: ContentFetcher,
    sink: Arc<dyn ApplicationSink>,
    key_bindings: KeyBindings,
    color: ColorConfig,
    /// Regions of the last rendered frame (for mouse hit-testing)
    last_areas: Option<BoardAreas>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture,
    /// then starts loading the selected institution's content.
    pub fn new(app_state: AppState, services: BoardServices) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, app_state, services))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks in `event::poll` until
    /// the earliest surface deadline, capped so background content is
    /// picked up promptly.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        self.sync_title()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());
            let mut dirty = false;

            if event::poll(timeout)? {
                let now = Instant::now();
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key, now) {
                            return Ok(()); // User quit
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse, now);
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height, now);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            dirty |= self.update(Instant::now());
            if dirty {
                self.draw()?;
                self.sync_title()?;
            }
        }
    }

    /// Set the terminal window title from the institution's metadata.
    fn sync_title(&mut self) -> Result<(), TuiError> {
        let title = self.window_title();
        self.terminal.backend_mut().execute(SetTitle(title))?;
        Ok(())
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        mut app_state: AppState,
        services: BoardServices,
    ) -> Self {
        let columns = match terminal.size() {
            Ok(size) if size.width > 0 => size.width,
            _ => 80, // Fallback for errors OR zero width
        };
        app_state.resize(columns, Instant::now());

        let BoardServices {
            mut fetcher,
            sink,
            key_bindings,
            color,
        } = services;
        if let Some(code) = app_state.institution() {
            fetcher.request(code.clone());
        }

        Self {
            terminal,
            app_state,
            fetcher,
            sink,
            key_bindings,
            color,
            last_areas: None,
        }
    }

    /// How long the event loop may block.
    fn poll_timeout(&self, now: Instant) -> Duration {
        self.app_state
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(MAX_POLL_INTERVAL)
            .min(MAX_POLL_INTERVAL)
    }

    /// Apply arrived content and fire due timers. True if anything changed.
    fn update(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(bundle) = self.fetcher.poll() {
            changed |= self.app_state.apply_content(bundle, now);
        }
        changed |= self.app_state.tick(now);
        changed
    }

    /// Title for the terminal window.
    fn window_title(&self) -> String {
        self.app_state
            .institution()
            .and_then(|code| page_metadata(self.app_state.registry(), code.as_str()))
            .map(|metadata| metadata.title)
            .unwrap_or_else(|| "campusboard".to_string())
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // The form captures every key while open
        if self.app_state.form.is_some() {
            self.handle_form_key(key);
            return false;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false, // Unknown key, ignore
        };

        // Help overlay blocks everything except closing it and quitting
        if self.app_state.help_visible
            && !matches!(
                action,
                KeyAction::ToggleHelp | KeyAction::Back | KeyAction::Quit
            )
        {
            return false;
        }

        match action {
            KeyAction::Quit => return true,

            KeyAction::Next | KeyAction::Prev | KeyAction::JumpTo(_) | KeyAction::TogglePause => {
                handle_rotation_action(&mut self.app_state, action, now);
            }

            KeyAction::CycleFocus => self.app_state.cycle_focus(),
            KeyAction::OpenArticle => self.app_state.open_article(),
            KeyAction::Back => self.app_state.back(),
            KeyAction::ToggleHelp => self.app_state.toggle_help(),
            KeyAction::OpenAdmissions => self.app_state.open_form(),

            KeyAction::NextInstitution | KeyAction::PrevInstitution => {
                let forward = action == KeyAction::NextInstitution;
                let code = self.app_state.switch_institution(forward);
                self.fetcher.request(code);
            }
            KeyAction::Reload => {
                if let Some(code) = self.app_state.reload() {
                    info!(institution = %code, "reloading content");
                    self.fetcher.request(code);
                }
            }
        }

        false
    }

    /// Keys while the admissions form is open.
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => return self.app_state.back(),
            KeyCode::Enter => return self.submit_form(),
            _ => {}
        }
        let Some(editor) = self.app_state.form.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Tab => editor.next_field(),
            KeyCode::BackTab => editor.prev_field(),
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                editor.insert_char(ch);
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let (Some(editor), Some(code)) = (&self.app_state.form, self.app_state.institution())
        else {
            return;
        };
        let result = submit_application(
            self.sink.as_ref(),
            code.as_str(),
            editor.form(),
            chrono::Utc::now(),
        );
        self.app_state.finish_submission(result);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let interactive = self.app_state.screen == Screen::Board
            && self.app_state.form.is_none()
            && !self.app_state.help_visible;
        let target = if interactive {
            self.last_areas
                .and_then(|areas| areas.surface_at(mouse.column, mouse.row))
        } else {
            None
        };

        match mouse.kind {
            MouseEventKind::Moved => self.app_state.set_hover(target, now),
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                if let Some(which) = target {
                    self.app_state.focus = which;
                    let action = if mouse.kind == MouseEventKind::ScrollDown {
                        KeyAction::Next
                    } else {
                        KeyAction::Prev
                    };
                    handle_rotation_action(&mut self.app_state, action, now);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(which) = target {
                    debug!(?which, "focus by click");
                    self.app_state.focus = which;
                }
            }
            _ => {}
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16, now: Instant) {
        debug!("Handling resize to {}x{}", width, height);
        let width = if width > 0 { width } else { 80 };
        self.app_state.resize(width, now);
    }

    fn theme(&self) -> Theme {
        self.app_state
            .profile()
            .map(|profile| profile.theme)
            .unwrap_or_default()
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width.max(1), size.height);
        self.last_areas = Some(calculate_board_areas(frame_area));

        let styles = BoardStyles::new(self.theme(), self.color);
        let state = &self.app_state;
        self.terminal.draw(|frame| {
            render_layout(frame, state, &styles);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(any(test, feature = "bench-internals"))]
#[allow(dead_code)] // Not all helpers used in every context (tests vs benchmarks)
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        services: BoardServices,
    ) -> Self {
        Self::with_terminal(terminal, app_state, services)
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent, now: Instant) {
        self.handle_mouse(mouse, now)
    }

    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16, now: Instant) {
        self.handle_resize(width, height, now)
    }

    pub(crate) fn update_test(&mut self, now: Instant) -> bool {
        self.update(now)
    }

    pub(crate) fn poll_timeout_test(&self, now: Instant) -> Duration {
        self.poll_timeout(now)
    }

    pub(crate) fn window_title_test(&self) -> String {
        self.window_title()
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

// Public wrappers for benchmarks when bench-internals feature is enabled.
// These delegate to the pub(crate) test helpers above.

#[cfg(feature = "bench-internals")]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for benchmarking without touching the real terminal.
    pub fn new_for_bench(
        terminal: Terminal<B>,
        app_state: AppState,
        services: BoardServices,
    ) -> Self {
        Self::new_for_test(terminal, app_state, services)
    }

    /// Run timers and apply fetched content at `now`.
    pub fn update_bench(&mut self, now: Instant) -> bool {
        self.update_test(now)
    }

    /// Render a single frame.
    pub fn render_bench(&mut self) -> Result<(), TuiError> {
        self.render_test()
    }

    /// Read-only view of the board state.
    pub fn app_state_bench(&self) -> &AppState {
        self.app_state()
    }
}

#[cfg(test)]
impl TuiApp<ratatui::backend::TestBackend> {
    pub(crate) fn resize_backend_test(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
    }
}

/// Initialize and run the board until the user quits.
///
/// The terminal is restored even when the loop fails.
pub fn run_board(app_state: AppState, services: BoardServices) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, services)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    drop(app);

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

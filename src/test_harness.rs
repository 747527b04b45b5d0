//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.
//!
//! Time is virtual: the harness keeps its own clock and passes it to every
//! handler, so timer-driven behaviour is deterministic.

#![allow(dead_code)] // Not all helpers used by every test

use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::model::{InstitutionCode, SubmitError};
use crate::source::{ContentBundle, ContentFetcher, MemoryLoader};
use crate::state::fixtures::{bundle, registry};
use crate::state::AppState;
use crate::submission::{ApplicationRecord, ApplicationSink};
use crate::view::{BoardServices, ColorConfig, TuiApp};
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Sink that keeps submitted records in memory, or fails on demand.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    records: Mutex<Vec<ApplicationRecord>>,
    failing: bool,
}

impl RecordingSink {
    pub(crate) fn failing() -> Self {
        Self {
            records: Mutex::default(),
            failing: true,
        }
    }

    pub(crate) fn records(&self) -> Vec<ApplicationRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl ApplicationSink for RecordingSink {
    fn submit(&self, record: &ApplicationRecord, _: DateTime<Utc>) -> Result<(), SubmitError> {
        if self.failing {
            return Err(SubmitError::Rejected("sink offline".to_string()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Builder for [`AcceptanceTestHarness`].
pub(crate) struct HarnessBuilder {
    width: u16,
    height: u16,
    requested: Option<String>,
    article: Option<String>,
    loader: MemoryLoader,
    sink: Arc<RecordingSink>,
    paused: bool,
}

impl HarnessBuilder {
    pub(crate) fn size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub(crate) fn institution(mut self, code: &str) -> Self {
        self.requested = Some(code.to_string());
        self
    }

    pub(crate) fn article(mut self, id: &str) -> Self {
        self.article = Some(id.to_string());
        self
    }

    /// Serve `content` for its institution.
    pub(crate) fn content(mut self, content: ContentBundle) -> Self {
        let ContentBundle {
            institution,
            news,
            updates,
            slides,
        } = content;
        self.loader = self
            .loader
            .with_news(institution.clone(), news)
            .with_updates(institution.clone(), updates)
            .with_slides(institution, slides);
        self
    }

    pub(crate) fn sink(mut self, sink: RecordingSink) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub(crate) fn paused(mut self) -> Self {
        self.paused = true;
        self
    }

    pub(crate) fn build(self) -> AcceptanceTestHarness {
        let config = ResolvedConfig::default();
        let mut state = AppState::new(
            registry(),
            config.surface_configs(),
            self.requested.as_deref(),
            self.paused,
            config.cell_width,
        );
        if let Some(id) = self.article {
            state.request_article(id);
        }

        let services = BoardServices {
            fetcher: ContentFetcher::new(Arc::new(self.loader)),
            sink: self.sink.clone(),
            key_bindings: KeyBindings::default(),
            color: ColorConfig::enabled(),
        };
        let terminal = Terminal::new(TestBackend::new(self.width, self.height)).unwrap();

        AcceptanceTestHarness {
            app: TuiApp::new_for_test(terminal, state, services),
            sink: self.sink,
            now: Instant::now(),
            running: true,
        }
    }
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    sink: Arc<RecordingSink>,
    now: Instant,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Builder at 80x24 serving four items per collection for both
    /// fixture institutions.
    pub(crate) fn builder() -> HarnessBuilder {
        HarnessBuilder {
            width: 80,
            height: 24,
            requested: None,
            article: None,
            loader: MemoryLoader::new(),
            sink: Arc::new(RecordingSink::default()),
            paused: false,
        }
        .content(bundle("northfield", 4))
        .content(bundle("riverside", 2))
    }

    /// Default board with content already applied.
    pub(crate) fn loaded() -> Self {
        let mut harness = Self::builder().build();
        harness.wait_for_content();
        harness
    }

    /// Block until the background load lands (or panic after two seconds).
    pub fn wait_for_content(&mut self) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if self.app.update_test(self.now) && !self.state().images.is_loading() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("content did not arrive within two seconds");
    }

    /// Advance the virtual clock and run due timers.
    pub fn elapse(&mut self, duration: Duration) -> bool {
        self.now += duration;
        self.app.update_test(self.now)
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods), self.now);
        if quit {
            self.running = false;
        }
        quit
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        self.app.app_state_mut()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn records(&self) -> Vec<ApplicationRecord> {
        self.sink.records()
    }

    pub fn institution(&self) -> Option<InstitutionCode> {
        self.state().institution().cloned()
    }

    pub fn window_title(&self) -> String {
        self.app.window_title_test()
    }

    pub fn poll_timeout(&self) -> Duration {
        self.app.poll_timeout_test(self.now)
    }

    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.resize_backend_test(width, height);
        self.app.handle_resize_test(width, height, self.now);
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return; // Already quit
        }

        // Render first to ensure layout is calculated
        let _ = self.app.render_test();

        let mouse_event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.app.handle_mouse_test(mouse_event, self.now);
    }

    pub fn hover_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Moved, column, row);
    }

    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    pub fn scroll_down_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::ScrollDown, column, row);
    }
}

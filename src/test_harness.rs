//! Acceptance test harness for the demo pager
//!
//! Wraps `TuiApp<TestBackend>` with a high-level API for simulating user
//! interactions (keys, clicks, resizes) and inspecting the rendered screen.

use crate::pager::{GroupSize, PagerButton, PagerState};
use crate::source::sample_rows;
use crate::view::{CliArgs, ColorConfig, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep comparisons clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
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

/// Test harness for acceptance testing
///
/// Drives a `TuiApp<TestBackend>` the way the event loop would: every
/// simulated event is followed by a draw, so state assertions always see
/// what the user would see.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Create a harness over generated sample rows at the default 80x24
    /// terminal with the default group of five.
    pub fn with_sample_rows(row_count: usize, per_page: usize) -> Result<Self, TuiError> {
        Self::new(row_count, per_page, GroupSize::DEFAULT.get(), 80, 24)
    }

    /// Fully parameterized constructor.
    pub fn new(
        row_count: usize,
        per_page: usize,
        group_size: usize,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;

        let args = CliArgs::new(
            per_page,
            GroupSize::clamping(group_size),
            ColorConfig::default(),
        );
        let mut app = TuiApp::new_for_test(terminal, sample_rows(row_count), &args);

        // Initial draw, as the event loop does before reading events
        app.render_test()?;

        Ok(Self { app, running: true })
    }

    /// Send a single key event, then redraw.
    ///
    /// Returns true if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Shift+G, Ctrl+C), then redraw.
    ///
    /// Returns true if the app quit as a result of this key.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let key_event = KeyEvent::new(key, mods);
        let quit = self.app.handle_key_test(key_event);

        if quit {
            self.running = false;
        } else {
            self.app.render_test().expect("draw after key");
        }

        quit
    }

    /// Send a sequence of keys, stopping early if the app quits.
    #[allow(dead_code)]
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Left-click at absolute terminal coordinates, then redraw.
    pub fn click(&mut self, column: u16, row: u16) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.app.handle_mouse_test(mouse);
        self.app.render_test().expect("draw after click");
    }

    /// Left-click a specific bar control, if it is currently drawn.
    ///
    /// Returns false when the control is not on screen (clipped away or
    /// the bar is empty), in which case no click is sent.
    pub fn click_button(&mut self, button: PagerButton) -> bool {
        match self.app.bar_button_position(button) {
            Some((x, y)) => {
                self.click(x, y);
                true
            }
            None => false,
        }
    }

    /// Resize the terminal, then redraw with the new dimensions.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.handle_resize_test(width, height);
        self.app.render_test().expect("draw after resize");
    }

    /// Current pagination state for assertions.
    pub fn state(&self) -> PagerState {
        self.app.pager_state()
    }

    /// The rendered screen as trimmed text.
    pub fn screen(&self) -> String {
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Check if app is still running (didn't quit).
    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

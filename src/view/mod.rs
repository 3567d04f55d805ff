//! TUI rendering and terminal management (impure shell)

pub mod bar;
pub mod constants;
pub mod status;
pub mod styles;
pub mod table;

pub use bar::PagerBar;
pub use status::render_status_line;
pub use styles::{BarStyles, ColorConfig};
pub use table::render_row_table;

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, PagerAction, TickerRow};
use crate::pager::{
    detect_button_click, layout_bar, total_pages, BarClickResult, BarLayout, GroupSize, Pager,
    PagerButton, PagerConfig,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Row input error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Screen regions for one frame: table on top, bar and status below.
struct ScreenAreas {
    table: Rect,
    bar: Rect,
    status: Rect,
}

/// Split the frame into table, pagination bar, and status line areas.
fn compute_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(constants::BAR_HEIGHT),
            Constraint::Length(constants::STATUS_BAR_HEIGHT),
        ])
        .split(area);
    ScreenAreas {
        table: chunks[0],
        bar: chunks[1],
        status: chunks[2],
    }
}

/// Main TUI application: the demo host that owns the ticker table and the
/// pagination controller.
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    rows: Vec<TickerRow>,
    per_page: usize,
    pager: Pager,
    key_bindings: KeyBindings,
    styles: BarStyles,
    /// Last rendered bar area (for mouse click detection)
    last_bar_area: Option<Rect>,
    /// Layout the bar was last drawn from; clicks hit-test against this
    last_bar_layout: BarLayout,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(rows: Vec<TickerRow>, args: &CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, rows, args))
    }

    /// Run the main event loop
    ///
    /// Blocks on terminal events and redraws after each handled one.
    /// Returns when user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Initial render - ensures screen has content immediately
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(()); // User quit
                    }
                    self.draw()?;
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse(mouse);
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    self.handle_resize(width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wire up the app around an already-created terminal.
    ///
    /// Shared between the production constructor and the test harness.
    fn with_terminal(terminal: Terminal<B>, rows: Vec<TickerRow>, args: &CliArgs) -> Self {
        let pager = Pager::new(
            PagerConfig {
                current_page: 0,
                total_pages: total_pages(rows.len(), args.per_page),
                group_size: args.group_size,
            },
            |page| info!(page = page.display(), "Page selected"),
        );

        Self {
            terminal,
            rows,
            per_page: args.per_page,
            pager,
            key_bindings: KeyBindings::default(),
            styles: BarStyles::with_color_config(args.color_config),
            last_bar_area: None,
            last_bar_layout: BarLayout::default(),
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false, // Unknown key, ignore
        };

        let state = self.pager.state();
        match action {
            PagerAction::Quit => return true,

            PagerAction::FirstPage => self.pager.press(PagerButton::First),
            PagerAction::PrevPage => self.pager.press(PagerButton::Prev),
            PagerAction::NextPage => self.pager.press(PagerButton::Next),
            PagerAction::LastPage => self.pager.press(PagerButton::Last),

            // Group jumps move by one visible window; go_to_page clamps
            PagerAction::PrevGroup => {
                let target = state
                    .current_page()
                    .get()
                    .saturating_sub(state.group_size().get());
                self.pager.go_to_page(target);
            }
            PagerAction::NextGroup => {
                let target = state
                    .current_page()
                    .get()
                    .saturating_add(state.group_size().get());
                self.pager.go_to_page(target);
            }

            // Digit keys carry 1-based page numbers
            PagerAction::SelectPage(number) => {
                self.pager.go_to_page(number.saturating_sub(1));
            }
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// Left clicks hit-test against the layout the bar was last drawn
    /// from; everything else is ignored.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(bar_area) = self.last_bar_area else {
            return;
        };

        match detect_button_click(mouse.column, mouse.row, bar_area, &self.last_bar_layout) {
            BarClickResult::ButtonClicked(button) => {
                debug!(?button, "Bar button clicked");
                self.pager.press(button);
            }
            BarClickResult::NoButton => {}
        }
    }

    /// Handle a terminal resize event
    ///
    /// The next draw refits the visible group to the new width.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Terminal resized");
    }

    /// Render the current frame
    ///
    /// Refits the group to the bar's area, then draws the table page, the
    /// pagination bar, and the status line. The bar area and layout are
    /// remembered for mouse hit-testing.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let areas = compute_areas(frame_area);

        self.pager
            .adjust_group_size(areas.bar.width, frame_area.width);
        let state = self.pager.state();
        self.last_bar_area = Some(areas.bar);
        self.last_bar_layout = layout_bar(state, areas.bar.width);

        let Self {
            terminal,
            rows,
            per_page,
            styles,
            ..
        } = self;
        terminal.draw(|frame| {
            render_row_table(frame, areas.table, rows, state.current_page(), *per_page);
            frame.render_widget(PagerBar::new(state, styles), areas.bar);
            render_status_line(frame, areas.status, state, rows.len());
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Constructs the app around a caller-provided terminal (usually a
    /// TestBackend) without touching the real terminal.
    pub(crate) fn new_for_test(terminal: Terminal<B>, rows: Vec<TickerRow>, args: &CliArgs) -> Self {
        Self::with_terminal(terminal, rows, args)
    }

    /// Snapshot of the pager's state (test-only accessor)
    pub(crate) fn pager_state(&self) -> crate::pager::PagerState {
        self.pager.state()
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Handle a resize event (test-only accessor)
    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16) {
        self.handle_resize(width, height)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    ///
    /// Provides access to the terminal backend for buffer inspection.
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Get mutable reference to terminal (test-only accessor)
    ///
    /// Used by the harness to resize the TestBackend.
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Absolute terminal position of a bar control, if it was drawn
    /// (test-only accessor)
    pub(crate) fn bar_button_position(&self, button: PagerButton) -> Option<(u16, u16)> {
        let area = self.last_bar_area?;
        let span = self.last_bar_layout.span_for(button)?;
        Some((area.x + span.x, area.y))
    }
}

/// CLI arguments for TUI initialization
///
/// The subset of resolved configuration that shapes the demo pager's
/// initial state. CLI parsing and config precedence happen in main; this
/// struct carries the result into the rendering layer.
pub struct CliArgs {
    /// Rows shown per table page. Callers floor this at 1.
    pub per_page: usize,

    /// Most page buttons ever shown at once.
    pub group_size: GroupSize,

    /// Whether colored output is enabled.
    pub color_config: ColorConfig,
}

impl CliArgs {
    /// Create new CliArgs from resolved configuration
    pub fn new(per_page: usize, group_size: GroupSize, color_config: ColorConfig) -> Self {
        Self {
            per_page,
            group_size,
            color_config,
        }
    }
}

/// Initialize and run the TUI application with the loaded rows and args
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_rows(rows: Vec<TickerRow>, args: CliArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(rows, &args)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::PageIndex;
    use crate::source::sample_rows;
    use ratatui::backend::TestBackend;

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    fn test_args() -> CliArgs {
        CliArgs::new(10, GroupSize::DEFAULT, ColorConfig::default())
    }

    // Helper to create test TuiApp: 95 sample rows at 10 per page = 10 pages
    fn create_test_app() -> TuiApp<TestBackend> {
        let backend = TestBackend::new(80, 24);
        let terminal = Terminal::new(backend).unwrap();
        TuiApp::new_for_test(terminal, sample_rows(95), &test_args())
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app();
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.handle_key(key), "'q' should trigger quit");
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(key), "Ctrl+C should trigger quit");
    }

    #[test]
    fn handle_key_unbound_returns_false() {
        let mut app = create_test_app();
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert!(!app.handle_key(key), "Unbound keys should not quit");
        assert_eq!(app.pager_state().current_page().get(), 0);
    }

    #[test]
    fn draw_renders_without_error() {
        let mut app = create_test_app();
        assert!(app.draw().is_ok(), "Drawing should succeed");
    }

    #[test]
    fn handle_key_l_advances_page() {
        let mut app = create_test_app();
        let key = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        app.handle_key(key);
        assert_eq!(app.pager_state().current_page().get(), 1);
    }

    #[test]
    fn handle_key_digit_selects_page() {
        let mut app = create_test_app();
        let key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        app.handle_key(key);
        // '5' is the 1-based page number
        assert_eq!(app.pager_state().current_page().get(), 4);
    }

    #[test]
    fn handle_key_page_down_jumps_a_group() {
        let mut app = create_test_app();
        app.draw().unwrap(); // fit the group before jumping
        let group = app.pager_state().group_size().get();
        let key = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        app.handle_key(key);
        assert_eq!(app.pager_state().current_page().get(), group);
    }

    #[test]
    fn mouse_click_on_next_button_advances_page() {
        let mut app = create_test_app();
        app.draw().unwrap();

        let (x, y) = app
            .bar_button_position(PagerButton::Next)
            .expect("Next button should be drawn");
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);

        assert_eq!(app.pager_state().current_page().get(), 1);
    }

    #[test]
    fn mouse_click_before_first_draw_is_noop() {
        let mut app = create_test_app();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 22,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert_eq!(app.pager_state().current_page().get(), 0);
    }

    #[test]
    fn mouse_click_on_page_button_jumps_directly() {
        let mut app = create_test_app();
        app.draw().unwrap();

        let target = PagerButton::Page(PageIndex::new(2));
        let (x, y) = app
            .bar_button_position(target)
            .expect("Page 3 button should be drawn");
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);

        assert_eq!(app.pager_state().current_page().get(), 2);
    }

    #[test]
    fn shrinking_terminal_shrinks_visible_group() {
        let mut app = create_test_app();
        app.draw().unwrap();
        assert_eq!(app.pager_state().group_size().get(), 5);

        app.terminal.backend_mut().resize(20, 24);
        app.handle_resize(20, 24);
        app.draw().unwrap();

        // 20-column bar fits 3 estimated buttons
        assert_eq!(app.pager_state().group_size().get(), 3);
    }

    #[test]
    fn widening_terminal_restores_configured_group() {
        let mut app = create_test_app();
        app.terminal.backend_mut().resize(20, 24);
        app.draw().unwrap();
        assert_eq!(app.pager_state().group_size().get(), 3);

        app.terminal.backend_mut().resize(80, 24);
        app.handle_resize(80, 24);
        app.draw().unwrap();

        assert_eq!(app.pager_state().group_size().get(), 5);
    }

    #[test]
    fn draw_remembers_bar_area_for_hit_testing() {
        let mut app = create_test_app();
        assert!(app.last_bar_area.is_none());
        app.draw().unwrap();

        let area = app.last_bar_area.expect("bar area recorded");
        // 24 rows: 22 of table, bar, status line
        assert_eq!(area.y, 22);
        assert_eq!(area.height, constants::BAR_HEIGHT);
        assert!(!app.last_bar_layout.is_empty());
    }
}

//! Pagination controller
//!
//! [`Pager`] wraps a [`PagerState`] with the page-change callback and the
//! configured group-size ceiling. All mutation funnels through a handful of
//! operations with fixed clamping and notification rules; everything else
//! stays pure and lives in [`group`](super::group) and
//! [`state`](super::state).

use super::group;
use super::state::PagerState;
use super::types::{GroupSize, PageCount, PageIndex};

/// One of the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagerButton {
    /// Jump to the first page (`<<`).
    First,
    /// Go back one page (`<`).
    Prev,
    /// Jump directly to a specific page.
    Page(PageIndex),
    /// Advance one page (`>`).
    Next,
    /// Jump to the last page (`>>`).
    Last,
}

/// Initial pager settings.
///
/// `group_size` is the most page buttons ever shown at once; rendering into
/// a tight container may shrink the visible group below it, but never
/// permanently — the configured value stays the ceiling for later adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerConfig {
    /// 0-based page to start on. Out-of-range values clamp.
    pub current_page: usize,
    /// Total number of pages. Zero renders an empty bar.
    pub total_pages: usize,
    /// Visible page-button group ceiling.
    pub group_size: GroupSize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            current_page: 0,
            total_pages: 1,
            group_size: GroupSize::DEFAULT,
        }
    }
}

/// Pagination controller.
///
/// Owns the current [`PagerState`] plus the callback invoked on page
/// selection. State changes only happen through [`go_to_page`],
/// [`update_total_pages`], [`adjust_group_size`], and [`press`].
///
/// [`go_to_page`]: Pager::go_to_page
/// [`update_total_pages`]: Pager::update_total_pages
/// [`adjust_group_size`]: Pager::adjust_group_size
/// [`press`]: Pager::press
pub struct Pager {
    state: PagerState,
    max_group_size: GroupSize,
    on_page_change: Box<dyn FnMut(PageIndex)>,
}

impl Pager {
    /// Create a pager from initial settings and a page-change callback.
    ///
    /// The callback fires on every [`go_to_page`](Pager::go_to_page), with
    /// the page actually landed on after clamping.
    pub fn new(config: PagerConfig, on_page_change: impl FnMut(PageIndex) + 'static) -> Self {
        Self {
            state: PagerState::new(config.current_page, config.total_pages, config.group_size),
            max_group_size: config.group_size,
            on_page_change: Box::new(on_page_change),
        }
    }

    /// Snapshot of the current pagination state.
    pub fn state(&self) -> PagerState {
        self.state
    }

    /// The configured group-size ceiling.
    pub fn max_group_size(&self) -> GroupSize {
        self.max_group_size
    }

    /// Move to `page`, clamped into `[0, total_pages - 1]`, and notify.
    ///
    /// The callback fires with the landed-on page even when the clamped
    /// target equals the current page. With zero total pages the target
    /// pins to page 0 and the callback still fires.
    pub fn go_to_page(&mut self, page: usize) {
        self.state = self.state.with_page(page);
        (self.on_page_change)(self.state.current_page());
    }

    /// Replace the total page count, re-clamping the current page.
    ///
    /// Never fires the callback, even when the current page moves: the
    /// caller changed the data set and already knows where it stands.
    pub fn update_total_pages(&mut self, total_pages: usize) {
        self.state = self.state.with_total_pages(total_pages);
    }

    /// Re-fit the visible group to the container the bar renders into.
    ///
    /// `container_width` is the bar's own width in cells and
    /// `viewport_width` the full terminal width; both feed
    /// [`group::fit_group_size`]. A zero-width container is a no-op and
    /// keeps the previous group, matching a collapsed-but-present bar.
    /// The fit always starts from the configured ceiling, so a bar that
    /// shrank in a tight container grows back when space returns.
    pub fn adjust_group_size(&mut self, container_width: u16, viewport_width: u16) {
        if container_width == 0 {
            return;
        }
        let fitted = group::fit_group_size(
            self.max_group_size,
            self.state.total_pages(),
            container_width,
            viewport_width,
        );
        self.state = self.state.with_group_size(fitted);
    }

    /// Handle a press on one of the bar's controls.
    ///
    /// Presses on disabled controls do nothing at all: `<<`/`<` at the
    /// first page, `>`/`>>` at the last, and every control when there are
    /// no pages. A page button always routes through
    /// [`go_to_page`](Pager::go_to_page), so pressing the active page
    /// re-fires the callback.
    pub fn press(&mut self, button: PagerButton) {
        if self.state.total_pages().is_empty() {
            return;
        }
        let current = self.state.current_page().get();
        match button {
            PagerButton::First if !self.state.at_first_page() => self.go_to_page(0),
            PagerButton::Prev if !self.state.at_first_page() => self.go_to_page(current - 1),
            PagerButton::Next if !self.state.at_last_page() => self.go_to_page(current + 1),
            PagerButton::Last if !self.state.at_last_page() => {
                self.go_to_page(self.state.total_pages().get() - 1)
            }
            PagerButton::Page(page) => self.go_to_page(page.get()),
            // Disabled control: no handler to run
            _ => {}
        }
    }

    /// Total number of pages currently configured.
    pub fn total_pages(&self) -> PageCount {
        self.state.total_pages()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;

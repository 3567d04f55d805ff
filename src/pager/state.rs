//! Pagination state and its clamped transitions
//!
//! `PagerState` is a plain value: every transition returns a new state and
//! keeps the current page inside `[0, total_pages)`. Side effects (the
//! page-change callback) live in [`Pager`](crate::pager::Pager), which owns
//! one of these.

use super::types::{GroupSize, PageCount, PageIndex};

/// Current pagination position plus the visible button group size.
///
/// # Invariants
/// - `current_page < total_pages` whenever `total_pages > 0`
/// - `current_page == 0` whenever `total_pages == 0`
/// - `group_size >= 1` always; it may exceed `total_pages`, in which case
///   the window math simply truncates the visible group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerState {
    current_page: PageIndex,
    total_pages: PageCount,
    group_size: GroupSize,
}

impl PagerState {
    /// Create a state, clamping `current_page` into range for `total_pages`.
    pub fn new(current_page: usize, total_pages: usize, group_size: GroupSize) -> Self {
        Self {
            current_page: PageIndex::FIRST,
            total_pages: PageCount::new(total_pages),
            group_size,
        }
        .with_page(current_page)
    }

    /// The current 0-based page.
    pub fn current_page(&self) -> PageIndex {
        self.current_page
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> PageCount {
        self.total_pages
    }

    /// Number of page buttons currently shown at once.
    pub fn group_size(&self) -> GroupSize {
        self.group_size
    }

    /// Move to `page`, clamped to `[0, total_pages - 1]`.
    ///
    /// With zero total pages the current page pins to 0.
    pub fn with_page(self, page: usize) -> Self {
        let clamped = match self.total_pages.last_page() {
            Some(last) => page.min(last.get()),
            None => 0,
        };
        Self {
            current_page: PageIndex::new(clamped),
            ..self
        }
    }

    /// Replace the total page count, re-clamping the current page.
    ///
    /// Shrinking below the current page pulls it back to the new last page;
    /// shrinking to zero pins it to 0. The group size is left alone: the
    /// window math tolerates a group larger than the new total.
    pub fn with_total_pages(self, total_pages: usize) -> Self {
        Self {
            total_pages: PageCount::new(total_pages),
            ..self
        }
        .with_page(self.current_page.get())
    }

    /// Replace the visible group size.
    pub fn with_group_size(self, group_size: GroupSize) -> Self {
        Self { group_size, ..self }
    }

    /// True when the current page is the first page (or there are no pages).
    pub fn at_first_page(&self) -> bool {
        self.current_page.get() == 0
    }

    /// True when the current page is the last page (or there are no pages).
    pub fn at_last_page(&self) -> bool {
        match self.total_pages.last_page() {
            Some(last) => self.current_page == last,
            None => true,
        }
    }
}

impl Default for PagerState {
    /// One page, positioned on it, with the default group of five.
    fn default() -> Self {
        Self::new(0, 1, GroupSize::DEFAULT)
    }
}

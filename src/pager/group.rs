//! Pure window and group-size math
//!
//! Everything here is a total function over plain values so the same
//! arithmetic backs rendering, hit-testing, and the property tests.

use std::ops::Range;

use super::state::PagerState;
use super::types::{GroupSize, PageCount};

/// Estimated cell width of one pagination button, separator included.
///
/// The fit computation divides the container width by this estimate rather
/// than measuring real labels, so a bar sized for n buttons can still clip
/// once page numbers grow wide. See [`fit_group_size`].
pub const APPROX_BUTTON_WIDTH: u16 = 6;

/// Viewports at or below this many columns count as narrow.
pub const NARROW_VIEWPORT_WIDTH: u16 = 80;

/// Upper bound on the visible group in narrow viewports.
pub const NARROW_GROUP_CAP: usize = 5;

/// The half-open range of 0-based page indexes whose buttons are visible.
///
/// The window is the group-aligned block containing the current page:
/// `[group * size, min(group * size + size, total))`. It always contains
/// the current page and never exceeds the group size in length. An empty
/// range comes back when there are no pages.
pub fn group_window(state: PagerState) -> Range<usize> {
    let total = state.total_pages().get();
    if total == 0 {
        return 0..0;
    }
    let size = state.group_size().get();
    let start = (state.current_page().get() / size) * size;
    let end = (start + size).min(total);
    start..end
}

/// Group size that fits the given container, capped for narrow viewports.
///
/// Mirrors how the bar adapts on resize:
/// - the container fits roughly `container_width / APPROX_BUTTON_WIDTH`
///   buttons;
/// - viewports at or below [`NARROW_VIEWPORT_WIDTH`] cap the group at
///   [`NARROW_GROUP_CAP`];
/// - the group never exceeds `max_group` or the total page count, and never
///   drops below 1.
///
/// A zero-width container floors to 1 here; callers that want "keep the
/// previous size" for a collapsed container must guard before calling
/// (see [`Pager::adjust_group_size`](crate::pager::Pager::adjust_group_size)).
pub fn fit_group_size(
    max_group: GroupSize,
    total_pages: PageCount,
    container_width: u16,
    viewport_width: u16,
) -> GroupSize {
    let fit = (container_width / APPROX_BUTTON_WIDTH) as usize;
    let mut cap = max_group.get();
    if viewport_width <= NARROW_VIEWPORT_WIDTH {
        cap = cap.min(NARROW_GROUP_CAP);
    }
    GroupSize::clamping(cap.min(fit).min(total_pages.get()))
}

/// Number of pages needed to show `row_count` rows at `per_page` rows each.
///
/// A zero `per_page` yields zero pages rather than dividing by zero;
/// callers are expected to floor their page size at 1.
pub fn total_pages(row_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    row_count.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(current: usize, total: usize, group: usize) -> PagerState {
        PagerState::new(current, total, GroupSize::clamping(group))
    }

    // ===== group_window =====

    #[test]
    fn window_is_group_aligned_block_containing_current() {
        // 10 pages in groups of 5: page 7 sits in the second block
        assert_eq!(group_window(state(7, 10, 5)), 5..10);
        assert_eq!(group_window(state(0, 10, 5)), 0..5);
        assert_eq!(group_window(state(4, 10, 5)), 0..5);
        assert_eq!(group_window(state(5, 10, 5)), 5..10);
    }

    #[test]
    fn window_truncates_at_total_pages() {
        // Last block of 12 pages in groups of 5 has only two pages
        assert_eq!(group_window(state(11, 12, 5)), 10..12);
    }

    #[test]
    fn window_with_group_larger_than_total() {
        assert_eq!(group_window(state(1, 3, 5)), 0..3);
    }

    #[test]
    fn window_empty_when_no_pages() {
        assert_eq!(group_window(state(0, 0, 5)), 0..0);
    }

    #[test]
    fn window_single_page() {
        assert_eq!(group_window(state(0, 1, 5)), 0..1);
    }

    // ===== fit_group_size =====

    fn fit(max: usize, total: usize, container: u16, viewport: u16) -> usize {
        fit_group_size(
            GroupSize::clamping(max),
            PageCount::new(total),
            container,
            viewport,
        )
        .get()
    }

    #[test]
    fn wide_container_keeps_configured_group() {
        // 120 cols fit 20 buttons; config wins
        assert_eq!(fit(7, 50, 120, 120), 7);
    }

    #[test]
    fn tight_container_shrinks_group() {
        // 30 cols fit 5 estimated buttons
        assert_eq!(fit(7, 50, 30, 120), 5);
        // 13 cols fit 2
        assert_eq!(fit(7, 50, 13, 120), 2);
    }

    #[test]
    fn narrow_viewport_caps_at_five() {
        assert_eq!(fit(9, 50, 200, 80), 5);
        // Just above the threshold the cap does not apply
        assert_eq!(fit(9, 50, 200, 81), 9);
    }

    #[test]
    fn narrow_viewport_cap_never_raises_configured_group() {
        assert_eq!(fit(3, 50, 200, 80), 3);
    }

    #[test]
    fn group_never_exceeds_total_pages() {
        assert_eq!(fit(7, 3, 200, 120), 3);
    }

    #[test]
    fn group_floors_at_one() {
        // Container narrower than one estimated button
        assert_eq!(fit(7, 50, 5, 120), 1);
        // No pages at all still yields 1
        assert_eq!(fit(7, 0, 200, 120), 1);
    }

    // ===== total_pages =====

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn total_pages_zero_per_page_yields_zero() {
        assert_eq!(total_pages(50, 0), 0);
    }
}

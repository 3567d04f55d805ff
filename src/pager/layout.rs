//! Bar layout and click hit-testing
//!
//! [`layout_bar`] turns a [`PagerState`] into positioned button spans, and
//! [`detect_button_click`] maps a mouse position back through the same
//! spans. Rendering and hit-testing both consume one layout, so a click can
//! never land on a button that was not drawn.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use super::controller::PagerButton;
use super::group::group_window;
use super::state::PagerState;
use super::types::PageIndex;

/// One positioned control in the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpan {
    /// Which control this span is.
    pub button: PagerButton,
    /// Text drawn for the control, brackets included for the active page.
    pub label: String,
    /// Column offset from the bar's left edge.
    pub x: u16,
    /// Display width of the label in cells.
    pub width: u16,
    /// False for `<<`/`<` on the first page and `>`/`>>` on the last.
    pub enabled: bool,
    /// True only for the current page's button.
    pub active: bool,
}

/// Positioned controls for one rendering of the bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BarLayout {
    spans: Vec<ButtonSpan>,
}

impl BarLayout {
    /// The positioned controls, left to right.
    pub fn spans(&self) -> &[ButtonSpan] {
        &self.spans
    }

    /// True when nothing would be drawn.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Find the span for a specific control, if it was laid out.
    pub fn span_for(&self, button: PagerButton) -> Option<&ButtonSpan> {
        self.spans.iter().find(|span| span.button == button)
    }
}

/// Outcome of hit-testing a mouse click against the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarClickResult {
    /// The click landed on a control. Reported for disabled controls too;
    /// [`Pager::press`](super::Pager::press) decides whether anything
    /// happens.
    ButtonClicked(PagerButton),
    /// The click hit a separator gap or fell outside the bar.
    NoButton,
}

/// Accumulates spans left to right until the bar width runs out.
///
/// Layout stops at the first control that does not fully fit, keeping the
/// drawn prefix contiguous instead of leaving holes.
struct SpanBuilder {
    spans: Vec<ButtonSpan>,
    x: u16,
    bar_width: u16,
    full: bool,
}

impl SpanBuilder {
    fn new(bar_width: u16) -> Self {
        Self {
            spans: Vec::new(),
            x: 0,
            bar_width,
            full: false,
        }
    }

    fn push(&mut self, button: PagerButton, label: String, enabled: bool, active: bool) {
        if self.full {
            return;
        }
        let width = UnicodeWidthStr::width(label.as_str()) as u16;
        let end = match self.x.checked_add(width) {
            Some(end) if width > 0 && end <= self.bar_width => end,
            _ => {
                self.full = true;
                return;
            }
        };
        self.spans.push(ButtonSpan {
            button,
            label,
            x: self.x,
            width,
            enabled,
            active,
        });
        // One separator cell between controls
        self.x = end.saturating_add(1);
    }
}

/// Lay out the bar's controls for the given state and bar width.
///
/// Produces `<<`, `<`, the visible window of page buttons (active page
/// bracketed, labels 1-based), `>`, `>>`. Zero total pages or zero width
/// yields an empty layout. Controls past the width are dropped from the
/// right.
pub fn layout_bar(state: PagerState, width: u16) -> BarLayout {
    if state.total_pages().is_empty() {
        return BarLayout::default();
    }
    let current = state.current_page();
    let at_first = state.at_first_page();
    let at_last = state.at_last_page();

    let mut builder = SpanBuilder::new(width);
    builder.push(PagerButton::First, "<<".to_string(), !at_first, false);
    builder.push(PagerButton::Prev, "<".to_string(), !at_first, false);
    for page in group_window(state) {
        let index = PageIndex::new(page);
        let active = index == current;
        let label = if active {
            format!("[{}]", index.display())
        } else {
            index.display().to_string()
        };
        builder.push(PagerButton::Page(index), label, true, active);
    }
    builder.push(PagerButton::Next, ">".to_string(), !at_last, false);
    builder.push(PagerButton::Last, ">>".to_string(), !at_last, false);

    BarLayout {
        spans: builder.spans,
    }
}

/// Map a terminal-coordinate click to the control underneath it.
///
/// `bar_area` is the rectangle the bar was rendered into and `layout` the
/// layout it was rendered from. Clicks outside the area or on the gaps
/// between controls report [`BarClickResult::NoButton`].
pub fn detect_button_click(
    click_x: u16,
    click_y: u16,
    bar_area: Rect,
    layout: &BarLayout,
) -> BarClickResult {
    if click_y < bar_area.y
        || click_y >= bar_area.y + bar_area.height
        || click_x < bar_area.x
        || click_x >= bar_area.x + bar_area.width
    {
        return BarClickResult::NoButton;
    }

    let relative_x = click_x - bar_area.x;
    for span in layout.spans() {
        if relative_x >= span.x && relative_x < span.x + span.width {
            return BarClickResult::ButtonClicked(span.button);
        }
    }
    BarClickResult::NoButton
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;

//! Pagination bar widget
//!
//! Renders one line of controls: `<< < 4 5 [6] 7 8 > >>`. The widget
//! draws whatever [`layout_bar`] lays out for its area, which is the same
//! layout mouse handling hit-tests against.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::pager::{layout_bar, PagerState};

use super::styles::BarStyles;

/// One-line pagination bar.
///
/// Renders first/prev controls, the visible window of page buttons with
/// the active page bracketed, and next/last controls. Disabled controls
/// and the active page take their styles from [`BarStyles`]. With zero
/// total pages nothing is drawn.
#[derive(Debug, Clone, Copy)]
pub struct PagerBar<'a> {
    state: PagerState,
    styles: &'a BarStyles,
}

impl<'a> PagerBar<'a> {
    /// Create a bar for the given state and styles.
    pub fn new(state: PagerState, styles: &'a BarStyles) -> Self {
        Self { state, styles }
    }
}

impl Widget for PagerBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let layout = layout_bar(self.state, area.width);
        for span in layout.spans() {
            let style = self.styles.style_for_button(span.enabled, span.active);
            buf.set_string(area.x + span.x, area.y, &span.label, style);
        }
    }
}

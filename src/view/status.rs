//! Status line under the pagination bar

use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::pager::PagerState;

/// Render the one-line status summary with key hints.
///
/// Shows the 1-based position (`page 8/10`), the row count, and the key
/// bindings a first-time user needs. With no pages it reports `no rows`
/// instead of a position.
pub fn render_status_line(frame: &mut Frame, area: Rect, state: PagerState, row_count: usize) {
    let position = if state.total_pages().is_empty() {
        "no rows".to_string()
    } else {
        format!(
            "page {}/{} | {} rows",
            state.current_page().display(),
            state.total_pages().get(),
            row_count
        )
    };

    let text = format!("{position} | h/l page | g/G ends | 1-9 jump | q quit");
    frame.render_widget(Paragraph::new(text), area);
}

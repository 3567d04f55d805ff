//! Ticker table rendering

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::model::TickerRow;
use crate::pager::PageIndex;

/// Render the current page of ticker rows as a bordered table.
///
/// Shows `per_page` rows starting at `page * per_page`; a page past the
/// end of `rows` renders an empty table rather than panicking. Rows that
/// do not fit the area vertically are clipped by the widget.
pub fn render_row_table(
    frame: &mut Frame,
    area: Rect,
    rows: &[TickerRow],
    page: PageIndex,
    per_page: usize,
) {
    let start = page.get().saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(rows.len());
    let page_rows = rows.get(start..end).unwrap_or(&[]);

    let header = Row::new(["Symbol", "Name", "Close", "Updated"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let body = page_rows.iter().map(|row| {
        Row::new([
            Cell::from(row.symbol.as_str()),
            Cell::from(row.name.as_str()),
            Cell::from(format!("{:>8.2}", row.close)),
            Cell::from(row.updated.format("%Y-%m-%d %H:%M").to_string()),
        ])
    });

    let table = Table::new(
        body,
        [
            Constraint::Length(6),
            Constraint::Min(18),
            Constraint::Length(8),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Tickers"));

    frame.render_widget(table, area);
}

//! Ticker row model
//!
//! One row of the demo table, as carried in the JSONL input. Unknown
//! fields are tolerated so dumps with extra columns still load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One exchange ticker row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerRow {
    /// Exchange symbol, e.g. `AAPL`.
    pub symbol: String,
    /// Company name.
    pub name: String,
    /// Last closing price.
    pub close: f64,
    /// When the quote was last updated.
    pub updated: DateTime<Utc>,
}

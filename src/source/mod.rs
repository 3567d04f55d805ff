//! Row input: JSONL files and generated sample data
//!
//! The demo pages through [`TickerRow`]s that come either from a JSONL
//! file (one row object per line) or from a deterministic generated
//! sample set when no file is given.

use std::path::{Path, PathBuf};

use chrono::DateTime;
use tracing::{info, warn};

use crate::model::{InputError, ParseError, TickerRow};

/// Symbol, company name, and base price for generated sample rows.
const SAMPLE_TICKERS: &[(&str, &str, f64)] = &[
    ("AAPL", "Apple Inc.", 189.84),
    ("MSFT", "Microsoft Corp.", 415.50),
    ("GOOG", "Alphabet Inc.", 176.29),
    ("AMZN", "Amazon.com Inc.", 197.12),
    ("NVDA", "NVIDIA Corp.", 134.81),
    ("META", "Meta Platforms Inc.", 585.25),
    ("TSLA", "Tesla Inc.", 426.50),
    ("JPM", "JPMorgan Chase & Co.", 239.71),
    ("V", "Visa Inc.", 315.48),
    ("JNJ", "Johnson & Johnson", 144.62),
    ("WMT", "Walmart Inc.", 91.34),
    ("PG", "Procter & Gamble Co.", 167.11),
    ("MA", "Mastercard Inc.", 527.04),
    ("HD", "Home Depot Inc.", 388.78),
    ("KO", "Coca-Cola Co.", 62.10),
    ("PEP", "PepsiCo Inc.", 152.33),
    ("COST", "Costco Wholesale Corp.", 917.56),
    ("ORCL", "Oracle Corp.", 166.45),
    ("NFLX", "Netflix Inc.", 891.32),
    ("AMD", "Advanced Micro Devices", 121.46),
];

/// 2025-01-02 09:30:00 UTC, the `updated` stamp of the first sample row.
const SAMPLE_BASE_TIMESTAMP: i64 = 1_735_810_200;

/// Where the demo's rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSource {
    /// A JSONL file, one row object per line.
    File(PathBuf),
    /// Generated sample data with this many rows.
    Sample(usize),
}

/// Rows that loaded plus the per-line errors that did not.
///
/// Bad lines never abort a load: they are skipped and reported here so
/// the table still shows everything that parsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadedRows {
    /// Rows in file order.
    pub rows: Vec<TickerRow>,
    /// One error per skipped line.
    pub skipped: Vec<ParseError>,
}

impl RowSource {
    /// Load the rows for this source.
    ///
    /// # Errors
    ///
    /// Fails when a file source does not exist or cannot be read. Parse
    /// failures inside the file are not errors; they land in
    /// [`LoadedRows::skipped`].
    pub fn load(&self) -> Result<LoadedRows, InputError> {
        match self {
            RowSource::File(path) => load_rows(path),
            RowSource::Sample(count) => Ok(LoadedRows {
                rows: sample_rows(*count),
                skipped: Vec::new(),
            }),
        }
    }
}

/// Pick the row source from CLI input: an explicit file wins, otherwise
/// generated sample data.
pub fn detect_row_source(file: Option<PathBuf>, sample_count: usize) -> RowSource {
    match file {
        Some(path) => RowSource::File(path),
        None => RowSource::Sample(sample_count),
    }
}

/// Load ticker rows from a JSONL file.
///
/// # Errors
///
/// Returns [`InputError::FileNotFound`] when the path does not exist and
/// [`InputError::Io`] when reading fails.
pub fn load_rows(path: &Path) -> Result<LoadedRows, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let loaded = parse_rows(&contents);
    info!(
        path = %path.display(),
        rows = loaded.rows.len(),
        skipped = loaded.skipped.len(),
        "Loaded row file"
    );
    Ok(loaded)
}

/// Parse JSONL text into rows, skipping lines that fail to parse.
///
/// Blank lines are ignored. Line numbers in the recorded errors are
/// 1-based and count blank lines too, matching what an editor shows.
pub fn parse_rows(contents: &str) -> LoadedRows {
    let mut loaded = LoadedRows::default();

    for (line_index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<TickerRow>(line) {
            Ok(row) => loaded.rows.push(row),
            Err(err) => {
                let error = ParseError::InvalidRow {
                    line: line_index + 1,
                    message: err.to_string(),
                };
                warn!(line = line_index + 1, %err, "Skipping invalid row");
                loaded.skipped.push(error);
            }
        }
    }

    loaded
}

/// Generate `count` deterministic sample rows.
///
/// Symbols cycle through a fixed list; prices drift upward a quarter
/// point per lap and timestamps advance one minute per row, so any two
/// runs produce identical rows.
pub fn sample_rows(count: usize) -> Vec<TickerRow> {
    (0..count)
        .map(|index| {
            let (symbol, name, base) = SAMPLE_TICKERS[index % SAMPLE_TICKERS.len()];
            let lap = (index / SAMPLE_TICKERS.len()) as f64;
            let updated = DateTime::from_timestamp(SAMPLE_BASE_TIMESTAMP + (index as i64) * 60, 0)
                .unwrap_or(DateTime::UNIX_EPOCH);
            TickerRow {
                symbol: symbol.to_string(),
                name: name.to_string(),
                close: base + lap * 0.25,
                updated,
            }
        })
        .collect()
}

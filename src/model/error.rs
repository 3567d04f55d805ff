//! Error types for the pagebar application
//!
//! A small hierarchy built on `thiserror`:
//!
//! - [`AppError`] - top-level error returned from the application entry
//!   points
//!   - [`InputError`] - row-file reading failures (fatal)
//!   - [`ParseError`] - per-line JSONL failures (non-fatal: the line is
//!     skipped and reported, paging continues with the rows that parsed)
//!   - `std::io::Error` - terminal setup/teardown and draw failures (fatal)
//!
//! `From` conversions let callers propagate with `?` throughout.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Everything the binary can fail with converts into this via `From`, so
/// `main` reports one error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the row input file.
    ///
    /// Fatal: without input there is nothing to page through.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// A row line failed to parse.
    ///
    /// Non-fatal where it occurs (the loader skips the line and records
    /// the error); this variant exists for callers that want to surface
    /// one.
    #[error("Failed to parse row: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or rendering error from the crossterm/ratatui layer.
    ///
    /// Fatal: without a working terminal the TUI cannot run.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors reading the row input file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given path does not exist.
    #[error("Row file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors parsing a single JSONL row line.
///
/// Carries the 1-based line number so the bad line is easy to find.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line is not a valid row object.
    #[error("Invalid row at line {line}: {message}")]
    InvalidRow {
        /// 1-based line number within the input file.
        line: usize,
        /// What serde_json reported.
        message: String,
    },
}

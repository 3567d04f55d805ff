//! Domain model: rows, actions, and the error hierarchy

pub mod error;
pub mod pager_action;
pub mod row;

// Error types
pub use error::{AppError, InputError, ParseError};

// Actions
pub use pager_action::PagerAction;

// Table rows
pub use row::TickerRow;

//! Layout constants for the demo screen

/// Height of the pagination bar row in terminal cells.
pub const BAR_HEIGHT: u16 = 1;

/// Height of the status line under the pagination bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;

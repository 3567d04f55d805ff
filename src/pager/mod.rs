//! Pagination core
//!
//! Pure state and math ([`state`], [`group`], [`layout`]) under a thin
//! controller ([`Pager`]) that owns the page-change callback. The view
//! layer renders from the same [`BarLayout`] the mouse handler hit-tests
//! against.

pub mod controller;
pub mod group;
pub mod layout;
pub mod state;
pub mod types;

pub use controller::{Pager, PagerButton, PagerConfig};
pub use group::{fit_group_size, group_window, total_pages};
pub use layout::{detect_button_click, layout_bar, BarClickResult, BarLayout, ButtonSpan};
pub use state::PagerState;
pub use types::{GroupSize, InvalidGroupSize, PageCount, PageIndex};

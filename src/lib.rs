//! pagebar
//!
//! Responsive pagination bar widget for [ratatui] table views, plus a demo
//! table pager binary that hosts it.
//!
//! The pure pagination core lives in [`pager`] (state, window math, button
//! layout, hit-testing); [`view`] is the impure shell that renders the bar
//! and runs the demo's event loop. Mouse clicks hit-test against the same
//! layout the bar was drawn from, so a click can never land on a button
//! that was not shown.
//!
//! [ratatui]: https://ratatui.rs

pub mod config;
pub mod logging;
pub mod model;
pub mod pager;
pub mod source;
pub mod view;

pub use pager::{Pager, PagerButton, PagerConfig, PagerState};
pub use view::PagerBar;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;

//! In-crate acceptance tests
//!
//! Drive the full demo pager through the test harness: keyboard flows,
//! mouse clicks against the rendered bar, and responsive resizing.

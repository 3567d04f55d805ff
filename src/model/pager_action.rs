//! Semantic actions the demo shell can perform
//!
//! Key events resolve to one of these through
//! [`KeyBindings`](crate::config::KeyBindings); the TUI dispatches on the
//! action, never on raw key codes.

/// Action triggered by a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagerAction {
    // Navigation
    /// Jump to the first page. Default: `g` or `Home`.
    FirstPage,
    /// Go back one page. Default: `h` or `Left`.
    PrevPage,
    /// Advance one page. Default: `l` or `Right`.
    NextPage,
    /// Jump to the last page. Default: `G` or `End`.
    LastPage,
    /// Jump one button group back. Default: `PageUp`.
    PrevGroup,
    /// Jump one button group forward. Default: `PageDown`.
    NextGroup,
    /// Jump straight to a 1-based page number. Default: `1`-`9`.
    SelectPage(usize),

    // Application control
    /// Exit the application. Default: `q` (Ctrl+C always quits).
    Quit,
}

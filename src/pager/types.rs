//! Core pagination newtypes

/// Zero-based index of a page. 0 is the first page.
///
/// Unvalidated on its own: whether an index is in range depends on the
/// current [`PageCount`], and clamping happens in [`PagerState`]
/// transitions rather than here.
///
/// [`PagerState`]: crate::pager::PagerState
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PageIndex(usize);

impl PageIndex {
    /// First page.
    pub const FIRST: Self = Self(0);

    /// Create a new PageIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the 1-based page number for display purposes.
    pub fn display(&self) -> usize {
        self.0 + 1
    }
}

impl From<usize> for PageIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Total number of pages. Zero means there is nothing to page through
/// and the bar renders empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PageCount(usize);

impl PageCount {
    /// Create a new PageCount from a raw value.
    pub fn new(count: usize) -> Self {
        Self(count)
    }

    /// Get the raw count.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Check whether there are no pages at all.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Index of the last page, or `None` when there are no pages.
    pub fn last_page(&self) -> Option<PageIndex> {
        if self.0 == 0 {
            None
        } else {
            Some(PageIndex(self.0 - 1))
        }
    }
}

impl From<usize> for PageCount {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

/// Number of page buttons shown at once. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupSize(usize);

/// Error returned when attempting to create a GroupSize of zero via the
/// smart constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("GroupSize must be >= 1 (got {0})")]
pub struct InvalidGroupSize(pub usize);

impl GroupSize {
    /// Default visible group of five page buttons.
    pub const DEFAULT: Self = Self(5);

    /// Smart constructor that validates the size is >= 1.
    pub fn new(size: usize) -> Result<Self, InvalidGroupSize> {
        if size == 0 {
            Err(InvalidGroupSize(size))
        } else {
            Ok(Self(size))
        }
    }

    /// Create a GroupSize from a raw value, flooring at 1.
    pub fn clamping(size: usize) -> Self {
        Self(size.max(1))
    }

    /// Get the raw usize value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for GroupSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

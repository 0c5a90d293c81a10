//! Pagination state for table views
//!
//! Page numbers are 1-indexed. A table always has at least one page, even
//! when it holds no rows.

use std::ops::Range;

/// Rows per page unless settings say otherwise
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Number of pages needed for `total` rows, never less than 1
fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Slice out page `page` (1-indexed) of `items`.
///
/// Pages past the end, and page 0, yield an empty slice instead of failing.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current page and page size of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-indexed)
    current_page: usize,
    /// Rows per page
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Create pagination positioned on the first page
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Calculate total number of pages for `total` rows
    pub fn total_pages(&self, total: usize) -> usize {
        page_count(total, self.page_size)
    }

    /// Index of the first row on the current page
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    /// Row indices shown on the current page, clipped to `total`
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = self.offset().min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// Rows of `items` on the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.current_page, self.page_size)
    }

    /// Move to `page`, clamped into `[1, total_pages]`. Returns the page landed on.
    pub fn go_to(&mut self, page: usize, total: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages(total));
        self.current_page
    }

    /// Pull the current page back inside the range after rows disappeared.
    ///
    /// Never moves the page forward.
    pub fn clamp_down(&mut self, total: usize) -> bool {
        let total_pages = self.total_pages(total);
        if self.current_page > total_pages {
            self.current_page = total_pages;
            true
        } else {
            false
        }
    }

    /// Return to the first page
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Check if we can navigate to next page
    pub fn can_go_next(&self, total: usize) -> bool {
        self.current_page < self.total_pages(total)
    }

    /// Check if we can navigate to previous page
    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Navigate to next page
    pub fn go_next(&mut self, total: usize) -> bool {
        if self.can_go_next(total) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Navigate to previous page
    pub fn go_prev(&mut self) -> bool {
        if self.can_go_prev() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }
}

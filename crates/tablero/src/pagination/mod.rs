//! Pagination engine: page window arithmetic for a data table.
//!
//! The engine knows the data only by its length. It owns the current page
//! and page size, clamps every navigation request instead of rejecting it,
//! and derives the page slice, the footer sentence and the page-button strip
//! on demand.

mod page_list;

pub use page_list::{build_page_list, PageEntry};

use std::ops::Range;

/// Page size used when a requested size is invalid
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Advance one page (clamped at the last page)
    Next,
    /// Go back one page (clamped at the first page)
    Prev,
    /// Jump to a page (clamped into range)
    GoTo(usize),
    /// Change the page size (0 falls back to [`DEFAULT_PAGE_SIZE`]) and
    /// return to the first page
    SetPageSize(usize),
}

/// The footer line of a paginated table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterSummary {
    /// 1-based ordinal of the first visible row, 0 when there is no data
    pub start: usize,
    /// 1-based ordinal of the last visible row, 0 when there is no data
    pub end: usize,
    /// Total number of rows
    pub total: usize,
}

impl std::fmt::Display for FooterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.start, self.end, self.total
        )
    }
}

/// Pager over a sequence known only by length.
///
/// Invariant: `1 <= current_page <= max(total_pages, 1)` and
/// `total_pages = ceil(total_items / page_size)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    page_size: usize,
    current_page: usize,
    total_pages: usize,
}

impl Paginator {
    /// Creates a pager over `total_items` rows with the default page size
    #[must_use]
    pub fn new(total_items: usize) -> Self {
        Self::with_page_size(total_items, DEFAULT_PAGE_SIZE)
    }

    /// Creates a pager with an explicit page size (0 falls back to the
    /// default), positioned on the first page
    #[must_use]
    pub fn with_page_size(total_items: usize, page_size: usize) -> Self {
        let page_size = coerce_page_size(page_size);
        Self {
            total_items,
            page_size,
            current_page: 1,
            total_pages: total_items.div_ceil(page_size),
        }
    }

    /// Applies one navigation request
    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::Next => self.next(),
            PageAction::Prev => self.prev(),
            PageAction::GoTo(page) => self.go_to(page),
            PageAction::SetPageSize(size) => self.set_page_size(size),
        }
    }

    /// Changes the page size and returns to the first page. An invalid
    /// size (0) is coerced to [`DEFAULT_PAGE_SIZE`] rather than rejected.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = coerce_page_size(page_size);
        self.total_pages = self.total_items.div_ceil(self.page_size);
        self.current_page = 1;
    }

    /// Tells the pager the backing data changed size, re-clamping the
    /// current page if it fell off the end
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.total_pages = total_items.div_ceil(self.page_size);
        self.current_page = self.current_page.min(self.total_pages.max(1));
    }

    /// Jumps to `page`, clamped into range; a no-op when already there
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages.max(1));
    }

    /// Advances one page; a no-op on the last page
    pub fn next(&mut self) {
        if self.current_page < self.total_pages {
            self.current_page += 1;
        }
    }

    /// Goes back one page; a no-op on the first page
    pub fn prev(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// The current page, 1-based
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages (0 for an empty data set)
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Rows per page
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of rows
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Whether a "previous" control should be active
    #[must_use]
    pub fn prev_enabled(&self) -> bool {
        self.current_page != 1
    }

    /// Whether a "next" control should be active
    #[must_use]
    pub fn next_enabled(&self) -> bool {
        self.current_page != self.total_pages
    }

    /// Index range of the current page within the data
    #[must_use]
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total_items);
        start.min(end)..end
    }

    /// The current page's rows. Indices are clamped to `rows`, so a slice
    /// shorter than the advertised total never panics.
    #[must_use]
    pub fn page_slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let range = self.page_range();
        let start = range.start.min(rows.len());
        let end = range.end.min(rows.len());
        &rows[start..end]
    }

    /// The footer sentence data; all zeros for an empty data set
    #[must_use]
    pub fn footer_summary(&self) -> FooterSummary {
        if self.total_items == 0 {
            return FooterSummary {
                start: 0,
                end: 0,
                total: 0,
            };
        }
        let start = (self.current_page - 1) * self.page_size + 1;
        let end = (self.current_page * self.page_size).min(self.total_items);
        FooterSummary {
            start,
            end,
            total: self.total_items,
        }
    }

    /// The page-button strip for the current position
    #[must_use]
    pub fn page_list(&self) -> Vec<PageEntry> {
        build_page_list(self.current_page, self.total_pages)
    }
}

fn coerce_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

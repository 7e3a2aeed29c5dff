//! Page-number resolution and pagination metadata.
//!
//! Page numbers arrive as raw query-string values and are resolved with
//! forgiving semantics: anything non-numeric falls back to the first page,
//! anything outside the valid range clamps to the last page. An empty result
//! set still has exactly one (empty) page.

/// Resolves raw page parameters against a known item count.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    total_items: i64,
    page_size: i64,
}

impl Paginator {
    /// Creates a paginator. `page_size` must be positive.
    pub fn new(total_items: i64, page_size: i64) -> Self {
        debug_assert!(page_size > 0);
        Self {
            total_items: total_items.max(0),
            page_size,
        }
    }

    /// Total number of pages, always at least 1.
    pub fn num_pages(&self) -> i64 {
        if self.total_items == 0 {
            return 1;
        }
        (self.total_items as u64).div_ceil(self.page_size as u64) as i64
    }

    /// Resolves a raw page parameter to a valid page number.
    ///
    /// - missing or non-numeric input resolves to page 1
    /// - numeric input outside `1..=num_pages` clamps to the last page
    pub fn resolve(&self, raw: Option<&str>) -> i64 {
        let Some(raw) = raw else { return 1 };

        match raw.trim().parse::<i64>() {
            Ok(n) if (1..=self.num_pages()).contains(&n) => n,
            Ok(_) => self.num_pages(),
            Err(_) => 1,
        }
    }

    /// SQL offset for the given (already resolved) page number.
    pub fn offset(&self, page: i64) -> i64 {
        (page - 1) * self.page_size
    }

    /// Wraps fetched items into a [`Page`] with navigation metadata.
    pub fn page<T>(&self, items: Vec<T>, number: i64) -> Page<T> {
        Page {
            items,
            number,
            total_pages: self.num_pages(),
            total_items: self.total_items,
        }
    }
}

/// One page of results plus the metadata templates need for navigation.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: i64,
    pub total_pages: i64,
    pub total_items: i64,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn previous_number(&self) -> i64 {
        self.number - 1
    }

    pub fn next_number(&self) -> i64 {
        self.number + 1
    }
}

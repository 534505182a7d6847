//! Pagination parameters and paginated results shared by listing operations.

/// Zero-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of items per page. Never zero.
    pub per_page: u64,
}

impl PageParam {
    /// Creates a page request, clamping `per_page` to at least one item.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page,
            per_page: per_page.max(1),
        }
    }
}

/// One page of items along with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    /// Items for this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Wraps a fetched page together with the total item count.
    pub fn new(items: Vec<T>, total: u64, param: PageParam) -> Self {
        Self {
            items,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: total.div_ceil(param.per_page),
        }
    }
}

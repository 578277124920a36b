//! Page-number pagination and its translation into row ranges.

use serde::Deserialize;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// 1-based page number plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Zero-based inclusive row range covered by this page.
    ///
    /// `page` and `page_size` are floored at 1. Bounds saturate at
    /// `i64::MAX`, so a page beyond the addressable rows is empty.
    pub fn range(&self) -> RowRange {
        let page = self.page.max(1);
        let size = self.page_size.max(1);
        RowRange {
            from: (page - 1).saturating_mul(size),
            to: page.saturating_mul(size).saturating_sub(1),
        }
    }
}

/// Inclusive, zero-based row range `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub from: i64,
    pub to: i64,
}

impl RowRange {
    /// SQL `OFFSET` for this range.
    pub fn offset(&self) -> i64 {
        self.from
    }

    /// SQL `LIMIT` for this range. Zero when the range is empty.
    pub fn limit(&self) -> i64 {
        self.to.saturating_sub(self.from).saturating_add(1).max(0)
    }
}

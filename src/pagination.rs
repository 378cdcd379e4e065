//! Result-window pagination.
//!
//! ```rust
//! use dqlkit::{paginate, DqlBuilder};
//!
//! let mut qb = DqlBuilder::new();
//! paginate(&mut qb, 25, 50);
//! assert_eq!(qb.first_result(), Some(50));
//! assert_eq!(qb.max_results(), Some(25));
//!
//! // A non-positive limit leaves the window unbounded.
//! let mut qb = DqlBuilder::new();
//! paginate(&mut qb, 0, 50);
//! assert_eq!(qb.max_results(), None);
//! ```

use crate::builder::QueryBuilder;

/// Pagination window for a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Number of records to skip.
    pub skip: Option<u64>,
    /// Maximum number of records to take.
    pub take: Option<u64>,
}

impl Pagination {
    /// Create a pagination with no limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of records to skip.
    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Set the maximum number of records to take.
    pub fn take(mut self, take: u64) -> Self {
        self.take = Some(take);
        self
    }

    /// Window for the first `n` records.
    pub fn first(n: u64) -> Self {
        Self::new().take(n)
    }

    /// Window for a page (1-indexed).
    pub fn page(page: u64, page_size: u64) -> Self {
        let skip = page.saturating_sub(1) * page_size;
        Self::new().skip(skip).take(page_size)
    }

    /// Check if any window is specified.
    pub fn is_empty(&self) -> bool {
        self.skip.is_none() && self.take.is_none()
    }

    /// Apply this window to a builder.
    pub fn apply(&self, qb: &mut impl QueryBuilder) {
        if let Some(skip) = self.skip {
            qb.set_first_result(skip);
        }
        if let Some(take) = self.take {
            qb.set_max_results(take);
        }
    }
}

/// Apply `(offset, limit)` to the builder when `limit` is positive.
///
/// A non-positive limit is a no-op: the result set stays unbounded. A
/// negative offset is clamped to zero.
pub fn paginate(qb: &mut impl QueryBuilder, limit: i64, offset: i64) {
    if limit > 0 {
        Pagination::new()
            .skip(offset.max(0) as u64)
            .take(limit as u64)
            .apply(qb);
    }
}

// src/shared/pagination.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row window for list queries. `None` on either side means "not applied".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    #[error("limit must be greater than 0")]
    InvalidLimit,

    #[error("offset is a page number and must start at 1")]
    InvalidPage,

    #[error("limit or page is too large")]
    OutOfRange,
}

/// Largest limit or row offset Postgres accepts as a BIGINT bind.
const MAX_ROWS: u64 = i64::MAX as u64;

impl PageRequest {
    /// All rows.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// `page` is 1-based: row offset is `(page - 1) * limit`.
    /// A page without a limit has nothing to multiply and is ignored.
    pub fn from_page(limit: Option<u64>, page: Option<u64>) -> Result<Self, PageRequestError> {
        if limit == Some(0) {
            return Err(PageRequestError::InvalidLimit);
        }
        if page == Some(0) {
            return Err(PageRequestError::InvalidPage);
        }
        if limit.is_some_and(|l| l > MAX_ROWS) {
            return Err(PageRequestError::OutOfRange);
        }

        let offset = match (limit, page) {
            (Some(limit), Some(page)) => Some(
                (page - 1)
                    .checked_mul(limit)
                    .filter(|rows| *rows <= MAX_ROWS)
                    .ok_or(PageRequestError::OutOfRange)?,
            ),
            _ => None,
        };

        Ok(Self { limit, offset })
    }
}

/// A page of rows plus the total row count under the same filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_matches_no_offset() {
        let first = PageRequest::from_page(Some(10), Some(1)).unwrap();
        assert_eq!(first.limit, Some(10));
        assert_eq!(first.offset, Some(0));
    }

    #[test]
    fn test_second_page_skips_one_window() {
        let second = PageRequest::from_page(Some(10), Some(2)).unwrap();
        assert_eq!(second.offset, Some(10));
    }

    #[test]
    fn test_no_params_is_unbounded() {
        assert_eq!(
            PageRequest::from_page(None, None).unwrap(),
            PageRequest::unbounded()
        );
    }

    #[test]
    fn test_page_without_limit_is_ignored() {
        let page = PageRequest::from_page(None, Some(3)).unwrap();
        assert_eq!(page.offset, None);
        assert_eq!(page.limit, None);
    }

    #[test]
    fn test_zero_page_rejected() {
        assert_eq!(
            PageRequest::from_page(Some(10), Some(0)),
            Err(PageRequestError::InvalidPage)
        );
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert_eq!(
            PageRequest::from_page(Some(0), None),
            Err(PageRequestError::InvalidLimit)
        );
    }

    #[test]
    fn test_offset_overflow_rejected() {
        assert_eq!(
            PageRequest::from_page(Some(10), Some(1_000_000_000_000_000_000)),
            Err(PageRequestError::OutOfRange)
        );
    }

    #[test]
    fn test_offset_above_bigint_rejected() {
        // 2^62 * 2 = 2^63, one past i64::MAX
        assert_eq!(
            PageRequest::from_page(Some(1 << 62), Some(3)),
            Err(PageRequestError::OutOfRange)
        );
    }

    #[test]
    fn test_limit_above_bigint_rejected() {
        assert_eq!(
            PageRequest::from_page(Some(u64::MAX), None),
            Err(PageRequestError::OutOfRange)
        );
    }

    #[test]
    fn test_largest_bigint_offset_accepted() {
        let page = PageRequest::from_page(Some(MAX_ROWS), Some(2)).unwrap();
        assert_eq!(page.offset, Some(MAX_ROWS));
    }
}

//! Pagination value objects
//!
//! [`PageRequest`] derives skip/limit offsets from the raw `page`/`size`
//! query parameters. Values that are missing or fail to parse fall back to
//! the defaults, and `size` is capped at [`MAX_PAGE_SIZE`].

/// Page number used when the parameter is missing, non-numeric, or < 1.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the parameter is missing, non-numeric, or < 1.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on the page size a single request may ask for.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Resolved pagination window for a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of records to skip
    pub skip: i64,
    /// Maximum number of records to return
    pub limit: i64,
}

impl PageRequest {
    /// Resolves raw `page`/`size` parameters into a skip/limit window.
    ///
    /// `page` defaults to [`DEFAULT_PAGE`] when unset, non-numeric, or less
    /// than 1; `size` defaults to [`DEFAULT_PAGE_SIZE`] under the same
    /// conditions and is capped at [`MAX_PAGE_SIZE`]. The window is then
    /// `skip = (page - 1) * size`, `limit = size`.
    pub fn resolve(page: Option<&str>, size: Option<&str>) -> Self {
        let page = parse_param(page).filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let size = parse_param(size)
            .filter(|s| *s >= 1)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        Self {
            skip: (page - 1).saturating_mul(size),
            limit: size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

fn parse_param(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let resolved = PageRequest::resolve(None, None);
        assert_eq!(resolved.skip, 0);
        assert_eq!(resolved.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_explicit_window() {
        let resolved = PageRequest::resolve(Some("3"), Some("5"));
        assert_eq!(resolved.skip, 10);
        assert_eq!(resolved.limit, 5);
    }

    #[test]
    fn test_size_capped() {
        let resolved = PageRequest::resolve(Some("2"), Some("1000"));
        assert_eq!(resolved.limit, MAX_PAGE_SIZE);
        assert_eq!(resolved.skip, MAX_PAGE_SIZE);
    }
}

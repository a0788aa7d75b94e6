//! Tests for the pagination calculator

use core_kernel::{PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use proptest::prelude::*;

#[test]
fn test_unset_parameters_resolve_to_first_page() {
    let resolved = PageRequest::resolve(None, None);
    assert_eq!(resolved.skip, 0);
    assert_eq!(resolved.limit, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_non_numeric_parameters_treated_as_absent() {
    let resolved = PageRequest::resolve(Some("two"), Some("ten"));
    assert_eq!(resolved.skip, 0);
    assert_eq!(resolved.limit, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_page_floor_is_one() {
    for page in ["0", "-1", "-100"] {
        let resolved = PageRequest::resolve(Some(page), Some("5"));
        assert_eq!(resolved.skip, 0, "page {page} should resolve to page 1");
        assert_eq!(resolved.limit, 5);
    }
}

#[test]
fn test_size_floor_is_default() {
    for size in ["0", "-3"] {
        let resolved = PageRequest::resolve(Some("2"), Some(size));
        assert_eq!(resolved.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(resolved.skip, DEFAULT_PAGE_SIZE);
    }
}

#[test]
fn test_second_page_window() {
    let resolved = PageRequest::resolve(Some("2"), Some("1"));
    assert_eq!(resolved.skip, 1);
    assert_eq!(resolved.limit, 1);
}

#[test]
fn test_size_is_capped() {
    let resolved = PageRequest::resolve(None, Some("5000"));
    assert_eq!(resolved.limit, MAX_PAGE_SIZE);
}

proptest! {
    #[test]
    fn prop_page_below_one_defaults_to_first_page(page in i64::MIN..1) {
        let raw = page.to_string();
        let resolved = PageRequest::resolve(Some(raw.as_str()), None);
        prop_assert_eq!(resolved.skip, 0);
        prop_assert_eq!(resolved.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn prop_size_below_one_defaults(size in i64::MIN..1) {
        let raw = size.to_string();
        let resolved = PageRequest::resolve(None, Some(raw.as_str()));
        prop_assert_eq!(resolved.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn prop_limit_stays_within_bounds(size in any::<i64>()) {
        let raw = size.to_string();
        let resolved = PageRequest::resolve(None, Some(raw.as_str()));
        prop_assert!(resolved.limit >= 1);
        prop_assert!(resolved.limit <= MAX_PAGE_SIZE);
    }

    #[test]
    fn prop_skip_is_page_minus_one_times_limit(page in 1i64..10_000, size in 1i64..=MAX_PAGE_SIZE) {
        let raw_page = page.to_string();
        let raw_size = size.to_string();
        let resolved = PageRequest::resolve(Some(raw_page.as_str()), Some(raw_size.as_str()));
        prop_assert_eq!(resolved.skip, (page - 1) * resolved.limit);
    }
}

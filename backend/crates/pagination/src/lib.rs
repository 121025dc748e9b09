//! Page-number pagination primitives shared by catalogue endpoints.
//!
//! Pages are 1-indexed. A request for page zero or for a zero-sized page
//! yields an empty page, as does any page that starts past the end of the
//! input. Slicing never panics: arithmetic overflow is treated as a page
//! beyond the end.
//!
//! ```
//! use pagination::{PageRequest, paginate};
//!
//! let items: Vec<u32> = (0..25).collect();
//! let page = paginate(&items, PageRequest::new(3, 10));
//! assert_eq!(page, &[20, 21, 22, 23, 24]);
//! assert!(paginate(&items, PageRequest::new(4, 10)).is_empty());
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Page number used when the caller does not ask for one.
pub const DEFAULT_PAGE_NUMBER: usize = 1;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A 1-indexed page request.
///
/// Zero in either field is a valid value and selects an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    number: usize,
    size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

impl PageRequest {
    /// Build a page request from a 1-indexed page number and a page size.
    #[must_use]
    pub const fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    /// The 1-indexed page number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// The maximum number of items on the page.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Resolve the half-open index range of this page within `len` items.
    ///
    /// Returns `None` when the page is empty: page or size of zero, a start
    /// index at or past `len`, or an index computation that overflows.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// assert_eq!(PageRequest::new(2, 10).bounds(15), Some(10..15));
    /// assert_eq!(PageRequest::new(0, 10).bounds(15), None);
    /// ```
    #[must_use]
    pub fn bounds(&self, len: usize) -> Option<Range<usize>> {
        if self.number == 0 || self.size == 0 {
            return None;
        }
        let start = (self.number - 1).checked_mul(self.size)?;
        if start >= len {
            return None;
        }
        let end = self.number.checked_mul(self.size).map_or(len, |end| end.min(len));
        Some(start..end)
    }
}

/// Borrow the requested page out of `items`.
///
/// The input is left untouched; the result is a view into it.
#[must_use]
pub fn paginate<T>(items: &[T], request: PageRequest) -> &[T] {
    request
        .bounds(items.len())
        .and_then(|range| items.get(range))
        .unwrap_or_default()
}

/// Consume `items` and keep only the requested page.
///
/// # Examples
/// ```
/// use pagination::{PageRequest, into_page};
///
/// let page = into_page(vec!["a", "b", "c"], PageRequest::new(2, 2));
/// assert_eq!(page, vec!["c"]);
/// ```
#[must_use]
pub fn into_page<T>(mut items: Vec<T>, request: PageRequest) -> Vec<T> {
    match request.bounds(items.len()) {
        Some(range) => {
            items.truncate(range.end);
            items.drain(..range.start);
            items
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for page bounds and slicing.

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn items() -> Vec<usize> {
        (0..25).collect()
    }

    #[rstest]
    #[case(1, 10, 0..10)]
    #[case(2, 10, 10..20)]
    #[case(3, 10, 20..25)]
    #[case(1, 25, 0..25)]
    #[case(1, 100, 0..25)]
    #[case(25, 1, 24..25)]
    fn pages_within_range_select_expected_items(
        items: Vec<usize>,
        #[case] number: usize,
        #[case] size: usize,
        #[case] expected: Range<usize>,
    ) {
        let page = paginate(&items, PageRequest::new(number, size));
        let wanted: Vec<usize> = expected.collect();
        assert_eq!(page, wanted.as_slice());
    }

    #[rstest]
    #[case(0, 10)]
    #[case(1, 0)]
    #[case(0, 0)]
    #[case(4, 10)]
    #[case(26, 1)]
    #[case(usize::MAX, 2)]
    #[case(2, usize::MAX)]
    fn empty_pages_never_panic(items: Vec<usize>, #[case] number: usize, #[case] size: usize) {
        assert!(paginate(&items, PageRequest::new(number, size)).is_empty());
        assert!(into_page(items, PageRequest::new(number, size)).is_empty());
    }

    #[rstest]
    fn page_length_matches_remaining_items(items: Vec<usize>) {
        let len = items.len();
        for number in 1..=8 {
            for size in 1..=12 {
                let start = (number - 1) * size;
                let expected = size.min(len.saturating_sub(start));
                let page = paginate(&items, PageRequest::new(number, size));
                assert_eq!(page.len(), expected, "page {number} size {size}");
            }
        }
    }

    #[rstest]
    fn into_page_matches_borrowed_view(items: Vec<usize>) {
        let request = PageRequest::new(2, 7);
        let borrowed = paginate(&items, request).to_vec();
        assert_eq!(into_page(items, request), borrowed);
    }

    #[rstest]
    fn slicing_leaves_input_untouched(items: Vec<usize>) {
        let before = items.clone();
        let _page = paginate(&items, PageRequest::new(2, 10));
        assert_eq!(items, before);
    }

    #[test]
    fn empty_input_yields_empty_first_page() {
        let items: Vec<u8> = Vec::new();
        assert!(paginate(&items, PageRequest::default()).is_empty());
    }

    #[test]
    fn default_request_is_first_page_of_ten() {
        let request = PageRequest::default();
        assert_eq!(request.number(), DEFAULT_PAGE_NUMBER);
        assert_eq!(request.size(), DEFAULT_PAGE_SIZE);
    }
}

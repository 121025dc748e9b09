//! Listing criteria: tag filters, sort order and page selection.
//!
//! These types carry client intent into the persistence adapter without any
//! SQL. Tag values are opaque text bound as statement arguments; sort order
//! is restricted to a closed set of fields so client text never reaches the
//! statement.

use pagination::PageRequest;

use super::sock::TAG_DELIMITER;

/// Disjunctive tag filter: a sock matches when it carries any listed tag.
///
/// # Examples
/// ```
/// use catalogue::domain::TagFilter;
///
/// assert!(TagFilter::parse("").is_empty());
/// assert_eq!(TagFilter::parse("red,blue").values(), ["red", "blue"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter(Vec<String>);

impl TagFilter {
    /// A filter matching every sock.
    #[must_use]
    pub const fn any() -> Self {
        Self(Vec::new())
    }

    /// Parse the comma-separated `tags` query value.
    ///
    /// An empty string applies no filter. Otherwise the value is split on
    /// commas without trimming, so empty segments become empty tag names.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::any();
        }
        Self(raw.split(TAG_DELIMITER).map(str::to_owned).collect())
    }

    /// Tag names in request order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Whether the filter matches every sock.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TagFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Sock attributes a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Store identifier.
    Id,
    /// Display name.
    Name,
    /// Description text.
    Description,
    /// Unit price.
    Price,
    /// Units in stock.
    Count,
}

impl SortField {
    /// Resolve a field name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [
            Self::Id,
            Self::Name,
            Self::Description,
            Self::Price,
            Self::Count,
        ]
        .into_iter()
        .find(|field| field.as_str().eq_ignore_ascii_case(name))
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Description => "description",
            Self::Price => "price",
            Self::Count => "count",
        }
    }
}

/// Direction of a listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// A resolved ordering for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOrder {
    /// Attribute to order by.
    pub field: SortField,
    /// Direction of the ordering.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Ascending order on `field`.
    #[must_use]
    pub const fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending order on `field`.
    #[must_use]
    pub const fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Parse the `order` query value.
    ///
    /// Accepts a field name with an optional leading `-` for descending
    /// order. Empty or unrecognised values yield `None`, leaving the store's
    /// natural order in place.
    ///
    /// # Examples
    /// ```
    /// use catalogue::domain::{SortField, SortOrder};
    ///
    /// assert_eq!(SortOrder::parse("price"), Some(SortOrder::ascending(SortField::Price)));
    /// assert_eq!(SortOrder::parse("-Name"), Some(SortOrder::descending(SortField::Name)));
    /// assert_eq!(SortOrder::parse("price; DROP TABLE sock"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.strip_prefix('-') {
            Some(name) => SortField::from_name(name).map(Self::descending),
            None => SortField::from_name(raw).map(Self::ascending),
        }
    }
}

/// Everything needed to answer a catalogue listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSocksRequest {
    /// Tag filter; empty matches every sock.
    pub tags: TagFilter,
    /// Optional ordering; `None` keeps store order.
    pub sort: Option<SortOrder>,
    /// Page to return.
    pub page: PageRequest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &[])]
    #[case("red", &["red"])]
    #[case("red,blue", &["red", "blue"])]
    #[case("red,,blue", &["red", "", "blue"])]
    #[case(",", &["", ""])]
    #[case("red, blue", &["red", " blue"])]
    fn tag_filter_splits_without_trimming(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(TagFilter::parse(raw).values(), expected);
    }

    #[rstest]
    #[case("id", SortOrder::ascending(SortField::Id))]
    #[case("PRICE", SortOrder::ascending(SortField::Price))]
    #[case("-count", SortOrder::descending(SortField::Count))]
    #[case("-Description", SortOrder::descending(SortField::Description))]
    fn sort_order_accepts_allow_listed_fields(#[case] raw: &str, #[case] expected: SortOrder) {
        assert_eq!(SortOrder::parse(raw), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("--price")]
    #[case("tag")]
    #[case("price desc")]
    #[case("sock.price")]
    #[case("1")]
    fn sort_order_ignores_anything_else(#[case] raw: &str) {
        assert_eq!(SortOrder::parse(raw), None);
    }

    #[test]
    fn default_request_lists_everything_on_the_first_page() {
        let request = ListSocksRequest::default();
        assert!(request.tags.is_empty());
        assert!(request.sort.is_none());
        assert_eq!(request.page, PageRequest::new(1, 10));
    }
}

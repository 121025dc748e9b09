//! Statement construction for catalogue reads.
//!
//! Builders are pure: they return statement text plus positional arguments
//! and never touch the store. Tag values always travel as bound arguments;
//! ordering uses fixed column fragments selected from [`SortField`].

use crate::domain::{SortDirection, SortField, SortOrder, TagFilter};

const SOCK_JOIN: &str = "FROM sock \
    JOIN sock_tag ON sock.sock_id = sock_tag.sock_id \
    JOIN tag ON sock_tag.tag_id = tag.tag_id";

const SOCK_COLUMNS: &str = "SELECT sock.sock_id AS id, sock.name, sock.description, \
    sock.price, sock.count, sock.image_url_1, sock.image_url_2, \
    GROUP_CONCAT(tag.name) AS tag_name";

const GROUP_BY_SOCK: &str = " GROUP BY sock.sock_id";

/// Statement for the tag listing.
pub const TAG_NAMES: &str = "SELECT name FROM tag";

/// Statement text with its positional `?` arguments in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    /// SQL text containing one `?` per argument.
    pub text: String,
    /// Values bound to the placeholders, left to right.
    pub args: Vec<String>,
}

impl BuiltQuery {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            args: Vec::new(),
        }
    }

    fn push_tag_predicate(&mut self, tags: &TagFilter) {
        for (index, tag) in tags.values().iter().enumerate() {
            self.text
                .push_str(if index == 0 { " WHERE tag.name = ?" } else { " OR tag.name = ?" });
            self.args.push(tag.clone());
        }
    }
}

/// Column fragment for `field`.
pub const fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::Id => "sock.sock_id",
        SortField::Name => "sock.name",
        SortField::Description => "sock.description",
        SortField::Price => "sock.price",
        SortField::Count => "sock.count",
    }
}

/// Listing statement: every sock carrying any tag of `tags`, one aggregated
/// row per sock, ordered by `sort` when given.
pub fn build_list(tags: &TagFilter, sort: Option<SortOrder>) -> BuiltQuery {
    let mut query = BuiltQuery::new(format!("{SOCK_COLUMNS} {SOCK_JOIN}"));
    query.push_tag_predicate(tags);
    query.text.push_str(GROUP_BY_SOCK);
    if let Some(order) = sort {
        let direction = match order.direction {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        };
        query.text.push_str(" ORDER BY ");
        query.text.push_str(sort_column(order.field));
        query.text.push(' ');
        query.text.push_str(direction);
    }
    query
}

/// Single sock by identifier.
pub fn build_by_id(id: &str) -> BuiltQuery {
    let mut query = BuiltQuery::new(format!(
        "{SOCK_COLUMNS} {SOCK_JOIN} WHERE sock.sock_id = ?{GROUP_BY_SOCK}"
    ));
    query.args.push(id.to_owned());
    query
}

/// Number of distinct socks carrying any tag of `tags`.
pub fn build_count(tags: &TagFilter) -> BuiltQuery {
    let mut query = BuiltQuery::new(format!("SELECT COUNT(DISTINCT sock.sock_id) {SOCK_JOIN}"));
    query.push_tag_predicate(tags);
    query
}

#[cfg(test)]
#[path = "query_builder_tests.rs"]
mod tests;

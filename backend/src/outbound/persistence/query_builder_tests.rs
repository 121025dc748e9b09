//! Statement shapes for the catalogue query builders.

use rstest::rstest;

use super::*;

fn placeholders(text: &str) -> usize {
    text.matches('?').count()
}

#[rstest]
fn unfiltered_listing_has_no_predicate_and_groups_per_sock() {
    let query = build_list(&TagFilter::any(), None);

    assert!(query.text.starts_with("SELECT sock.sock_id AS id"));
    assert!(query.text.contains("GROUP_CONCAT(tag.name) AS tag_name"));
    assert!(!query.text.contains("WHERE"));
    assert!(query.text.ends_with("GROUP BY sock.sock_id"));
    assert!(query.args.is_empty());
}

#[rstest]
fn tag_filter_is_disjunctive_and_bound() {
    let query = build_list(&TagFilter::parse("red,blue"), None);

    assert!(
        query
            .text
            .contains("WHERE tag.name = ? OR tag.name = ? GROUP BY sock.sock_id")
    );
    assert_eq!(query.args, ["red", "blue"]);
}

#[rstest]
#[case("red", 1)]
#[case("red,blue", 2)]
#[case("red,,blue", 3)]
#[case(",", 2)]
fn one_placeholder_per_tag_value(#[case] raw: &str, #[case] expected: usize) {
    let query = build_list(&TagFilter::parse(raw), None);

    assert_eq!(placeholders(&query.text), expected);
    assert_eq!(query.args.len(), expected);
}

#[rstest]
fn tag_text_never_reaches_the_statement() {
    let hostile = "red' OR '1'='1";
    let query = build_list(&TagFilter::parse(hostile), None);

    assert!(!query.text.contains(hostile));
    assert_eq!(query.args, [hostile]);
}

#[rstest]
#[case(SortOrder::ascending(SortField::Price), " ORDER BY sock.price ASC")]
#[case(SortOrder::descending(SortField::Name), " ORDER BY sock.name DESC")]
#[case(SortOrder::ascending(SortField::Id), " ORDER BY sock.sock_id ASC")]
fn ordering_follows_grouping(#[case] order: SortOrder, #[case] suffix: &str) {
    let query = build_list(&TagFilter::parse("red"), Some(order));

    assert!(query.text.ends_with(&format!("GROUP BY sock.sock_id{suffix}")));
    assert_eq!(query.args, ["red"]);
}

#[rstest]
fn by_id_binds_the_identifier() {
    let query = build_by_id("808a2de1");

    assert!(query.text.contains("WHERE sock.sock_id = ? GROUP BY sock.sock_id"));
    assert_eq!(query.args, ["808a2de1"]);
}

#[rstest]
#[case("", 0)]
#[case("red", 1)]
#[case("red,blue,green", 3)]
fn count_shares_the_tag_predicate(#[case] raw: &str, #[case] expected: usize) {
    let query = build_count(&TagFilter::parse(raw));

    assert!(query.text.starts_with("SELECT COUNT(DISTINCT sock.sock_id) FROM sock"));
    assert!(!query.text.contains("GROUP BY"));
    assert_eq!(placeholders(&query.text), expected);
}

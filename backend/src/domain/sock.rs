//! Catalogue entries and their tag and image shapes.
//!
//! The store aggregates every tag of a sock into one comma-delimited string
//! and keeps exactly two image slots. [`Sock`] exposes both as structured
//! values: [`split_tags`] reverses the aggregation losslessly, and
//! [`ImageUrls`] keeps the two slots positional.

use serde::{Deserialize, Serialize};

/// Delimiter the store uses when aggregating tag names.
pub const TAG_DELIMITER: char = ',';

/// Split an aggregated tag string into tag names.
///
/// No trimming is applied and empty segments are kept, so joining the result
/// with [`TAG_DELIMITER`] reproduces the input exactly. An empty input yields
/// a single empty tag.
///
/// # Examples
/// ```
/// use catalogue::domain::split_tags;
///
/// assert_eq!(split_tags("red,blue"), vec!["red", "blue"]);
/// assert_eq!(split_tags(""), vec![""]);
/// ```
#[must_use]
pub fn split_tags(aggregated: &str) -> Vec<String> {
    aggregated.split(TAG_DELIMITER).map(str::to_owned).collect()
}

/// The two fixed image slots of a sock, in storage order.
///
/// An empty string marks an unused slot; the slot keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUrls([String; 2]);

impl ImageUrls {
    /// Build the pair from the first and second storage slot.
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self([first.into(), second.into()])
    }

    /// First slot.
    #[must_use]
    pub fn first(&self) -> &str {
        let [first, _] = &self.0;
        first
    }

    /// Second slot.
    #[must_use]
    pub fn second(&self) -> &str {
        let [_, second] = &self.0;
        second
    }

    /// Both slots in storage order.
    #[must_use]
    pub fn as_array(&self) -> &[String; 2] {
        &self.0
    }

    /// Consume the pair into its slots.
    #[must_use]
    pub fn into_array(self) -> [String; 2] {
        self.0
    }
}

/// A catalogue entry.
///
/// Values are produced by the store; this service never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sock {
    /// Stable identifier assigned by the store.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Image URLs in their two storage slots.
    pub images: ImageUrls,
    /// Unit price.
    pub price: f32,
    /// Units in stock.
    pub count: i32,
    /// Tag names in store aggregation order.
    pub tags: Vec<String>,
}

impl Sock {
    /// Tag names joined back into the store's aggregated form.
    #[must_use]
    pub fn aggregated_tags(&self) -> String {
        self.tags.join(&TAG_DELIMITER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sock_with_tags(tags: Vec<String>) -> Sock {
        Sock {
            id: "a0a4f044-b040-410d-8ead-4de0446aec7e".to_owned(),
            name: "Nerd leg".to_owned(),
            description: "For all those leg lovers out there.".to_owned(),
            images: ImageUrls::new("/catalogue/images/bit_of_leg_1.jpeg", ""),
            price: 7.99,
            count: 115,
            tags,
        }
    }

    #[rstest]
    #[case("red,blue", &["red", "blue"])]
    #[case("red", &["red"])]
    #[case("", &[""])]
    #[case("red,,blue", &["red", "", "blue"])]
    #[case(" red, blue", &[" red", " blue"])]
    #[case("red,", &["red", ""])]
    fn split_keeps_every_segment_verbatim(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(split_tags(raw), expected);
    }

    #[rstest]
    #[case("red,blue")]
    #[case("")]
    #[case("formal,,magic ")]
    fn aggregated_tags_reconstruct_the_store_string(#[case] raw: &str) {
        let sock = sock_with_tags(split_tags(raw));
        assert_eq!(sock.aggregated_tags(), raw);
    }

    #[test]
    fn image_slots_keep_their_position() {
        let images = ImageUrls::new("a.png", "");
        assert_eq!(images.first(), "a.png");
        assert_eq!(images.second(), "");

        let images = ImageUrls::new("", "b.png");
        assert_eq!(images.as_array(), &[String::new(), "b.png".to_owned()]);
    }

    #[test]
    fn image_slots_serialise_as_a_two_element_array() {
        let value = serde_json::to_value(ImageUrls::new("a.png", "")).expect("serialise");
        assert_eq!(value, serde_json::json!(["a.png", ""]));
    }
}

//! Internal sqlx row structs for catalogue reads.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Column names follow the aliases produced
//! by the query builder.

use crate::domain::{ImageUrls, Sock, split_tags};

/// One aggregated row of the listing and by-id statements.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub(crate) struct SockRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f32,
    pub count: i32,
    pub image_url_1: Option<String>,
    pub image_url_2: Option<String>,
    pub tag_name: Option<String>,
}

impl From<SockRow> for Sock {
    fn from(row: SockRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            images: ImageUrls::new(
                row.image_url_1.unwrap_or_default(),
                row.image_url_2.unwrap_or_default(),
            ),
            price: row.price,
            count: row.count,
            tags: split_tags(row.tag_name.as_deref().unwrap_or_default()),
        }
    }
}

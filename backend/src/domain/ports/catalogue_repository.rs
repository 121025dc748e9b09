//! Driven port for reading socks and tags from the catalogue store.
//!
//! Adapters own statement construction and row mapping; the domain sees
//! fully shaped [`Sock`] values in store order.

use async_trait::async_trait;

use crate::domain::{Sock, SortOrder, TagFilter};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading the catalogue store.
    pub enum CatalogueRepositoryError {
        /// A store connection could not be obtained.
        Connection { message: String } =>
            "catalogue store connection failed: {message}",
        /// A statement failed during execution or row decoding.
        Query { message: String } =>
            "catalogue store query failed: {message}",
        /// The store did not answer within the configured deadline.
        Timeout { operation: String } =>
            "catalogue store timed out during {operation}",
    }
}

/// Port for catalogue reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// Socks matching any tag of `tags`, in `sort` order when given.
    ///
    /// An empty filter matches every sock. Without a sort order the store's
    /// natural order is kept.
    async fn list(
        &self,
        tags: &TagFilter,
        sort: Option<SortOrder>,
    ) -> Result<Vec<Sock>, CatalogueRepositoryError>;

    /// The sock with identifier `id`, or `None` when no row matches.
    async fn find_by_id(&self, id: &str) -> Result<Option<Sock>, CatalogueRepositoryError>;

    /// Every tag name; rows that cannot be decoded are skipped.
    async fn tag_names(&self) -> Result<Vec<String>, CatalogueRepositoryError>;

    /// Number of distinct socks matching any tag of `tags`.
    async fn count(&self, tags: &TagFilter) -> Result<i64, CatalogueRepositoryError>;

    /// Check that the store answers.
    async fn ping(&self) -> Result<(), CatalogueRepositoryError>;
}

/// In-memory repository over a fixed set of socks.
///
/// Filtering mirrors the store: a sock matches when any of its tags equals
/// any filter value. Sorting is applied in memory.
#[derive(Debug, Default, Clone)]
pub struct FixtureCatalogueRepository {
    socks: Vec<Sock>,
}

impl FixtureCatalogueRepository {
    /// Serve `socks` in the given order.
    pub fn new(socks: Vec<Sock>) -> Self {
        Self { socks }
    }

    fn matching<'a>(&'a self, tags: &'a TagFilter) -> impl Iterator<Item = &'a Sock> + 'a {
        self.socks.iter().filter(move |sock| {
            tags.is_empty() || sock.tags.iter().any(|tag| tags.values().contains(tag))
        })
    }
}

#[async_trait]
impl CatalogueRepository for FixtureCatalogueRepository {
    async fn list(
        &self,
        tags: &TagFilter,
        sort: Option<SortOrder>,
    ) -> Result<Vec<Sock>, CatalogueRepositoryError> {
        let mut socks: Vec<Sock> = self.matching(tags).cloned().collect();
        if let Some(order) = sort {
            socks.sort_by(|a, b| fixture_ordering(order, a, b));
        }
        Ok(socks)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Sock>, CatalogueRepositoryError> {
        Ok(self.socks.iter().find(|sock| sock.id == id).cloned())
    }

    async fn tag_names(&self) -> Result<Vec<String>, CatalogueRepositoryError> {
        let mut names: Vec<String> = Vec::new();
        for tag in self.socks.iter().flat_map(|sock| sock.tags.iter()) {
            if !names.contains(tag) {
                names.push(tag.clone());
            }
        }
        Ok(names)
    }

    async fn count(&self, tags: &TagFilter) -> Result<i64, CatalogueRepositoryError> {
        let total = self.matching(tags).count();
        i64::try_from(total).map_err(|err| CatalogueRepositoryError::query(err.to_string()))
    }

    async fn ping(&self) -> Result<(), CatalogueRepositoryError> {
        Ok(())
    }
}

fn fixture_ordering(order: SortOrder, a: &Sock, b: &Sock) -> std::cmp::Ordering {
    use crate::domain::{SortDirection, SortField};

    let ordering = match order.field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Description => a.description.cmp(&b.description),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Count => a.count.cmp(&b.count),
    };
    match order.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

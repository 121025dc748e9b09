//! Driving port for the catalogue read use-cases.
//!
//! HTTP handlers depend on this trait only, so they can be exercised against
//! mocks without a store.

use async_trait::async_trait;

use crate::domain::{Error, HealthEntry, ListSocksRequest, Sock, TagFilter};

/// Catalogue read operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// One page of socks matching the request.
    async fn list(&self, request: ListSocksRequest) -> Result<Vec<Sock>, Error>;

    /// A single sock; [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn get(&self, id: &str) -> Result<Sock, Error>;

    /// Every tag name.
    async fn tags(&self) -> Result<Vec<String>, Error>;

    /// Number of socks matching any tag of `tags`.
    async fn count(&self, tags: TagFilter) -> Result<i64, Error>;

    /// Health of this service and its store. Never fails.
    async fn health(&self) -> Vec<HealthEntry>;
}

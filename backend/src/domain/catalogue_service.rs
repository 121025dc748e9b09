//! Catalogue read service implementing the driving port.
//!
//! Composes the repository with page slicing and maps store failures onto
//! domain errors. No state is shared between calls.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, warn};

use crate::domain::ports::{CatalogueQuery, CatalogueRepository, CatalogueRepositoryError};
use crate::domain::{
    Error, HealthEntry, HealthStatus, ListSocksRequest, SERVICE_NAME, STORE_NAME, Sock, TagFilter,
};

/// Catalogue service backed by a [`CatalogueRepository`].
#[derive(Clone)]
pub struct CatalogueService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> CatalogueService<R> {
    /// Create a service over `repository`, stamping health reports with `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

impl<R> CatalogueService<R>
where
    R: CatalogueRepository,
{
    fn map_repository_error(error: CatalogueRepositoryError) -> Error {
        match error {
            CatalogueRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("catalogue store unavailable: {message}"))
            }
            CatalogueRepositoryError::Timeout { operation } => {
                Error::service_unavailable(format!("catalogue store timed out during {operation}"))
            }
            CatalogueRepositoryError::Query { message } => {
                Error::internal(format!("catalogue store error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> CatalogueQuery for CatalogueService<R>
where
    R: CatalogueRepository,
{
    async fn list(&self, request: ListSocksRequest) -> Result<Vec<Sock>, Error> {
        let ListSocksRequest { tags, sort, page } = request;
        let socks = self
            .repository
            .list(&tags, sort)
            .await
            .map_err(Self::map_repository_error)?;
        debug!(
            matched = socks.len(),
            page = page.number(),
            size = page.size(),
            "catalogue listing fetched"
        );
        Ok(pagination::into_page(socks, page))
    }

    async fn get(&self, id: &str) -> Result<Sock, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("sock {id} not found")))
    }

    async fn tags(&self) -> Result<Vec<String>, Error> {
        self.repository
            .tag_names()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn count(&self, tags: TagFilter) -> Result<i64, Error> {
        self.repository
            .count(&tags)
            .await
            .map_err(Self::map_repository_error)
    }

    async fn health(&self) -> Vec<HealthEntry> {
        let store_status = match self.repository.ping().await {
            Ok(()) => HealthStatus::Ok,
            Err(error) => {
                warn!(%error, "catalogue store ping failed");
                HealthStatus::Err
            }
        };
        vec![
            HealthEntry::new(SERVICE_NAME, HealthStatus::Ok, self.clock.utc()),
            HealthEntry::new(STORE_NAME, store_status, self.clock.utc()),
        ]
    }
}

#[cfg(test)]
#[path = "catalogue_service_tests.rs"]
mod tests;

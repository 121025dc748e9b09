//! MySQL-backed catalogue read adapter.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::{Connection as _, Row as _};
use tracing::warn;

use crate::domain::ports::{CatalogueRepository, CatalogueRepositoryError};
use crate::domain::{Sock, SortOrder, TagFilter};

use super::models::SockRow;
use super::pool::DbPool;
use super::query_builder::{BuiltQuery, TAG_NAMES, build_by_id, build_count, build_list};
use super::sqlx_error_mapping::{map_pool_error, map_sqlx_error};

/// Default deadline for a single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// sqlx-backed implementation of the catalogue read port.
///
/// Every call checks out its own connection, which returns to the pool when
/// the call finishes, fails or times out.
#[derive(Clone, Debug)]
pub struct SqlxCatalogueRepository {
    pool: DbPool,
    timeout: Duration,
}

impl SqlxCatalogueRepository {
    /// Create a repository over `pool` with [`DEFAULT_STORE_TIMEOUT`].
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Override the per-call deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn with_deadline<T, F>(
        &self,
        operation: &'static str,
        call: F,
    ) -> Result<T, CatalogueRepositoryError>
    where
        F: Future<Output = Result<T, CatalogueRepositoryError>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .unwrap_or_else(|_| Err(CatalogueRepositoryError::timeout(operation)))
    }

    async fn fetch_socks(&self, query: BuiltQuery) -> Result<Vec<Sock>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut statement = sqlx::query_as::<_, SockRow>(&query.text);
        for arg in &query.args {
            statement = statement.bind(arg.as_str());
        }
        let rows = statement
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Sock::from).collect())
    }
}

/// Keep the tag names that decoded, in row order; failed rows are logged
/// and skipped.
fn decodable_names(rows: impl IntoIterator<Item = Result<String, sqlx::Error>>) -> Vec<String> {
    rows.into_iter()
        .filter_map(|row| match row {
            Ok(name) => Some(name),
            Err(error) => {
                warn!(%error, "skipping undecodable tag row");
                None
            }
        })
        .collect()
}

#[async_trait]
impl CatalogueRepository for SqlxCatalogueRepository {
    async fn list(
        &self,
        tags: &TagFilter,
        sort: Option<SortOrder>,
    ) -> Result<Vec<Sock>, CatalogueRepositoryError> {
        self.with_deadline("list", self.fetch_socks(build_list(tags, sort)))
            .await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Sock>, CatalogueRepositoryError> {
        let socks = self
            .with_deadline("find_by_id", self.fetch_socks(build_by_id(id)))
            .await?;
        Ok(socks.into_iter().next())
    }

    async fn tag_names(&self) -> Result<Vec<String>, CatalogueRepositoryError> {
        self.with_deadline("tag_names", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            let rows = sqlx::query(TAG_NAMES)
                .fetch_all(&mut *conn)
                .await
                .map_err(map_sqlx_error)?;
            Ok(decodable_names(
                rows.iter().map(|row| row.try_get::<String, _>("name")),
            ))
        })
        .await
    }

    async fn count(&self, tags: &TagFilter) -> Result<i64, CatalogueRepositoryError> {
        let query = build_count(tags);
        self.with_deadline("count", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            let mut statement = sqlx::query_scalar::<_, i64>(&query.text);
            for arg in &query.args {
                statement = statement.bind(arg.as_str());
            }
            statement
                .fetch_one(&mut *conn)
                .await
                .map_err(map_sqlx_error)
        })
        .await
    }

    async fn ping(&self) -> Result<(), CatalogueRepositoryError> {
        self.with_deadline("ping", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            conn.ping().await.map_err(map_sqlx_error)
        })
        .await
    }
}

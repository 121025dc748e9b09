//! MySQL persistence adapters using sqlx.
//!
//! This module provides the concrete implementation of the catalogue
//! repository port backed by MySQL via `sqlx`, with one pooled connection
//! checked out per store call.
//!
//! # Architecture
//!
//! - **Thin adapters**: the repository only translates between sqlx rows and
//!   domain types. No business logic resides here.
//! - **Pure statement builders**: `query_builder` produces statement text and
//!   positional arguments and is tested without a store.
//! - **Internal models**: row structs (`models.rs`) never leave this module.
//! - **Strongly typed errors**: sqlx and pool errors are mapped to
//!   [`crate::domain::ports::CatalogueRepositoryError`].
//!
//! # Example
//!
//! ```no_run
//! use catalogue::outbound::persistence::{DbPool, PoolConfig, SqlxCatalogueRepository};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PoolConfig::new("mysql://catalogue_user:pw@catalogue-db:3306/socksdb");
//! let pool = DbPool::new(&config)?;
//! let repo = SqlxCatalogueRepository::new(pool);
//! # drop(repo);
//! # Ok(())
//! # }
//! ```

mod models;
mod pool;
pub mod query_builder;
mod sqlx_catalogue_repository;
mod sqlx_error_mapping;

pub use pool::{DbPool, PoolConfig, PoolError};
pub use sqlx_catalogue_repository::{DEFAULT_STORE_TIMEOUT, SqlxCatalogueRepository};

//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed catalogue entities used by the API and
//! persistence layers, together with the service that composes them. Keep
//! types immutable and document serialisation contracts (serde) in each
//! type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - Sock (alias to `sock::Sock`): catalogue item with its tag names.
//! - ListSocksRequest (alias to `listing::ListSocksRequest`): filter, sort
//!   and page for a listing.
//! - CatalogueService: read use-cases over a `CatalogueRepository`.

pub mod catalogue_service;
pub mod error;
pub mod health;
pub mod listing;
pub mod ports;
pub mod sock;
pub mod trace_id;

pub use self::catalogue_service::CatalogueService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::health::{HealthEntry, HealthStatus, SERVICE_NAME, STORE_NAME};
pub use self::listing::{ListSocksRequest, SortDirection, SortField, SortOrder, TagFilter};
pub use self::sock::{ImageUrls, Sock, TAG_DELIMITER, split_tags};
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use catalogue::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such sock"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;

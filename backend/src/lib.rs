//! Sock catalogue service library.
//!
//! Layout follows a hexagonal split: [`domain`] holds types, ports and the
//! catalogue service; [`inbound`] adapts HTTP onto the driving port;
//! [`outbound`] implements the repository port on MySQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

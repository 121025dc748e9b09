//! OpenAPI mirrors of the domain error payload.
//!
//! The domain does not derive `ToSchema`; these shadow types are registered
//! under the domain names instead.

use utoipa::ToSchema;

/// Schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The requested sock does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The catalogue store is unreachable or timed out.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Schema for [`crate::domain::Error`], the body of every non-2xx JSON reply.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "fields are read by utoipa only")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "sock 808a2de1 not found")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

//! Health endpoints.
//!
//! `/health` reports the service and its store in the catalogue's own
//! format; `/health/ready` and `/health/live` are bare probes for
//! orchestrators and load balancers.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{HealthEntry, HealthStatus};
use crate::inbound::http::state::HttpState;

/// Readiness flag shared by every worker.
#[derive(Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// Create a health state that is not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn no_store_status(healthy: bool) -> HttpResponse {
        let mut response = if healthy {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// One component of the `/health` report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthEntryResponse {
    /// Component name.
    #[schema(example = "catalogue-db")]
    pub service: String,
    /// `OK` or `err`.
    #[schema(example = "OK")]
    pub status: String,
    /// When the component was checked.
    #[schema(value_type = String, format = DateTime, example = "2026-03-14T09:26:53Z")]
    pub time: DateTime<Utc>,
}

impl From<HealthEntry> for HealthEntryResponse {
    fn from(entry: HealthEntry) -> Self {
        let status = match entry.status {
            HealthStatus::Ok => "OK",
            HealthStatus::Err => "err",
        };
        Self {
            service: entry.service,
            status: status.to_owned(),
            time: entry.time,
        }
    }
}

/// Report the health of the service and its store.
///
/// Always 200: a failing store shows up as `"err"` in its entry.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Service and store health", body = [HealthEntryResponse])
    ),
    operation_id = "health"
)]
#[get("/health")]
pub async fn health(state: web::Data<HttpState>) -> web::Json<Vec<HealthEntryResponse>> {
    let report = state.catalogue.health().await;
    web::Json(report.into_iter().map(HealthEntryResponse::from).collect())
}

/// Readiness probe. Return 200 when dependencies are initialised and the server can handle traffic; return 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::no_store_status(state.is_ready())
}

/// Liveness probe. Any answer at all means the workers are serving.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive")
    )
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    HealthState::no_store_status(true)
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;

//! Service health report.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Name reported for this service.
pub const SERVICE_NAME: &str = "catalogue";

/// Name reported for the backing store.
pub const STORE_NAME: &str = "catalogue-db";

/// Probe outcome for one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    /// Component answered.
    #[serde(rename = "OK")]
    Ok,
    /// Component failed to answer.
    #[serde(rename = "err")]
    Err,
}

/// One line of the health report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthEntry {
    /// Component name.
    pub service: String,
    /// Probe outcome.
    pub status: HealthStatus,
    /// When the probe ran.
    pub time: DateTime<Utc>,
}

impl HealthEntry {
    /// Build an entry for `service`.
    pub fn new(service: impl Into<String>, status: HealthStatus, time: DateTime<Utc>) -> Self {
        Self {
            service: service.into(),
            status,
            time,
        }
    }
}

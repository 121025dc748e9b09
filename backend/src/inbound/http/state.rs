//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the catalogue driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::CatalogueQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Catalogue read use-cases.
    pub catalogue: Arc<dyn CatalogueQuery>,
}

impl HttpState {
    /// Bundle the catalogue port for handler injection.
    pub fn new(catalogue: Arc<dyn CatalogueQuery>) -> Self {
        Self { catalogue }
    }
}

//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

use catalogue::domain::ports::CatalogueQuery;
use catalogue::inbound::http::images::ImageStore;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) catalogue: Arc<dyn CatalogueQuery>,
    pub(crate) images: ImageStore,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration around the catalogue port.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, catalogue: Arc<dyn CatalogueQuery>) -> Self {
        Self {
            bind_addr,
            catalogue,
            images: ImageStore::empty(),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Serve catalogue images from `images`.
    #[must_use]
    pub fn with_images(mut self, images: ImageStore) -> Self {
        self.images = images;
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}

//! Catalogue entry-point: loads settings, wires the MySQL-backed catalogue
//! service into the HTTP server and serves until shutdown.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use catalogue::domain::CatalogueService;
use catalogue::inbound::http::health::HealthState;
use catalogue::inbound::http::images::ImageStore;
use catalogue::outbound::persistence::{DbPool, SqlxCatalogueRepository};
use catalogue::settings::CatalogueSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = CatalogueSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let database_url = settings.database_url().ok_or_else(|| {
        std::io::Error::other("CATALOGUE_DATABASE_URL must be set to a MySQL connection URL")
    })?;

    let pool = DbPool::new(&settings.pool_config(database_url))
        .map_err(|e| std::io::Error::other(format!("failed to build store pool: {e}")))?;
    let repository =
        SqlxCatalogueRepository::new(pool.clone()).with_timeout(settings.store_timeout());
    let service = CatalogueService::new(Arc::new(repository), Arc::new(DefaultClock));

    let images = match ImageStore::open(settings.images_dir()) {
        Ok(store) => store,
        Err(error) => {
            warn!(
                %error,
                path = %settings.images_dir().display(),
                "images directory unavailable; image requests will return 404"
            );
            ImageStore::empty()
        }
    };

    let config = ServerConfig::new(settings.bind_addr(), Arc::new(service)).with_images(images);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::prometheus());

    let server = create_server(web::Data::new(HealthState::new()), config)?;
    info!(bind_addr = %settings.bind_addr(), "catalogue listening");

    let result = server.await;
    pool.close().await;
    result
}

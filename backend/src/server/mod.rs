//! HTTP server assembly for the catalogue binary.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;
#[cfg(feature = "metrics")]
pub(crate) use metrics::prometheus;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use catalogue::Trace;
#[cfg(debug_assertions)]
use catalogue::doc::ApiDoc;
use catalogue::inbound::http::configure;
use catalogue::inbound::http::health::HealthState;
use catalogue::inbound::http::images::ImageStore;
use catalogue::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Shared app data cloned into every worker.
#[derive(Clone)]
struct WorkerData {
    health: web::Data<HealthState>,
    catalogue: web::Data<HttpState>,
    images: web::Data<ImageStore>,
}

impl WorkerData {
    fn into_app(
        self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let app = App::new()
            .app_data(self.health)
            .app_data(self.catalogue)
            .app_data(self.images)
            .wrap(Trace)
            .configure(configure);

        // Interactive docs stay out of release builds.
        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        app
    }
}

/// Bind the catalogue server and mark it ready.
///
/// The returned [`Server`] does nothing until awaited.
///
/// # Errors
/// Returns the bind error when the address is unavailable.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        catalogue,
        images,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;
    let data = WorkerData {
        health: health_state.clone(),
        catalogue: web::Data::new(HttpState::new(catalogue)),
        images: web::Data::new(images),
    };

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = data.clone().into_app();
        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());
        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

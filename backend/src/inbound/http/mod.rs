//! HTTP inbound adapter exposing the catalogue REST endpoints.

use actix_web::web;

pub mod catalogue;
pub mod error;
pub mod health;
pub mod images;
pub mod schemas;
pub mod state;
pub mod tags;

pub use error::ApiResult;

/// Register every catalogue route.
///
/// `/catalogue/size` and `/catalogue/images/...` are registered ahead of
/// `/catalogue/{id}` so they are never read as identifiers. Handlers expect
/// [`state::HttpState`], [`health::HealthState`] and [`images::ImageStore`]
/// as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(catalogue::list_socks)
        .service(catalogue::count_socks)
        .service(images::serve_image)
        .service(catalogue::get_sock)
        .service(tags::list_tags)
        .service(health::health)
        .service(health::ready)
        .service(health::live);
}

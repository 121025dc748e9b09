//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every catalogue, tag, image and health endpoint
//! - **Schemas**: the response DTOs plus the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that keep utoipa out of the domain
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::catalogue::{CountResponse, SockResponse};
use crate::inbound::http::health::HealthEntryResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sock catalogue API",
        description = "Read-only access to the sock catalogue, its tags and images."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::catalogue::list_socks,
        crate::inbound::http::catalogue::count_socks,
        crate::inbound::http::catalogue::get_sock,
        crate::inbound::http::tags::list_tags,
        crate::inbound::http::images::serve_image,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        SockResponse,
        CountResponse,
        HealthEntryResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "catalogue", description = "Sock listing, lookup, counting and images"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

//! Tag listing endpoint.
//!
//! ```text
//! GET /tags
//! ```

use actix_web::{get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// List every tag name known to the catalogue.
#[utoipa::path(
    get,
    path = "/tags",
    responses(
        (status = 200, description = "Tag names", body = [String], example = json!(["brown", "geek", "formal"])),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Catalogue store unavailable", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "listTags"
)]
#[get("/tags")]
pub async fn list_tags(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<String>>> {
    Ok(web::Json(state.catalogue.tags().await?))
}

//! Catalogue read endpoints.
//!
//! ```text
//! GET /catalogue?tags=red,blue&order=price&pageNum=1&pageSize=10
//! GET /catalogue/size?tags=red
//! GET /catalogue/{id}
//! ```

use actix_web::{HttpResponse, get, web};
use pagination::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PageRequest};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{ListSocksRequest, Sock, SortOrder, TagFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Raw query string pairs in request order.
///
/// Decoding into pairs never fails, and repeated keys are kept, so a query
/// string cannot reject the request before the handler runs.
pub type QueryPairs = web::Query<Vec<(String, String)>>;

/// First value of `key`, matching how repeated keys are read.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// Query string accepted by the listing endpoint.
///
/// Every field is optional text so malformed values never reject the
/// request; see [`ListQuery::into_request`] for how they are interpreted.
/// Handlers build it with [`ListQuery::from_pairs`].
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Comma-separated tag names; a sock matches when it has any of them.
    #[param(example = "blue,formal")]
    pub tags: Option<String>,
    /// Sort field (`id`, `name`, `description`, `price`, `count`), prefixed
    /// with `-` for descending order. Unknown values are ignored.
    #[param(example = "-price")]
    pub order: Option<String>,
    /// 1-indexed page number; defaults to 1.
    #[serde(rename = "pageNum")]
    #[param(value_type = Option<u32>, example = 1)]
    pub page_num: Option<String>,
    /// Items per page; defaults to 10.
    #[serde(rename = "pageSize")]
    #[param(value_type = Option<u32>, example = 10)]
    pub page_size: Option<String>,
}

impl ListQuery {
    /// Collect the recognised keys; the first occurrence of a repeated key wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            tags: first_value(pairs, "tags"),
            order: first_value(pairs, "order"),
            page_num: first_value(pairs, "pageNum"),
            page_size: first_value(pairs, "pageSize"),
        }
    }

    /// Interpret the raw parameters.
    ///
    /// Absent or empty page values take their defaults; any other value that
    /// is not a non-negative integer becomes 0, which yields an empty page.
    pub fn into_request(self) -> ListSocksRequest {
        ListSocksRequest {
            tags: TagFilter::parse(self.tags.as_deref().unwrap_or_default()),
            sort: self.order.as_deref().and_then(SortOrder::parse),
            page: PageRequest::new(
                page_param(self.page_num.as_deref(), DEFAULT_PAGE_NUMBER),
                page_param(self.page_size.as_deref(), DEFAULT_PAGE_SIZE),
            ),
        }
    }
}

fn page_param(raw: Option<&str>, default: usize) -> usize {
    match raw {
        None | Some("") => default,
        Some(value) => value.parse().unwrap_or(0),
    }
}

/// Query string accepted by the count endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CountQuery {
    /// Comma-separated tag names; a sock counts when it has any of them.
    #[param(example = "red")]
    pub tags: Option<String>,
}

impl CountQuery {
    /// Collect the `tags` key; the first occurrence wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            tags: first_value(pairs, "tags"),
        }
    }

    /// The tag filter to count with; absent or empty counts every sock.
    pub fn tag_filter(&self) -> TagFilter {
        TagFilter::parse(self.tags.as_deref().unwrap_or_default())
    }
}

/// Wire shape of a sock.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SockResponse {
    /// Store identifier.
    #[schema(example = "808a2de1-1aaa-4c25-a9b9-6612e8f29a38")]
    pub id: String,
    /// Display name.
    #[schema(example = "Crossed")]
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Exactly two image URLs in storage order; unused slots are empty.
    #[schema(example = json!(["/catalogue/images/cross_1.jpeg", "/catalogue/images/cross_2.jpeg"]))]
    pub image_url: [String; 2],
    /// Unit price.
    #[schema(example = 17.32)]
    pub price: f32,
    /// Units in stock.
    #[schema(example = 738)]
    pub count: i32,
    /// Tag names.
    #[schema(example = json!(["blue", "action", "red", "formal"]))]
    pub tag: Vec<String>,
}

impl From<Sock> for SockResponse {
    fn from(sock: Sock) -> Self {
        Self {
            id: sock.id,
            name: sock.name,
            description: sock.description,
            image_url: sock.images.into_array(),
            price: sock.price,
            count: sock.count,
            tag: sock.tags,
        }
    }
}

/// Wire shape of the count endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CountResponse {
    /// Number of matching socks.
    #[schema(example = 4)]
    pub size: i64,
    /// Always `null`; failures use the error payload instead.
    #[schema(value_type = Option<String>)]
    pub err: Option<String>,
}

/// List socks, optionally filtered, ordered and paged.
#[utoipa::path(
    get,
    path = "/catalogue",
    params(ListQuery),
    description = "Return one page of socks. Malformed paging values yield an empty page rather than an error.",
    responses(
        (status = 200, description = "Page of socks", body = [SockResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Catalogue store unavailable", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "listSocks"
)]
#[get("/catalogue")]
pub async fn list_socks(
    state: web::Data<HttpState>,
    query: QueryPairs,
) -> ApiResult<web::Json<Vec<SockResponse>>> {
    let request = ListQuery::from_pairs(&query).into_request();
    let socks = state.catalogue.list(request).await?;
    Ok(web::Json(socks.into_iter().map(SockResponse::from).collect()))
}

/// Count socks carrying any of the given tags.
#[utoipa::path(
    get,
    path = "/catalogue/size",
    params(CountQuery),
    responses(
        (status = 200, description = "Number of matching socks", body = CountResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Catalogue store unavailable", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "countSocks"
)]
#[get("/catalogue/size")]
pub async fn count_socks(
    state: web::Data<HttpState>,
    query: QueryPairs,
) -> ApiResult<web::Json<CountResponse>> {
    let size = state
        .catalogue
        .count(CountQuery::from_pairs(&query).tag_filter())
        .await?;
    Ok(web::Json(CountResponse { size, err: None }))
}

/// Fetch a single sock.
#[utoipa::path(
    get,
    path = "/catalogue/{id}",
    params(("id" = String, Path, description = "Sock identifier")),
    responses(
        (status = 200, description = "The sock", body = SockResponse),
        (status = 404, description = "No such sock", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Catalogue store unavailable", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "getSock"
)]
#[get("/catalogue/{id}")]
pub async fn get_sock(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let sock = state.catalogue.get(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SockResponse::from(sock)))
}

#[cfg(test)]
#[path = "catalogue_tests.rs"]
mod tests;

//! Tests for the health endpoints.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use insta::assert_json_snapshot;
use rstest::{fixture, rstest};
use serde_json::Value;

use super::*;
use crate::domain::ports::{CatalogueRepositoryError, MockCatalogueRepository};
use crate::domain::CatalogueService;
use crate::test_support::FixedClock;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

async fn get_health(state: web::Data<HealthState>, uri: &str) -> actix_web::dev::ServiceResponse {
    let app = actix_test::init_service(App::new().app_data(state).service(ready).service(live)).await;
    actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await
}

#[rstest]
#[actix_web::test]
async fn readiness_follows_the_ready_flag(health_state: web::Data<HealthState>) {
    let before = get_health(health_state.clone(), "/health/ready").await;
    assert_eq!(before.status(), StatusCode::SERVICE_UNAVAILABLE);

    health_state.mark_ready();
    let after = get_health(health_state, "/health/ready").await;
    assert_eq!(after.status(), StatusCode::OK);
    assert_eq!(
        after
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok()),
        Some("no-store")
    );
}

#[rstest]
#[actix_web::test]
async fn liveness_ignores_readiness(health_state: web::Data<HealthState>) {
    let res = get_health(health_state, "/health/live").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok()),
        Some("no-store")
    );
}

async fn health_report(ping: Result<(), CatalogueRepositoryError>) -> (StatusCode, Value) {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_ping().return_once(move || ping);
    let service = CatalogueService::new(Arc::new(repo), FixedClock::shared());
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(Arc::new(service))))
            .service(health),
    )
    .await;
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/health").to_request()).await;
    let status = res.status();
    (status, actix_test::read_body_json(res).await)
}

#[actix_web::test]
async fn health_reports_both_components() {
    let (status, body) = health_report(Ok(())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["service"], "catalogue");
    assert_eq!(body[0]["status"], "OK");
    assert_eq!(body[1]["service"], "catalogue-db");
    assert_eq!(body[1]["status"], "OK");
    assert_eq!(body[1]["time"], "2026-03-14T09:26:53Z");
}

#[actix_web::test]
async fn store_outage_degrades_without_failing() {
    let (status, body) = health_report(Err(CatalogueRepositoryError::timeout("ping"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["status"], "OK");
    assert_eq!(body[1]["status"], "err");
}

#[rstest]
fn health_entry_wire_shape() {
    let entry = HealthEntryResponse::from(HealthEntry::new(
        "catalogue-db",
        HealthStatus::Err,
        crate::test_support::fixture_timestamp(),
    ));
    assert_json_snapshot!(entry, @r#"
    {
      "service": "catalogue-db",
      "status": "err",
      "time": "2026-03-14T09:26:53Z"
    }
    "#);
}

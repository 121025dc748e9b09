//! Tests for domain error construction and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("store down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::NotFound, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn try_with_trace_id_rejects_blank_values() {
    let result = Error::not_found("missing").try_with_trace_id(" ");
    assert_eq!(result, Err(ErrorValidationError::EmptyTraceId));
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("fixture is a UUID");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_camel_case_and_omits_empty_fields(expected_trace_id: String) {
    let bare = serde_json::to_value(Error::not_found("missing")).expect("serialise");
    assert_eq!(bare, json!({ "code": "not_found", "message": "missing" }));

    let full = Error::service_unavailable("store down").with_trace_id(expected_trace_id.clone());
    let value = serde_json::to_value(full).expect("serialise");
    assert_eq!(
        value,
        json!({
            "code": "service_unavailable",
            "message": "store down",
            "traceId": expected_trace_id,
        })
    );
}

#[rstest]
#[tokio::test]
async fn deserialising_ignores_ambient_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("fixture is a UUID");
    let payload = json!({ "code": "internal_error", "message": "boom" });
    let error = TraceId::scope(trace_id, async move {
        serde_json::from_value::<Error>(payload).expect("valid payload")
    })
    .await;
    assert!(error.trace_id().is_none());
}

#[rstest]
#[case(json!({ "code": "not_found", "message": " " }))]
#[case(json!({ "code": "not_found", "message": "missing", "traceId": " " }))]
#[case(json!({ "code": "invalid_request", "message": "bad" }))]
#[case(json!({ "code": "not_found", "message": "missing", "details": {} }))]
fn deserialising_rejects_invalid_payloads(#[case] payload: serde_json::Value) {
    assert!(serde_json::from_value::<Error>(payload).is_err());
}

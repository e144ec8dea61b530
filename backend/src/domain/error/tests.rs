//! Tests for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;
use uuid::Uuid;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> Error {
    Error::invalid_request("bad owner id")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values(base_error: Error) {
    let result = base_error.try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_has_no_trace_id_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id = TraceId::from_uuid(Uuid::nil());
    let error = TraceId::scope(trace_id, async { Error::not_found("owner 3 not found") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_and_omits_absent_fields(base_error: Error) {
    let value = serde_json::to_value(base_error).expect("serialise error");
    assert_eq!(
        value,
        json!({ "code": "invalid_request", "message": "bad owner id" })
    );
}

#[rstest]
fn deserialisation_restores_trace_id_and_details() {
    let payload = json!({
        "code": "not_found",
        "message": "owner 9 not found",
        "traceId": TRACE_ID,
        "details": { "ownerId": 9 }
    });
    let error: Error = serde_json::from_value(payload).expect("deserialise error");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.trace_id(), Some(TRACE_ID));
    assert_eq!(error.details(), Some(&json!({ "ownerId": 9 })));
}

#[rstest]
fn deserialisation_rejects_blank_message() {
    let payload = json!({ "code": "internal_error", "message": " " });
    assert!(serde_json::from_value::<Error>(payload).is_err());
}

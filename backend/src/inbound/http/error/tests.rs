//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn driver_detail() -> &'static str {
    "pq: connection refused (host=db.internal user=svc password=hunter2)"
}

async fn body_json(error: ApiError) -> (StatusCode, Value) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("error body should be readable");
    let body = serde_json::from_slice(&bytes).expect("error body should be JSON");
    (status, body)
}

#[rstest]
#[case(ErrorKind::InvalidUsername, StatusCode::BAD_REQUEST, "invalid_username")]
#[case(ErrorKind::UsernameExists, StatusCode::CONFLICT, "username_exists")]
#[case(ErrorKind::UnknownConflict, StatusCode::CONFLICT, "unknown_conflict")]
#[case(ErrorKind::UserNotFound, StatusCode::NOT_FOUND, "user_not_found")]
#[case(
    ErrorKind::Internal,
    StatusCode::INTERNAL_SERVER_ERROR,
    "internal_error"
)]
fn each_kind_has_fixed_mapping(
    #[case] kind: ErrorKind,
    #[case] status: StatusCode,
    #[case] code: &str,
) {
    assert_eq!(wire_mapping(kind), (status, code));
}

#[rstest]
fn every_kind_maps_to_a_distinct_code() {
    let codes: std::collections::HashSet<_> = ErrorKind::ALL
        .iter()
        .map(|kind| wire_mapping(*kind).1)
        .collect();
    assert_eq!(codes.len(), ErrorKind::ALL.len());
}

#[rstest]
fn mapping_ignores_context_and_detail() {
    let error = Error::user_not_found("no rows")
        .context("repo")
        .context("get user");
    let (status, body) = map_to_response(&error);

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "user_not_found");
    assert_eq!(body.details, "user not found");
}

#[rstest]
fn invalid_username_details_include_reason() {
    let error = Error::invalid_username("username length must be between 3 and 15 bytes, got 2");
    let (_, body) = map_to_response(&error);

    assert_eq!(
        body.details,
        "invalid username: username length must be between 3 and 15 bytes, got 2"
    );
}

#[rstest]
fn conflict_details_do_not_echo_driver_text() {
    let error = Error::username_exists("Key (username)=(bobsmith) already exists.");
    let (_, body) = map_to_response(&error);
    assert_eq!(body.details, "username already exists");
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(driver_detail: &str) {
    let error = Error::internal(driver_detail).context("repo");
    let (status, body) = body_json(error.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "internal_error", "details": "internal error"})
    );
}

#[rstest]
#[actix_web::test]
async fn actix_errors_become_internal(driver_detail: &str) {
    let source = actix_web::error::ErrorBadGateway(driver_detail.to_owned());
    let error = ApiError::from(source);

    assert!(matches!(&error, ApiError::Domain(err) if err.is(ErrorKind::Internal)));
    let (status, body) = body_json(error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["details"], "internal error");
}

#[rstest]
#[case(RequestError::InvalidBody, StatusCode::BAD_REQUEST, "invalid_request", "invalid request body")]
#[case(
    RequestError::InvalidUserId { raw: "nope".to_owned() },
    StatusCode::BAD_REQUEST,
    "invalid_user_id",
    "invalid user id nope"
)]
#[case(RequestError::Unauthorized, StatusCode::UNAUTHORIZED, "unauthorized", "unauthorized")]
#[case(
    RequestError::MethodNotAllowed,
    StatusCode::METHOD_NOT_ALLOWED,
    "method_not_allowed",
    "method not allowed"
)]
#[actix_web::test]
async fn request_errors_share_body_shape(
    #[case] error: RequestError,
    #[case] status: StatusCode,
    #[case] code: &str,
    #[case] details: &str,
) {
    let api_error = ApiError::from(error);
    assert_eq!(ResponseError::status_code(&api_error), status);

    let (actual_status, body) = body_json(api_error).await;
    assert_eq!(actual_status, status);
    assert_eq!(body, json!({"error": code, "details": details}));
}

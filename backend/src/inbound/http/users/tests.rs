//! Tests for user API handlers.

use super::*;
use crate::domain::ports::{MockUserCommand, MockUserQuery};
use crate::domain::{Error, ErrorKind};
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

const ALICE_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn alice_id() -> UserId {
    ALICE_ID.parse().expect("fixture id is a valid uuid")
}

fn alice(id: UserId) -> User {
    User::new(id, "alice123", "")
}

async fn send(
    command: MockUserCommand,
    query: MockUserQuery,
    request: actix_test::TestRequest,
) -> ServiceResponse {
    let state = HttpState::new(Arc::new(command), Arc::new(query));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;
    actix_test::call_service(&app, request.to_request()).await
}

async fn read_json(response: ServiceResponse) -> Value {
    actix_test::read_body_json(response).await
}

#[rstest]
#[actix_web::test]
async fn create_returns_created_with_user_id(alice_id: UserId) {
    let mut command = MockUserCommand::new();
    command
        .expect_create_user()
        .withf(move |req| req.user_id == alice_id && req.username == "alice123")
        .times(1)
        .returning(|req| {
            Ok(CreateUserResponse {
                user_id: req.user_id,
            })
        });

    let response = send(
        command,
        MockUserQuery::new(),
        actix_test::TestRequest::post()
            .uri("/user")
            .set_json(json!({"userID": ALICE_ID, "username": "alice123"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(read_json(response).await, json!({"userID": ALICE_ID}));
}

#[rstest]
#[case(ErrorKind::InvalidUsername, StatusCode::BAD_REQUEST, "invalid_username")]
#[case(ErrorKind::UsernameExists, StatusCode::CONFLICT, "username_exists")]
#[case(ErrorKind::UnknownConflict, StatusCode::CONFLICT, "unknown_conflict")]
#[case(
    ErrorKind::Internal,
    StatusCode::INTERNAL_SERVER_ERROR,
    "internal_error"
)]
#[actix_web::test]
async fn create_maps_domain_failures(
    #[case] kind: ErrorKind,
    #[case] status: StatusCode,
    #[case] code: &str,
) {
    let mut command = MockUserCommand::new();
    command
        .expect_create_user()
        .times(1)
        .returning(move |_| Err(Error::new(kind).with_detail("secret driver text")));

    let response = send(
        command,
        MockUserQuery::new(),
        actix_test::TestRequest::post()
            .uri("/user")
            .set_json(json!({"userID": ALICE_ID, "username": "bobsmith"})),
    )
    .await;

    assert_eq!(response.status(), status);
    let body = read_json(response).await;
    assert_eq!(body["error"], code);
    if kind == ErrorKind::Internal {
        assert_eq!(body["details"], "internal error");
    }
}

#[rstest]
#[case(None)]
#[case(Some("text/plain"))]
#[actix_web::test]
async fn create_accepts_json_under_any_content_type(
    alice_id: UserId,
    #[case] content_type: Option<&'static str>,
) {
    let mut command = MockUserCommand::new();
    command
        .expect_create_user()
        .withf(move |req| req.user_id == alice_id)
        .times(1)
        .returning(|req| {
            Ok(CreateUserResponse {
                user_id: req.user_id,
            })
        });

    let mut request = actix_test::TestRequest::post()
        .uri("/user")
        .set_payload(format!(r#"{{"userID": "{ALICE_ID}", "username": "alice123"}}"#));
    if let Some(value) = content_type {
        request = request.insert_header(("content-type", value));
    }
    let response = send(command, MockUserQuery::new(), request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[rstest]
#[actix_web::test]
async fn create_without_username_reaches_validation() {
    let mut command = MockUserCommand::new();
    command
        .expect_create_user()
        .withf(|req| req.username.is_empty())
        .times(1)
        .returning(|_| Err(Error::invalid_username("username is empty")));

    let response = send(
        command,
        MockUserQuery::new(),
        actix_test::TestRequest::post()
            .uri("/user")
            .set_json(json!({"userID": ALICE_ID})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["error"], "invalid_username");
}

#[rstest]
#[case(r#"{"userID": "not-a-uuid", "username": "alice123"}"#)]
#[case(r#"{"username": "alice123"}"#)]
#[case("{not json")]
#[actix_web::test]
async fn malformed_body_is_invalid_request(#[case] payload: &'static str) {
    let mut command = MockUserCommand::new();
    command.expect_create_user().never();

    let response = send(
        command,
        MockUserQuery::new(),
        actix_test::TestRequest::post()
            .uri("/user")
            .insert_header(("content-type", "application/json"))
            .set_payload(payload),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({"error": "invalid_request", "details": "invalid request body"})
    );
}

#[rstest]
#[actix_web::test]
async fn get_by_id_returns_user(alice_id: UserId) {
    let mut query = MockUserQuery::new();
    query
        .expect_get_user_by_id()
        .withf(move |id| *id == alice_id)
        .times(1)
        .returning(|id| Ok(alice(*id)));

    let response = send(
        MockUserCommand::new(),
        query,
        actix_test::TestRequest::get().uri(&format!("/user/id/{ALICE_ID}")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({"id": ALICE_ID, "username": "alice123", "description": ""})
    );
}

#[rstest]
#[actix_web::test]
async fn get_by_id_rejects_malformed_uuid() {
    let mut query = MockUserQuery::new();
    query.expect_get_user_by_id().never();

    let response = send(
        MockUserCommand::new(),
        query,
        actix_test::TestRequest::get().uri("/user/id/12345"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({"error": "invalid_user_id", "details": "invalid user id 12345"})
    );
}

#[rstest]
#[case(Error::user_not_found("no rows"), StatusCode::NOT_FOUND, "user_not_found")]
#[case(Error::internal("pool timed out"), StatusCode::INTERNAL_SERVER_ERROR, "internal_error")]
#[actix_web::test]
async fn get_by_username_maps_failures(
    #[case] failure: Error,
    #[case] status: StatusCode,
    #[case] code: &str,
) {
    let mut query = MockUserQuery::new();
    query
        .expect_get_user_by_username()
        .withf(|username| username == "ghost")
        .times(1)
        .returning(move |_| Err(failure.clone()));

    let response = send(
        MockUserCommand::new(),
        query,
        actix_test::TestRequest::get().uri("/user/ghost"),
    )
    .await;

    assert_eq!(response.status(), status);
    assert_eq!(read_json(response).await["error"], code);
}

#[rstest]
#[actix_web::test]
async fn me_is_not_treated_as_username(alice_id: UserId) {
    let mut query = MockUserQuery::new();
    query.expect_get_user_by_username().never();
    query
        .expect_get_user_by_id()
        .withf(move |id| *id == alice_id)
        .times(1)
        .returning(|id| Ok(alice(*id)));

    let response = send(
        MockUserCommand::new(),
        query,
        actix_test::TestRequest::get()
            .uri("/user/me")
            .insert_header((USER_ID_HEADER, ALICE_ID)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["username"], "alice123");
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
#[case(Some("alice"))]
#[actix_web::test]
async fn me_without_valid_identity_is_unauthorized(#[case] header: Option<&'static str>) {
    let mut query = MockUserQuery::new();
    query.expect_get_user_by_id().never();

    let mut request = actix_test::TestRequest::get().uri("/user/me");
    if let Some(value) = header {
        request = request.insert_header((USER_ID_HEADER, value));
    }
    let response = send(MockUserCommand::new(), query, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(response).await["error"], "unauthorized");
}

#[rstest]
#[case(actix_test::TestRequest::get().uri("/user"))]
#[case(actix_test::TestRequest::put().uri("/user"))]
#[case(actix_test::TestRequest::delete().uri(&format!("/user/id/{ALICE_ID}")))]
#[case(actix_test::TestRequest::post().uri("/user/alice123"))]
#[case(actix_test::TestRequest::patch().uri("/user/me"))]
#[actix_web::test]
async fn unsupported_methods_are_rejected(#[case] request: actix_test::TestRequest) {
    let response = send(MockUserCommand::new(), MockUserQuery::new(), request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        read_json(response).await,
        json!({"error": "method_not_allowed", "details": "method not allowed"})
    );
}

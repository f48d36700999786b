//! User API handlers.
//!
//! ```text
//! POST /user            {"userID": "<uuid>", "username": "alice123"}
//! GET  /user/id/{id}
//! GET  /user/me         (X-User-ID: <uuid>)
//! GET  /user/{username}
//! ```
//!
//! Routes are explicit resources so an unsupported method answers `405`
//! rather than falling through to `404`.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{CreateUserRequest, CreateUserResponse, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ApiError, ErrorBody, RequestError};
use crate::inbound::http::state::HttpState;

/// Header naming the calling user for `GET /user/me`.
pub const USER_ID_HEADER: &str = "X-User-ID";

/// Request body for `POST /user`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserBody {
    /// Identifier assigned by the caller.
    #[serde(rename = "userID")]
    pub user_id: Uuid,
    /// Desired username, 3 to 15 bytes. Absent decodes as empty and fails
    /// validation.
    #[serde(default)]
    #[schema(example = "alice123")]
    pub username: String,
}

/// Response body for `POST /user`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserResponseBody {
    /// Identifier of the stored user.
    #[serde(rename = "userID")]
    pub user_id: Uuid,
}

impl From<CreateUserResponse> for CreateUserResponseBody {
    fn from(value: CreateUserResponse) -> Self {
        Self {
            user_id: *value.user_id.as_uuid(),
        }
    }
}

/// User representation on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserBody {
    pub id: Uuid,
    #[schema(example = "alice123")]
    pub username: String,
    pub description: String,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            username: user.username().to_owned(),
            description: user.description().to_owned(),
        }
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, RequestError> {
    raw.parse().map_err(|_| RequestError::InvalidUserId {
        raw: raw.to_owned(),
    })
}

/// Create a user with a caller-assigned identifier.
#[utoipa::path(
    post,
    path = "/user",
    request_body = CreateUserBody,
    responses(
        (status = 201, description = "User created", body = CreateUserResponseBody),
        (status = 400, description = "Invalid username or body", body = ErrorBody),
        (status = 409, description = "Username taken or other conflict", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserBody>,
) -> ApiResult<HttpResponse> {
    let CreateUserBody { user_id, username } = payload.into_inner();
    let response = state
        .users
        .create_user(CreateUserRequest {
            user_id: UserId::from_uuid(user_id),
            username,
        })
        .await?;
    Ok(HttpResponse::Created().json(CreateUserResponseBody::from(response)))
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/user/id/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User", body = UserBody),
        (status = 400, description = "Malformed identifier", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
pub async fn get_user_by_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserBody>> {
    let id = parse_user_id(&path)?;
    let user = state.users_query.get_user_by_id(&id).await?;
    Ok(web::Json(user.into()))
}

/// Fetch a user by username.
#[utoipa::path(
    get,
    path = "/user/{username}",
    params(("username" = String, Path, description = "Exact username")),
    responses(
        (status = 200, description = "User", body = UserBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUserByUsername"
)]
pub async fn get_user_by_username(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserBody>> {
    let user = state.users_query.get_user_by_username(&path).await?;
    Ok(web::Json(user.into()))
}

/// Fetch the user named by the `X-User-ID` header.
#[utoipa::path(
    get,
    path = "/user/me",
    params(("X-User-ID" = String, Header, description = "Calling user identifier (UUID)")),
    responses(
        (status = 200, description = "User", body = UserBody),
        (status = 401, description = "Missing or malformed caller identity", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getMe"
)]
pub async fn get_me(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<web::Json<UserBody>> {
    let raw = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(RequestError::Unauthorized)?;
    let id = raw.parse::<UserId>().map_err(|_| {
        debug!(header = raw, "rejecting malformed caller identity");
        RequestError::Unauthorized
    })?;
    let user = state.users_query.get_user_by_id(&id).await?;
    Ok(web::Json(user.into()))
}

async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(RequestError::MethodNotAllowed.into())
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| {
            debug!(error = %err, "rejecting request body");
            ApiError::from(RequestError::InvalidBody).into()
        })
}

/// Register the user routes.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::inbound::http::users::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource("/user")
                .route(web::post().to(create_user))
                .default_service(web::to(method_not_allowed)),
        )
        // Must precede `/user/{username}`.
        .service(
            web::resource("/user/me")
                .route(web::get().to(get_me))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/user/id/{id}")
                .route(web::get().to(get_user_by_id))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/user/{username}")
                .route(web::get().to(get_user_by_username))
                .default_service(web::to(method_not_allowed)),
        );
}

#[cfg(test)]
mod tests;

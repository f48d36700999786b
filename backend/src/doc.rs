//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user endpoints and their wire schemas. The
//! document is served to Swagger UI and exported by `openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::users::{CreateUserBody, CreateUserResponseBody, UserBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "Create users and look them up by identifier or username."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user_by_id,
        crate::inbound::http::users::get_me,
        crate::inbound::http::users::get_user_by_username,
    ),
    components(schemas(CreateUserBody, CreateUserResponseBody, UserBody, ErrorBody)),
    tags(
        (name = "users", description = "User identity records")
    )
)]
pub struct ApiDoc;

//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler in the inbound HTTP layer together with
//! the schema wrappers from [`crate::inbound::http::schemas`], keeping the
//! domain types free of utoipa. The document backs Swagger UI in debug
//! builds and is exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::hobbies::{CreateHobbyRequest, UpdateHobbyRequest};
use crate::inbound::http::schemas::{
    ErrorResponse, HobbyResponseArray, HobbyResponseObj, HobbySchema, PassionLevelSchema,
    UserResponseArray, UserResponseObj, UserSchema,
};
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hobbies API",
        description = "CRUD interface for users and the hobbies they reference.",
        version = "v1"
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::hobbies::list_hobbies,
        crate::inbound::http::hobbies::create_hobby,
        crate::inbound::http::hobbies::get_hobby,
        crate::inbound::http::hobbies::update_hobby,
        crate::inbound::http::hobbies::delete_hobby,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(
        HobbySchema,
        PassionLevelSchema,
        UserSchema,
        HobbyResponseObj,
        HobbyResponseArray,
        UserResponseObj,
        UserResponseArray,
        ErrorResponse,
        CreateHobbyRequest,
        UpdateHobbyRequest,
        CreateUserRequest,
        UpdateUserRequest,
    )),
    tags(
        (name = "hobbies", description = "Hobby documents"),
        (name = "users", description = "Users and their hobby references"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

//! User API handlers.
//!
//! ```text
//! GET    /api/v1/users
//! POST   /api/v1/users       {"name":"Ada","hobbies":["507f1f77bcf86cd799439011"]}
//! GET    /api/v1/users/{id}
//! PUT    /api/v1/users/{id}  {"hobbies":[]}
//! DELETE /api/v1/users/{id}
//! ```
//!
//! Reads expand hobby references into hobby documents; writes return the
//! references as ids.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{HobbyRef, NewUser, UserChanges};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope;
use crate::inbound::http::schemas::{ErrorResponse, UserResponseArray, UserResponseObj};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, RequestSchema, SchemaViolation, ValidatedJson, parse_object_id, reject_null,
    require_text, when_present,
};

const NAME: FieldName = FieldName::new("name");

fn into_refs(values: Vec<serde_json::Value>) -> Vec<HobbyRef> {
    values.into_iter().map(HobbyRef::from_json).collect()
}

/// Request body for `POST /api/v1/users`.
///
/// `hobbies` elements are not validated here; malformed references are
/// rejected when the user is stored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserRequest {
    #[serde(rename = "_id", default, deserialize_with = "reject_null")]
    pub client_id: Option<String>,
    #[schema(example = "Ada")]
    pub name: String,
    #[serde(default, deserialize_with = "reject_null")]
    #[schema(value_type = Option<Vec<String>>)]
    pub hobbies: Option<Vec<serde_json::Value>>,
}

impl RequestSchema for CreateUserRequest {
    fn check(&self) -> Result<(), SchemaViolation> {
        require_text(NAME, &self.name)
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            name: value.name,
            hobbies: into_refs(value.hobbies.unwrap_or_default()),
        }
    }
}

/// Request body for `PUT /api/v1/users/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[serde(rename = "_id", default, deserialize_with = "reject_null")]
    pub client_id: Option<String>,
    #[serde(default, deserialize_with = "reject_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "reject_null")]
    #[schema(value_type = Option<Vec<String>>)]
    pub hobbies: Option<Vec<serde_json::Value>>,
}

impl RequestSchema for UpdateUserRequest {
    fn check(&self) -> Result<(), SchemaViolation> {
        when_present(self.name.as_deref(), |name| require_text(NAME, name))
    }
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            name: value.name,
            hobbies: value.hobbies.map(into_refs),
        }
    }
}

/// List every user with hobbies expanded.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "All users", body = UserResponseArray),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.users.find_all().await?;
    Ok(envelope::ok(users))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponseObj),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Store failure or malformed hobby reference", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: ValidatedJson<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new = NewUser::from(payload.into_inner());
    let user = state.users.create(&new).await?;
    Ok(envelope::created(user))
}

/// Fetch one user with hobbies expanded. An unknown id yields `data: null`.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "24-character hex object id")),
    responses(
        (status = 200, description = "User or null", body = UserResponseObj),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_object_id(&path)?;
    let user = state.users.find_one(&id).await?;
    Ok(envelope::ok(user))
}

/// Partially update a user.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "24-character hex object id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponseObj),
        (status = 400, description = "Invalid body or id", body = ErrorResponse),
        (status = 404, description = "User Not Found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    payload: ValidatedJson<UpdateUserRequest>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_object_id(&path)?;
    let changes = UserChanges::from(payload.into_inner());
    let user = state.users.update(&id, &changes).await?;
    Ok(envelope::ok(user))
}

/// Delete a user. Referenced hobbies are left in place.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "24-character hex object id")),
    responses(
        (status = 200, description = "Removed user", body = UserResponseObj),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "User Not Found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_object_id(&path)?;
    let user = state.users.delete(&id).await?;
    Ok(envelope::ok(user))
}

#[cfg(test)]
mod tests;

//! Hobby API handlers.
//!
//! ```text
//! GET    /api/v1/hobbies
//! POST   /api/v1/hobbies       {"name":"Running","passionLevel":"high","year":"2015"}
//! GET    /api/v1/hobbies/{id}
//! PUT    /api/v1/hobbies/{id}  {"year":"2016"}
//! DELETE /api/v1/hobbies/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{HobbyChanges, NewHobby, PassionLevel};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope;
use crate::inbound::http::schemas::{
    ErrorResponse, HobbyResponseArray, HobbyResponseObj, PassionLevelSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, RequestSchema, SchemaViolation, ValidatedJson, parse_object_id, reject_null,
    require_alphanumeric, require_text, when_present,
};

const NAME: FieldName = FieldName::new("name");
const YEAR: FieldName = FieldName::new("year");

/// Request body for `POST /api/v1/hobbies`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateHobbyRequest {
    /// Client-supplied id; accepted and ignored.
    #[serde(rename = "_id", default, deserialize_with = "reject_null")]
    pub client_id: Option<String>,
    #[schema(example = "Running")]
    pub name: String,
    #[schema(value_type = PassionLevelSchema)]
    pub passion_level: PassionLevel,
    /// Alphanumeric year; defaults to an empty string.
    #[serde(default, deserialize_with = "reject_null")]
    #[schema(example = "2015")]
    pub year: Option<String>,
}

impl RequestSchema for CreateHobbyRequest {
    fn check(&self) -> Result<(), SchemaViolation> {
        require_text(NAME, &self.name)?;
        when_present(self.year.as_deref(), |year| require_alphanumeric(YEAR, year))
    }
}

impl From<CreateHobbyRequest> for NewHobby {
    fn from(value: CreateHobbyRequest) -> Self {
        Self {
            name: value.name,
            passion_level: value.passion_level,
            year: value.year.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT /api/v1/hobbies/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateHobbyRequest {
    #[serde(rename = "_id", default, deserialize_with = "reject_null")]
    pub client_id: Option<String>,
    #[serde(default, deserialize_with = "reject_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "reject_null")]
    #[schema(value_type = Option<PassionLevelSchema>)]
    pub passion_level: Option<PassionLevel>,
    #[serde(default, deserialize_with = "reject_null")]
    pub year: Option<String>,
}

impl RequestSchema for UpdateHobbyRequest {
    fn check(&self) -> Result<(), SchemaViolation> {
        when_present(self.name.as_deref(), |name| require_text(NAME, name))?;
        when_present(self.year.as_deref(), |year| require_alphanumeric(YEAR, year))
    }
}

impl From<UpdateHobbyRequest> for HobbyChanges {
    fn from(value: UpdateHobbyRequest) -> Self {
        Self {
            name: value.name,
            passion_level: value.passion_level,
            year: value.year,
        }
    }
}

/// List every hobby.
#[utoipa::path(
    get,
    path = "/api/v1/hobbies",
    responses(
        (status = 200, description = "All hobbies", body = HobbyResponseArray),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["hobbies"],
    operation_id = "listHobbies"
)]
#[get("/hobbies")]
pub async fn list_hobbies(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let hobbies = state.hobbies.find_all().await?;
    Ok(envelope::ok(hobbies))
}

/// Create a hobby.
#[utoipa::path(
    post,
    path = "/api/v1/hobbies",
    request_body = CreateHobbyRequest,
    responses(
        (status = 201, description = "Hobby created", body = HobbyResponseObj),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["hobbies"],
    operation_id = "createHobby"
)]
#[post("/hobbies")]
pub async fn create_hobby(
    state: web::Data<HttpState>,
    payload: ValidatedJson<CreateHobbyRequest>,
) -> ApiResult<HttpResponse> {
    let new = NewHobby::from(payload.into_inner());
    let hobby = state.hobbies.create(&new).await?;
    Ok(envelope::created(hobby))
}

/// Fetch one hobby. An unknown id yields `data: null`.
#[utoipa::path(
    get,
    path = "/api/v1/hobbies/{id}",
    params(("id" = String, Path, description = "24-character hex object id")),
    responses(
        (status = 200, description = "Hobby or null", body = HobbyResponseObj),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["hobbies"],
    operation_id = "getHobby"
)]
#[get("/hobbies/{id}")]
pub async fn get_hobby(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_object_id(&path)?;
    let hobby = state.hobbies.find_one(&id).await?;
    Ok(envelope::ok(hobby))
}

/// Partially update a hobby.
#[utoipa::path(
    put,
    path = "/api/v1/hobbies/{id}",
    params(("id" = String, Path, description = "24-character hex object id")),
    request_body = UpdateHobbyRequest,
    responses(
        (status = 200, description = "Updated hobby", body = HobbyResponseObj),
        (status = 400, description = "Invalid body or id", body = ErrorResponse),
        (status = 404, description = "Hobby Not Found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["hobbies"],
    operation_id = "updateHobby"
)]
#[put("/hobbies/{id}")]
pub async fn update_hobby(
    state: web::Data<HttpState>,
    payload: ValidatedJson<UpdateHobbyRequest>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_object_id(&path)?;
    let changes = HobbyChanges::from(payload.into_inner());
    let hobby = state.hobbies.update(&id, &changes).await?;
    Ok(envelope::ok(hobby))
}

/// Delete a hobby. Users referencing it keep the dangling id.
#[utoipa::path(
    delete,
    path = "/api/v1/hobbies/{id}",
    params(("id" = String, Path, description = "24-character hex object id")),
    responses(
        (status = 200, description = "Removed hobby", body = HobbyResponseObj),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Hobby Not Found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["hobbies"],
    operation_id = "deleteHobby"
)]
#[delete("/hobbies/{id}")]
pub async fn delete_hobby(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_object_id(&path)?;
    let hobby = state.hobbies.delete(&id).await?;
    Ok(envelope::ok(hobby))
}

#[cfg(test)]
#[path = "hobbies_tests.rs"]
mod tests;

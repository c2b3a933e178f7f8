//! OpenAPI schema definitions for domain types and response envelopes.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and exist only for documentation.

#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa during OpenAPI generation"
)]

use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::PassionLevel`].
#[derive(ToSchema)]
#[schema(as = PassionLevel)]
pub enum PassionLevelSchema {
    #[schema(rename = "low")]
    Low,
    #[schema(rename = "medium")]
    Medium,
    #[schema(rename = "high")]
    High,
    #[schema(rename = "very-high")]
    VeryHigh,
}

/// OpenAPI schema for [`crate::domain::Hobby`].
#[derive(ToSchema)]
#[schema(as = Hobby)]
#[schema(rename_all = "camelCase")]
pub struct HobbySchema {
    /// 24-character hexadecimal object id.
    #[schema(example = "507f1f77bcf86cd799439011")]
    id: String,
    #[schema(example = "Running")]
    name: String,
    passion_level: PassionLevelSchema,
    /// Alphanumeric year, possibly empty.
    #[schema(example = "2015")]
    year: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// OpenAPI schema for [`crate::domain::PopulatedUser`] and
/// [`crate::domain::User`].
///
/// Reads return `hobbies` expanded into hobby documents; create, update and
/// delete return the referenced ids.
#[derive(ToSchema)]
#[schema(as = User)]
#[schema(rename_all = "camelCase")]
pub struct UserSchema {
    #[schema(example = "65a1b2c3d4e5f60718293a4b")]
    id: String,
    #[schema(example = "Ada")]
    name: String,
    hobbies: Vec<HobbySchema>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Envelope carrying a single hobby, or `null` for an unknown id.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct HobbyResponseObj {
    #[schema(example = true)]
    status: bool,
    #[schema(example = 200)]
    code: u16,
    #[schema(example = "Success")]
    message: String,
    #[schema(example = "v1")]
    app_version: String,
    data: Option<HobbySchema>,
}

/// Envelope carrying every hobby.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct HobbyResponseArray {
    #[schema(example = true)]
    status: bool,
    #[schema(example = 200)]
    code: u16,
    #[schema(example = "Success")]
    message: String,
    #[schema(example = "v1")]
    app_version: String,
    data: Vec<HobbySchema>,
}

/// Envelope carrying a single user, or `null` for an unknown id.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UserResponseObj {
    #[schema(example = true)]
    status: bool,
    #[schema(example = 200)]
    code: u16,
    #[schema(example = "Success")]
    message: String,
    #[schema(example = "v1")]
    app_version: String,
    data: Option<UserSchema>,
}

/// Envelope carrying every user.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UserResponseArray {
    #[schema(example = true)]
    status: bool,
    #[schema(example = 200)]
    code: u16,
    #[schema(example = "Success")]
    message: String,
    #[schema(example = "v1")]
    app_version: String,
    data: Vec<UserSchema>,
}

/// Failure envelope.
///
/// Client errors use `message: "Failed"` with `data.error`; internal errors
/// carry the raw error text as `message` and an empty `data` object.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[schema(example = false)]
    status: bool,
    #[schema(example = 400)]
    code: u16,
    #[schema(example = "Failed")]
    message: String,
    #[schema(example = "v1")]
    app_version: String,
    #[schema(example = json!({"error": "Bad Request"}))]
    data: serde_json::Value,
}

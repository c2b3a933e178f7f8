//! Uniform response envelope.
//!
//! Every hobby and user endpoint answers with
//! `{ "status", "code", "message", "appVersion", "data" }`; the HTTP status
//! always equals `code`.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// API version reported in every envelope.
pub const API_VERSION: &str = "v1";
/// Message carried by successful envelopes.
pub const SUCCESS_MESSAGE: &str = "Success";
/// Message carried by client-error envelopes.
pub const FAILURE_MESSAGE: &str = "Failed";

/// Response body shared by every resource endpoint.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use hobbies_api::inbound::http::envelope::Envelope;
///
/// let envelope = Envelope::success(StatusCode::CREATED, 42);
/// let json = serde_json::to_value(&envelope).unwrap();
/// assert_eq!(json["status"], true);
/// assert_eq!(json["code"], 201);
/// assert_eq!(json["appVersion"], "v1");
/// assert_eq!(json["data"], 42);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub status: bool,
    pub code: u16,
    pub message: String,
    pub app_version: String,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Build an envelope for an arbitrary outcome.
    pub fn new(status: bool, code: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            code: code.as_u16(),
            message: message.into(),
            app_version: API_VERSION.to_owned(),
            data,
        }
    }

    /// Successful envelope carrying `data`.
    pub fn success(code: StatusCode, data: T) -> Self {
        Self::new(true, code, SUCCESS_MESSAGE, data)
    }

    /// Failed envelope with an explicit message.
    pub fn failure(code: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self::new(false, code, message, data)
    }
}

impl<T: Serialize> Envelope<T> {
    /// Render the envelope with the HTTP status matching `code`.
    pub fn into_response(self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}

/// `200 OK` envelope response.
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    Envelope::success(StatusCode::OK, data).into_response()
}

/// `201 Created` envelope response.
pub fn created<T: Serialize>(data: T) -> HttpResponse {
    Envelope::success(StatusCode::CREATED, data).into_response()
}

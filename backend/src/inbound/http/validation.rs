//! Request validation for inbound HTTP adapters.
//!
//! Bodies are validated declaratively: each request DTO implements
//! [`RequestSchema`] and is extracted through [`ValidatedJson`], which rejects
//! malformed JSON, unknown keys, wrong types and rule violations alike with a
//! generic `Bad Request`. The detail is logged and never echoed to clients.

use std::fmt;

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::domain::{Error, ObjectId};
use crate::middleware::trace::TraceId;

/// Message returned for every rejected request body or identifier.
pub const BAD_REQUEST: &str = "Bad Request";

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName(&'static str);

impl FieldName {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        self.0
    }
}

/// A rule a request body broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    field: FieldName,
    reason: &'static str,
}

impl SchemaViolation {
    pub const fn new(field: FieldName, reason: &'static str) -> Self {
        Self { field, reason }
    }

    pub fn field(&self) -> &str {
        self.field.as_str()
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" {}", self.field.as_str(), self.reason)
    }
}

/// Declarative schema for a JSON request body.
///
/// Structural rules (required keys, types, enumerations, unknown keys) are
/// expressed through serde attributes on the implementing type; `check`
/// covers the value rules serde cannot.
pub trait RequestSchema: DeserializeOwned {
    fn check(&self) -> Result<(), SchemaViolation>;
}

/// JSON body extractor that enforces a [`RequestSchema`].
///
/// An empty body is read as `{}`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn reject(detail: impl fmt::Display) -> Error {
    let trace_id = TraceId::current().map(|id| id.to_string());
    warn!(%detail, trace_id = ?trace_id, "request failed validation");
    Error::invalid_request(BAD_REQUEST)
}

/// Deserialize and check a raw body against `T`.
pub fn validate_body<T: RequestSchema>(bytes: &[u8]) -> Result<T, Error> {
    let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        bytes
    };
    let value: T = serde_json::from_slice(body).map_err(reject)?;
    value.check().map_err(reject)?;
    Ok(value)
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: RequestSchema + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = fut.await.map_err(reject)?;
            validate_body(&bytes).map(ValidatedJson)
        })
    }
}

/// Validate a path segment as an object id before any store access.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(raw).map_err(reject)
}

/// Deserialize an optional field that may be omitted but not sent as `null`.
///
/// Pair with `#[serde(default)]` so a missing key still yields `None`.
pub fn reject_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Require a non-empty string. Whitespace counts as content.
pub fn require_text(field: FieldName, value: &str) -> Result<(), SchemaViolation> {
    if value.is_empty() {
        return Err(SchemaViolation::new(field, "is not allowed to be empty"));
    }
    Ok(())
}

/// Require a non-empty string of ASCII letters and digits.
pub fn require_alphanumeric(field: FieldName, value: &str) -> Result<(), SchemaViolation> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(SchemaViolation::new(
            field,
            "must only contain alpha-numeric characters",
        ));
    }
    Ok(())
}

/// Apply `rule` when an optional field is present.
pub fn when_present<F>(value: Option<&str>, rule: F) -> Result<(), SchemaViolation>
where
    F: FnOnce(&str) -> Result<(), SchemaViolation>,
{
    value.map_or(Ok(()), rule)
}

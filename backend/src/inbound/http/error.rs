//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while rendering every
//! failure as the failure envelope. Client errors carry the generic failure
//! message with the detail under `data.error`; internal errors carry the raw
//! error text as the message and an empty object as data.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::{Value, json};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::envelope::{Envelope, FAILURE_MESSAGE};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build the failure envelope for `error`.
pub(crate) fn failure_envelope(error: &Error) -> Envelope<Value> {
    let status = status_for(error.code());
    match error.code() {
        ErrorCode::InternalError => Envelope::failure(status, error.message(), json!({})),
        ErrorCode::InvalidRequest | ErrorCode::NotFound => Envelope::failure(
            status,
            FAILURE_MESSAGE,
            json!({ "error": error.message() }),
        ),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(failure_envelope(self))
    }
}

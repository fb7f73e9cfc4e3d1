//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting handlers turn
//! failures into consistent JSON envelopes and status codes. Extractor
//! failures (bad JSON, bad path or query parameters) are folded into the same
//! envelope through the `*Config` error handlers below.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};

use super::validation::{USER_ID_FIELD, ValidationCode, field_error};
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

/// Pull the field name out of serde's "missing field `x`" and
/// "unknown field `x`" messages.
fn offending_field(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once("field `")?;
    let (field, _) = rest.split_once('`')?;
    Some(field)
}

fn invalid_body(message: &str) -> Error {
    let text = format!("invalid request body: {message}");
    match offending_field(message) {
        Some(field) if message.starts_with("missing field") => {
            field_error(field, ValidationCode::MissingField, text)
        }
        Some(field) => field_error(field, ValidationCode::InvalidValue, text),
        None => Error::invalid_request(text),
    }
}

/// JSON body configuration reporting failures as `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let error = match &err {
            JsonPayloadError::Deserialize(inner) => invalid_body(&inner.to_string()),
            JsonPayloadError::ContentType => {
                Error::invalid_request("request body must be application/json")
            }
            other => invalid_body(&other.to_string()),
        };
        error.into()
    })
}

/// Path parameter configuration reporting failures as `invalid_request`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        let PathError::Deserialize(inner) = &err else {
            return Error::invalid_request("invalid path parameter").into();
        };
        field_error(
            USER_ID_FIELD.as_str(),
            ValidationCode::InvalidValue,
            format!("invalid path parameter: {inner}"),
        )
        .into()
    })
}

/// Query string configuration reporting failures as `invalid_request`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        let message = err.to_string();
        let text = format!("invalid query string: {message}");
        match offending_field(&message) {
            Some(field) => field_error(field, ValidationCode::InvalidValue, text),
            None => Error::invalid_request(text),
        }
        .into()
    })
}

#[cfg(test)]
mod tests;

//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, UserId, UserValidationError};

/// Machine-readable reason attached to field validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidUuid,
    InvalidValue,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidValue => "invalid_value",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) const fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const USER_ID_FIELD: FieldName = FieldName::new("userId");
pub(crate) const NAME_FIELD: FieldName = FieldName::new("name");

/// `invalid_request` error pointing at `field`.
pub(crate) fn field_error(
    field: &str,
    code: ValidationCode,
    message: impl Into<String>,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    field_error(
        field.as_str(),
        ValidationCode::MissingField,
        format!("missing required field: {}", field.as_str()),
    )
}

/// Parse a user id supplied in a body or path.
pub(crate) fn parse_user_id(raw: &str, field: FieldName) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| match err {
        UserValidationError::EmptyId => missing_field_error(field),
        other => field_error(field.as_str(), ValidationCode::InvalidUuid, other.to_string()),
    })
}

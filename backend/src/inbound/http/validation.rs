//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, OwnerId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidOwnerId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidOwnerId => "invalid_owner_id",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const OWNER_ID: FieldName = FieldName::new("ownerId");

fn invalid_value_error(field: FieldName, code: ErrorCode, message: String, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

/// Parse a path segment into an [`OwnerId`].
///
/// Non-numeric and zero values become `invalid_request` errors whose details
/// name the offending field and value.
pub(crate) fn parse_owner_id(value: &str, field: FieldName) -> Result<OwnerId, Error> {
    value.parse::<OwnerId>().map_err(|err| {
        invalid_value_error(
            field,
            ErrorCode::InvalidOwnerId,
            format!("{}: {err}", field.as_str()),
            value,
        )
    })
}

//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their domain counterparts for documentation only and
//! live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed, for example a non-numeric owner id.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested owner does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The owner directory cannot be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "owner 42 not found")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::OwnerForm`].
///
/// Submitted as `application/x-www-form-urlencoded`; missing fields bind to
/// empty strings and fail validation.
#[derive(ToSchema)]
#[schema(as = crate::domain::OwnerForm, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OwnerFormSchema {
    #[schema(example = "George")]
    first_name: String,
    #[schema(example = "Franklin")]
    last_name: String,
    #[schema(example = "110 W. Liberty St.")]
    address: String,
    #[schema(example = "Madison")]
    city: String,
    /// At most ten digits.
    #[schema(example = "6085551023", pattern = "^[0-9]{1,10}$")]
    telephone: String,
}

/// OpenAPI schema for [`crate::domain::FieldError`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldErrorSchema {
    /// Form field name.
    #[schema(example = "telephone")]
    field: String,
    /// `required`, `digits` or `notFound`.
    #[schema(example = "required")]
    code: String,
    #[schema(example = "must not be empty")]
    message: String,
}

/// OpenAPI schema for the rendered view envelope.
#[derive(ToSchema)]
#[schema(as = ViewEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ViewEnvelopeSchema {
    /// Logical view name, also sent as `X-View-Name`.
    #[schema(example = "owners/createOrUpdateOwnerForm")]
    view: String,
    /// View model: an owner, a search echo or `{"selections": [...]}`.
    #[schema(value_type = Object)]
    model: serde_json::Value,
    /// Field annotations; empty when the form is valid.
    errors: Vec<FieldErrorSchema>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        assert_eq!(ErrorCodeSchema::name(), "crate.domain.ErrorCode");
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "not_found",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("traceId"), "schema should use traceId");
        assert!(schema_json.contains("message"));
    }

    #[test]
    fn owner_form_schema_lists_every_field() {
        assert_eq!(OwnerFormSchema::name(), "crate.domain.OwnerForm");
        let schema_json = schema_to_json::<OwnerFormSchema>();
        for field in ["firstName", "lastName", "address", "city", "telephone"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }

    #[test]
    fn view_envelope_schema_has_view_model_and_errors() {
        let schema_json = schema_to_json::<ViewEnvelopeSchema>();
        for field in ["view", "model", "errors"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }
}

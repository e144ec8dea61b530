//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the owner screens and health probes together with the
//! schema wrappers from [`crate::inbound::http::schemas`], so domain types stay
//! free of utoipa derives.
//!
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FieldErrorSchema, OwnerFormSchema, ViewEnvelopeSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the HTTP interface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet clinic owner service",
        description = "Owner registration, search and maintenance screens plus health probes.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::owners::init_creation_form,
        crate::inbound::http::owners::process_creation_form,
        crate::inbound::http::owners::init_find_form,
        crate::inbound::http::owners::process_find_form,
        crate::inbound::http::owners::init_update_owner_form,
        crate::inbound::http::owners::process_update_owner_form,
        crate::inbound::http::owners::show_owner,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        OwnerFormSchema,
        FieldErrorSchema,
        ViewEnvelopeSchema
    )),
    tags(
        (name = "owners", description = "Clinic owner screens"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

//! Clinic owner management service.
//!
//! Layout follows ports and adapters: [`domain`] holds the owner model,
//! validation and use-cases; [`inbound`] adapts HTTP requests onto them and
//! [`outbound`] implements the owner directory port.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

//! Domain primitives, validation and use-cases.
//!
//! Purpose: define the owner model and its rules independently of HTTP.
//! Inbound adapters translate requests into these types; outbound adapters
//! implement [`ports::OwnerDirectory`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Owner, OwnerId, OwnerDetails, OwnerRecord: the owner lifecycle.
//! - OwnerForm, FieldErrors, validate_owner_form: explicit form validation.
//! - SearchOutcome: zero/one/many classification of last-name searches.
//! - OwnerRegistry: owner use-cases over the directory port.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod owner;
pub mod owner_form;
pub mod owner_registry;
pub mod owner_search;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::owner::{Owner, OwnerDetails, OwnerId, OwnerIdValidationError, OwnerRecord};
pub use self::owner_form::{
    FieldError, FieldErrorCode, FieldErrors, OwnerField, OwnerForm, TELEPHONE_MAX_DIGITS,
    validate_owner_form,
};
pub use self::owner_registry::OwnerRegistry;
pub use self::owner_search::SearchOutcome;
pub use self::trace_id::TraceId;

/// Header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

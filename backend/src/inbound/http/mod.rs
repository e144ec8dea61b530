//! HTTP inbound adapter serving the owner screens and health probes.

pub mod error;
pub mod health;
pub mod owners;
pub mod schemas;
pub mod state;
pub mod validation;
pub mod view;

pub use error::ApiResult;

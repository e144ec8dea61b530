//! Driven port for owner storage.
//!
//! The owner directory stores and retrieves owners. The domain never sees
//! how: production wiring uses the in-memory adapter, while tests substitute
//! doubles or a mock.

use async_trait::async_trait;

use crate::domain::{Owner, OwnerId, OwnerRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by owner directory adapters.
    pub enum OwnerDirectoryError {
        /// The backing store could not be reached.
        Connection { message: String } => "owner directory connection failed: {message}",
        /// A lookup or write failed while executing.
        Query { message: String } => "owner directory query failed: {message}",
    }
}

/// Storage abstraction for owners.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerDirectory: Send + Sync {
    /// Owners whose last name starts with `last_name`, ordered by id.
    ///
    /// An empty `last_name` matches every owner.
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, OwnerDirectoryError>;

    /// Owner stored under `id`, if any.
    async fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>, OwnerDirectoryError>;

    /// Create or replace an owner and return it as stored.
    ///
    /// Records without an id are assigned the next free identifier.
    async fn save(&self, record: OwnerRecord) -> Result<Owner, OwnerDirectoryError>;
}

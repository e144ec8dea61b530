//! Owner registry domain service.
//!
//! Wraps the [`OwnerDirectory`] port with the owner use-cases the HTTP
//! adapter needs and maps directory failures onto domain [`Error`]s.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::ports::{OwnerDirectory, OwnerDirectoryError};
use crate::domain::{Error, Owner, OwnerDetails, OwnerId, OwnerRecord, SearchOutcome};

fn map_directory_error(error: OwnerDirectoryError) -> Error {
    match error {
        OwnerDirectoryError::Connection { message } => {
            Error::service_unavailable(format!("owner directory unavailable: {message}"))
        }
        OwnerDirectoryError::Query { message } => {
            Error::internal(format!("owner directory error: {message}"))
        }
    }
}

fn owner_not_found(id: OwnerId) -> Error {
    Error::not_found(format!("owner {id} not found"))
}

/// Owner use-cases over a directory.
#[derive(Clone)]
pub struct OwnerRegistry {
    directory: Arc<dyn OwnerDirectory>,
}

impl OwnerRegistry {
    /// Create a registry backed by `directory`.
    pub fn new(directory: Arc<dyn OwnerDirectory>) -> Self {
        Self { directory }
    }

    /// Search owners by last-name prefix; `""` matches everyone.
    pub async fn search(&self, last_name: &str) -> Result<SearchOutcome, Error> {
        let owners = self
            .directory
            .find_by_last_name(last_name)
            .await
            .map_err(map_directory_error)?;
        let outcome = SearchOutcome::classify(owners);
        debug!(
            last_name,
            matches = outcome.match_count(),
            "owner search completed"
        );
        Ok(outcome)
    }

    /// Load a single owner.
    ///
    /// # Errors
    /// [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound) when no
    /// owner has `id`.
    pub async fn find(&self, id: OwnerId) -> Result<Owner, Error> {
        self.directory
            .find_by_id(id)
            .await
            .map_err(map_directory_error)?
            .ok_or_else(|| owner_not_found(id))
    }

    /// Persist a new owner and return it with its assigned id.
    pub async fn register(&self, details: OwnerDetails) -> Result<Owner, Error> {
        let owner = self
            .directory
            .save(OwnerRecord::new(details))
            .await
            .map_err(map_directory_error)?;
        info!(owner_id = %owner.id(), "owner registered");
        Ok(owner)
    }

    /// Replace the fields of an existing owner, keeping its id.
    ///
    /// # Errors
    /// [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound) when no
    /// owner has `id`; the directory is not written in that case.
    pub async fn update(&self, id: OwnerId, details: OwnerDetails) -> Result<Owner, Error> {
        self.find(id).await?;
        let owner = self
            .directory
            .save(OwnerRecord::existing(id, details))
            .await
            .map_err(map_directory_error)?;
        info!(owner_id = %owner.id(), "owner updated");
        Ok(owner)
    }
}

#[cfg(test)]
#[path = "owner_registry_tests.rs"]
mod tests;

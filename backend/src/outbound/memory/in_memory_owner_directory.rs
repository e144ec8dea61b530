//! In-memory [`OwnerDirectory`] adapter.
//!
//! Owners live in a `BTreeMap` keyed by id, so lookups come back in id order.
//! Identifiers are allocated sequentially from one and never reused.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{OwnerDirectory, OwnerDirectoryError};
use crate::domain::{Owner, OwnerDetails, OwnerId, OwnerRecord};

#[derive(Debug, Default)]
struct DirectoryState {
    owners: BTreeMap<OwnerId, Owner>,
    last_id: u32,
}

impl DirectoryState {
    fn allocate_id(&mut self) -> Result<OwnerId, OwnerDirectoryError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| OwnerDirectoryError::query("owner id space exhausted"))?;
        let id = OwnerId::new(next)
            .map_err(|err| OwnerDirectoryError::query(format!("invalid owner id: {err}")))?;
        self.last_id = next;
        Ok(id)
    }

    fn store(&mut self, record: OwnerRecord) -> Result<Owner, OwnerDirectoryError> {
        let (id, details) = record.into_parts();
        let id = match id {
            Some(id) => {
                self.last_id = self.last_id.max(id.get());
                id
            }
            None => self.allocate_id()?,
        };
        let owner = Owner::new(id, details);
        self.owners.insert(id, owner.clone());
        Ok(owner)
    }
}

fn poisoned() -> OwnerDirectoryError {
    OwnerDirectoryError::connection("owner directory lock poisoned")
}

/// Owner directory held entirely in process memory.
///
/// # Examples
/// ```
/// use petclinic::domain::ports::OwnerDirectory;
/// use petclinic::outbound::memory::InMemoryOwnerDirectory;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let directory = InMemoryOwnerDirectory::with_example_owners().expect("seed");
/// let davises = directory.find_by_last_name("Davis").await.expect("lookup");
/// assert_eq!(davises.len(), 2);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryOwnerDirectory {
    state: RwLock<DirectoryState>,
}

impl InMemoryOwnerDirectory {
    /// Empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-populated with `owners`, assigned ids from one.
    ///
    /// # Errors
    /// Propagates id allocation failures.
    pub fn with_owners(
        owners: impl IntoIterator<Item = OwnerDetails>,
    ) -> Result<Self, OwnerDirectoryError> {
        let mut state = DirectoryState::default();
        for details in owners {
            state.store(OwnerRecord::new(details))?;
        }
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Directory seeded with the clinic's sample owners.
    ///
    /// # Errors
    /// Fails only if the sample table no longer validates.
    pub fn with_example_owners() -> Result<Self, OwnerDirectoryError> {
        let owners = super::example_owners()
            .map_err(|err| OwnerDirectoryError::query(format!("invalid example owner: {err}")))?;
        Self::with_owners(owners)
    }

    /// Number of stored owners.
    ///
    /// # Errors
    /// Fails when the lock is poisoned.
    pub fn len(&self) -> Result<usize, OwnerDirectoryError> {
        Ok(self.state.read().map_err(|_| poisoned())?.owners.len())
    }

    /// `true` when nothing has been stored.
    ///
    /// # Errors
    /// Fails when the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, OwnerDirectoryError> {
        self.len().map(|count| count == 0)
    }
}

#[async_trait]
impl OwnerDirectory for InMemoryOwnerDirectory {
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, OwnerDirectoryError> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state
            .owners
            .values()
            .filter(|owner| owner.last_name().starts_with(last_name))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>, OwnerDirectoryError> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state.owners.get(&id).cloned())
    }

    async fn save(&self, record: OwnerRecord) -> Result<Owner, OwnerDirectoryError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        state.store(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn details(first_name: &str, last_name: &str) -> OwnerDetails {
        OwnerDetails::try_from_parts(first_name, last_name, "1 Main St.", "Madison", "6085550000")
            .expect("owner details")
    }

    #[fixture]
    fn seeded() -> InMemoryOwnerDirectory {
        InMemoryOwnerDirectory::with_example_owners().expect("seeded directory")
    }

    #[rstest]
    #[tokio::test]
    async fn empty_last_name_matches_everyone(seeded: InMemoryOwnerDirectory) {
        let owners = seeded.find_by_last_name("").await.expect("lookup");
        assert_eq!(owners.len(), 10);
        let ids: Vec<u32> = owners.iter().map(|owner| owner.id().get()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[rstest]
    #[case("Davis", 2)]
    #[case("Da", 2)]
    #[case("Es", 2)]
    #[case("Franklin", 1)]
    #[case("davis", 0)]
    #[case("Dont find ME!", 0)]
    #[tokio::test]
    async fn last_name_matches_by_prefix(
        seeded: InMemoryOwnerDirectory,
        #[case] last_name: &str,
        #[case] expected: usize,
    ) {
        let owners = seeded.find_by_last_name(last_name).await.expect("lookup");
        assert_eq!(owners.len(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn save_without_id_assigns_next_id(seeded: InMemoryOwnerDirectory) {
        let owner = seeded
            .save(OwnerRecord::new(details("Jacques", "vdMerwe")))
            .await
            .expect("save");
        assert_eq!(owner.id().get(), 11);
        assert_eq!(seeded.len().expect("len"), 11);
    }

    #[rstest]
    #[tokio::test]
    async fn save_with_id_replaces_in_place(seeded: InMemoryOwnerDirectory) {
        let id = OwnerId::new(1).expect("owner id");
        seeded
            .save(OwnerRecord::existing(id, details("Jacques", "vdMerwe")))
            .await
            .expect("save");

        let stored = seeded.find_by_id(id).await.expect("lookup").expect("owner");
        assert_eq!(stored.last_name(), "vdMerwe");
        assert_eq!(seeded.len().expect("len"), 10);
    }

    #[rstest]
    #[tokio::test]
    async fn explicit_ids_are_never_reissued() {
        let directory = InMemoryOwnerDirectory::new();
        assert!(directory.is_empty().expect("is_empty"));
        let id = OwnerId::new(5).expect("owner id");
        directory
            .save(OwnerRecord::existing(id, details("Jean", "Coleman")))
            .await
            .expect("save");

        let created = directory
            .save(OwnerRecord::new(details("Jeff", "Black")))
            .await
            .expect("save");
        assert_eq!(created.id().get(), 6);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_id_is_none(seeded: InMemoryOwnerDirectory) {
        let id = OwnerId::new(404).expect("owner id");
        assert!(seeded.find_by_id(id).await.expect("lookup").is_none());
    }
}

//! Recording owner directory for behavioural tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use petclinic::domain::ports::{OwnerDirectory, OwnerDirectoryError};
use petclinic::domain::{Owner, OwnerId, OwnerRecord};
use petclinic::outbound::memory::InMemoryOwnerDirectory;

/// Delegates to an in-memory directory and records every last-name lookup.
#[derive(Clone)]
pub(crate) struct RecordingOwnerDirectory {
    inner: Arc<InMemoryOwnerDirectory>,
    last_name_queries: Arc<Mutex<Vec<String>>>,
}

impl RecordingOwnerDirectory {
    pub(crate) fn with_example_owners() -> Self {
        let inner = InMemoryOwnerDirectory::with_example_owners().expect("example owners seed");
        Self {
            inner: Arc::new(inner),
            last_name_queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn last_name_queries(&self) -> Vec<String> {
        self.last_name_queries
            .lock()
            .expect("last name queries lock")
            .clone()
    }
}

#[async_trait]
impl OwnerDirectory for RecordingOwnerDirectory {
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, OwnerDirectoryError> {
        self.last_name_queries
            .lock()
            .expect("last name queries lock")
            .push(last_name.to_owned());
        self.inner.find_by_last_name(last_name).await
    }

    async fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>, OwnerDirectoryError> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, record: OwnerRecord) -> Result<Owner, OwnerDirectoryError> {
        self.inner.save(record).await
    }
}

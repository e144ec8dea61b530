//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain use-cases and remain testable without I/O.

use std::sync::Arc;

use crate::domain::OwnerRegistry;
use crate::domain::ports::OwnerDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub owners: OwnerRegistry,
}

impl HttpState {
    /// Construct state over an owner directory.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use petclinic::inbound::http::state::HttpState;
    /// use petclinic::outbound::memory::InMemoryOwnerDirectory;
    ///
    /// let state = HttpState::new(Arc::new(InMemoryOwnerDirectory::new()));
    /// let _owners = state.owners.clone();
    /// ```
    pub fn new(directory: Arc<dyn OwnerDirectory>) -> Self {
        Self {
            owners: OwnerRegistry::new(directory),
        }
    }
}

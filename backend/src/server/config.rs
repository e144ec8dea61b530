//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use petclinic::domain::ports::OwnerDirectory;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) directory: Option<Arc<dyn OwnerDirectory>>,
}

impl ServerConfig {
    /// Construct a server configuration listening on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            directory: None,
        }
    }

    /// Attach the owner directory the handlers should use.
    ///
    /// Without one the server starts with an empty in-memory directory.
    #[must_use]
    pub fn with_directory(mut self, directory: Arc<dyn OwnerDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

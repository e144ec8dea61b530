//! In-memory adapters.

mod example_owners;
mod in_memory_owner_directory;

pub use example_owners::example_owners;
pub use in_memory_owner_directory::InMemoryOwnerDirectory;

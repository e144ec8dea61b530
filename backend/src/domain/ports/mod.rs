//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod owner_directory;

#[cfg(test)]
pub use owner_directory::MockOwnerDirectory;
pub use owner_directory::{OwnerDirectory, OwnerDirectoryError};

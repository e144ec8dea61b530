//! Outbound adapters implementing domain ports.
//!
//! Only an in-memory owner directory ships today; a database-backed adapter
//! would sit alongside [`memory`] and implement the same port.

pub mod memory;

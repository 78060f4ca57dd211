//! Outbound adapters implementing the domain storage ports.
//!
//! - **memory**: process-lifetime tables behind mutexes (ephemeral)
//! - **persistence**: PostgreSQL repositories using Diesel ORM (durable)
//!
//! Adapters are thin translators between domain records and their storage
//! representation. They contain no business rules.

pub mod memory;
pub mod persistence;

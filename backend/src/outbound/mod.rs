//! Outbound adapters implementing the domain repository ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: in-process store used when no database is configured.
//!
//! Adapters translate between domain documents and storage representations
//! and hold no business rules.

pub mod memory;
pub mod persistence;

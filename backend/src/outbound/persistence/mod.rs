//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories only translate between Diesel rows and domain documents.
//! Rows (`models.rs`) and table definitions (`schema.rs`) stay private to
//! this module, and every database failure is mapped to the owning port's
//! error type.
//!
//! ```ignore
//! use std::sync::Arc;
//! use hobbies_api::outbound::persistence::{DbPool, DieselHobbyRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/hobbies")).await?;
//! let hobbies = DieselHobbyRepository::new(pool, Arc::new(mockable::DefaultClock));
//! ```

mod diesel_hobby_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_hobby_repository::DieselHobbyRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending as run_pending_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};

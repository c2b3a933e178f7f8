//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod hobby_repository;
mod user_repository;

#[cfg(test)]
pub use hobby_repository::MockHobbyRepository;
pub use hobby_repository::{FixtureHobbyRepository, HobbyRepository, HobbyRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};

//! Port for user persistence.
//!
//! Users reference hobbies by id. Reads return [`PopulatedUser`] values whose
//! references are expanded one level; writes return the plain [`User`] with
//! references as identifiers.

use async_trait::async_trait;

use crate::domain::{NewUser, ObjectId, PopulatedUser, User, UserChanges};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
        /// A hobby reference is not a valid object id.
        InvalidReference { value: String } =>
            "invalid hobby reference {value:?}: expected a 24-character hexadecimal object id",
    }
}

/// Port for user storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user.
    ///
    /// Every hobby reference must resolve to a syntactically valid id,
    /// otherwise [`UserRepositoryError::InvalidReference`] is returned and
    /// nothing is written. Existence of the referenced hobby is not checked.
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError>;

    /// Fetch a user by id with hobby references expanded.
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<PopulatedUser>, UserRepositoryError>;

    /// Fetch every user with hobby references expanded.
    async fn list(&self) -> Result<Vec<PopulatedUser>, UserRepositoryError>;

    /// Merge `changes` into the stored user.
    ///
    /// A supplied `hobbies` list replaces the stored one and is resolved the
    /// same way as on create.
    async fn update(
        &self,
        id: &ObjectId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Remove a user, returning the removed document when it existed.
    async fn delete(&self, id: &ObjectId) -> Result<Option<User>, UserRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let hobbies = crate::domain::HobbyRef::resolve_all(&user.hobbies)
            .map_err(|err| UserRepositoryError::invalid_reference(err.value()))?;
        let now = chrono::Utc::now();
        Ok(User::create(
            ObjectId::generate(now),
            user.name.clone(),
            hobbies,
            now,
        ))
    }

    async fn find_by_id(
        &self,
        _id: &ObjectId,
    ) -> Result<Option<PopulatedUser>, UserRepositoryError> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<PopulatedUser>, UserRepositoryError> {
        Ok(Vec::new())
    }

    async fn update(
        &self,
        _id: &ObjectId,
        _changes: &UserChanges,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }

    async fn delete(&self, _id: &ObjectId) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }
}

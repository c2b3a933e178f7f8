//! User domain service.

use std::sync::Arc;

use tracing::error;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{Error, NewUser, ObjectId, PopulatedUser, User, UserChanges};
use crate::middleware::trace::TraceId;

/// Message returned when an update or delete addresses a missing user.
pub const USER_NOT_FOUND: &str = "User Not Found";

/// User operations exposed to inbound adapters.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a service backed by `repo`.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    fn map_repository_error(err: UserRepositoryError) -> Error {
        let trace_id = TraceId::current().map(|id| id.to_string());
        error!(error = %err, trace_id = ?trace_id, "user repository operation failed");
        Error::internal(err.to_string())
    }

    /// Store a new user. Malformed hobby references fail here.
    pub async fn create(&self, user: &NewUser) -> Result<User, Error> {
        self.repo
            .create(user)
            .await
            .map_err(Self::map_repository_error)
    }

    /// Fetch one user with hobbies expanded; absence is not an error.
    pub async fn find_one(&self, id: &ObjectId) -> Result<Option<PopulatedUser>, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)
    }

    /// Fetch every user with hobbies expanded.
    pub async fn find_all(&self) -> Result<Vec<PopulatedUser>, Error> {
        self.repo.list().await.map_err(Self::map_repository_error)
    }

    /// Apply a partial update to an existing user.
    pub async fn update(&self, id: &ObjectId, changes: &UserChanges) -> Result<User, Error> {
        self.ensure_exists(id).await?;
        self.repo
            .update(id, changes)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }

    /// Delete an existing user and return it. Hobbies are not touched.
    pub async fn delete(&self, id: &ObjectId) -> Result<User, Error> {
        self.ensure_exists(id).await?;
        self.repo
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }

    async fn ensure_exists(&self, id: &ObjectId) -> Result<(), Error> {
        match self.find_one(id).await? {
            Some(_) => Ok(()),
            None => Err(Error::not_found(USER_NOT_FOUND)),
        }
    }
}

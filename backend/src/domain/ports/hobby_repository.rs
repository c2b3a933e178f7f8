//! Port for hobby persistence.
//!
//! Adapters store hobbies as documents keyed by [`ObjectId`]. They assign the
//! identifier and both timestamps on create and refresh `updated_at` on
//! update. Lookups report absence with `None` rather than an error so the
//! HTTP layer can decide how to render a missing document.

use async_trait::async_trait;

use crate::domain::{Hobby, HobbyChanges, NewHobby, ObjectId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by hobby repository adapters.
    pub enum HobbyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "hobby repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "hobby repository query failed: {message}",
    }
}

/// Port for hobby storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HobbyRepository: Send + Sync {
    /// Store a new hobby and return it with its id and timestamps.
    async fn create(&self, hobby: &NewHobby) -> Result<Hobby, HobbyRepositoryError>;

    /// Fetch a hobby by id.
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Hobby>, HobbyRepositoryError>;

    /// Fetch every hobby.
    async fn list(&self) -> Result<Vec<Hobby>, HobbyRepositoryError>;

    /// Merge `changes` into the stored hobby.
    ///
    /// Returns the updated document, or `None` when no hobby has this id.
    async fn update(
        &self,
        id: &ObjectId,
        changes: &HobbyChanges,
    ) -> Result<Option<Hobby>, HobbyRepositoryError>;

    /// Remove a hobby, returning the removed document when it existed.
    ///
    /// Users referencing the hobby are left untouched.
    async fn delete(&self, id: &ObjectId) -> Result<Option<Hobby>, HobbyRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
///
/// Creation echoes the input with a fresh id; every lookup finds nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHobbyRepository;

#[async_trait]
impl HobbyRepository for FixtureHobbyRepository {
    async fn create(&self, hobby: &NewHobby) -> Result<Hobby, HobbyRepositoryError> {
        let now = chrono::Utc::now();
        Ok(Hobby::create(ObjectId::generate(now), hobby, now))
    }

    async fn find_by_id(&self, _id: &ObjectId) -> Result<Option<Hobby>, HobbyRepositoryError> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<Hobby>, HobbyRepositoryError> {
        Ok(Vec::new())
    }

    async fn update(
        &self,
        _id: &ObjectId,
        _changes: &HobbyChanges,
    ) -> Result<Option<Hobby>, HobbyRepositoryError> {
        Ok(None)
    }

    async fn delete(&self, _id: &ObjectId) -> Result<Option<Hobby>, HobbyRepositoryError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PassionLevel;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_create_echoes_fields() {
        let repo = FixtureHobbyRepository;
        let new = NewHobby {
            name: "Chess".into(),
            passion_level: PassionLevel::Low,
            year: String::new(),
        };

        let hobby = repo.create(&new).await.expect("fixture create succeeds");

        assert_eq!(hobby.name, "Chess");
        assert_eq!(hobby.passion_level, PassionLevel::Low);
        assert_eq!(hobby.created_at, hobby.updated_at);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_lookups_find_nothing() {
        let repo = FixtureHobbyRepository;
        let id = ObjectId::generate(chrono::Utc::now());

        assert!(repo.find_by_id(&id).await.expect("lookup").is_none());
        assert!(repo.list().await.expect("list").is_empty());
        assert!(
            repo.update(&id, &HobbyChanges::default())
                .await
                .expect("update")
                .is_none()
        );
        assert!(repo.delete(&id).await.expect("delete").is_none());
    }

    #[rstest]
    fn errors_format_messages() {
        let err = HobbyRepositoryError::query("syntax error");
        assert_eq!(err.to_string(), "hobby repository query failed: syntax error");
    }
}

//! Hobby domain service.
//!
//! Wraps a [`HobbyRepository`] with the existence checks performed before
//! update and delete, and maps adapter failures onto domain [`Error`]s.

use std::sync::Arc;

use tracing::error;

use crate::domain::ports::{HobbyRepository, HobbyRepositoryError};
use crate::domain::{Error, Hobby, HobbyChanges, NewHobby, ObjectId};
use crate::middleware::trace::TraceId;

/// Message returned when an update or delete addresses a missing hobby.
pub const HOBBY_NOT_FOUND: &str = "Hobby Not Found";

/// Hobby operations exposed to inbound adapters.
#[derive(Clone)]
pub struct HobbyService {
    repo: Arc<dyn HobbyRepository>,
}

impl HobbyService {
    /// Create a service backed by `repo`.
    pub fn new(repo: Arc<dyn HobbyRepository>) -> Self {
        Self { repo }
    }

    fn map_repository_error(err: HobbyRepositoryError) -> Error {
        let trace_id = TraceId::current().map(|id| id.to_string());
        error!(error = %err, trace_id = ?trace_id, "hobby repository operation failed");
        Error::internal(err.to_string())
    }

    /// Store a new hobby.
    pub async fn create(&self, hobby: &NewHobby) -> Result<Hobby, Error> {
        self.repo
            .create(hobby)
            .await
            .map_err(Self::map_repository_error)
    }

    /// Fetch one hobby; absence is not an error.
    pub async fn find_one(&self, id: &ObjectId) -> Result<Option<Hobby>, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)
    }

    /// Fetch every hobby.
    pub async fn find_all(&self) -> Result<Vec<Hobby>, Error> {
        self.repo.list().await.map_err(Self::map_repository_error)
    }

    /// Apply a partial update to an existing hobby.
    ///
    /// Fails with [`HOBBY_NOT_FOUND`] when the hobby does not exist, either at
    /// the existence check or because it vanished before the write.
    pub async fn update(&self, id: &ObjectId, changes: &HobbyChanges) -> Result<Hobby, Error> {
        self.ensure_exists(id).await?;
        self.repo
            .update(id, changes)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(HOBBY_NOT_FOUND))
    }

    /// Delete an existing hobby and return it.
    pub async fn delete(&self, id: &ObjectId) -> Result<Hobby, Error> {
        self.ensure_exists(id).await?;
        self.repo
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(HOBBY_NOT_FOUND))
    }

    async fn ensure_exists(&self, id: &ObjectId) -> Result<(), Error> {
        match self.find_one(id).await? {
            Some(_) => Ok(()),
            None => Err(Error::not_found(HOBBY_NOT_FOUND)),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::PassionLevel;
    use crate::domain::ports::MockHobbyRepository;

    #[fixture]
    fn hobby() -> Hobby {
        let now = Utc::now();
        let new = NewHobby {
            name: "Running".into(),
            passion_level: PassionLevel::High,
            year: "2015".into(),
        };
        Hobby::create(ObjectId::generate(now), &new, now)
    }

    fn service(repo: MockHobbyRepository) -> HobbyService {
        HobbyService::new(Arc::new(repo))
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_missing_hobby_is_not_found_without_writing() {
        let id = ObjectId::generate(Utc::now());
        let mut repo = MockHobbyRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .times(1)
            .return_once(|_| Ok(None));
        repo.expect_update().times(0);

        let err = service(repo)
            .update(&id, &HobbyChanges::default())
            .await
            .expect_err("missing hobby");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), HOBBY_NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_existing_hobby_returns_document(hobby: Hobby) {
        let id = hobby.id;
        let mut updated = hobby.clone();
        updated.year = "2020".into();
        let expected = updated.clone();
        let mut repo = MockHobbyRepository::new();
        repo.expect_find_by_id()
            .return_once(move |_| Ok(Some(hobby)));
        repo.expect_update()
            .withf(move |candidate, changes| {
                *candidate == id && changes.year.as_deref() == Some("2020")
            })
            .return_once(move |_, _| Ok(Some(updated)));

        let changes = HobbyChanges {
            year: Some("2020".into()),
            ..HobbyChanges::default()
        };
        let result = service(repo).update(&id, &changes).await.expect("updated");

        assert_eq!(result, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_that_loses_a_race_is_not_found(hobby: Hobby) {
        let id = hobby.id;
        let mut repo = MockHobbyRepository::new();
        repo.expect_find_by_id()
            .return_once(move |_| Ok(Some(hobby)));
        repo.expect_delete().return_once(|_| Ok(None));

        let err = service(repo).delete(&id).await.expect_err("vanished hobby");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn repository_failures_surface_raw_text_as_internal() {
        let mut repo = MockHobbyRepository::new();
        repo.expect_list()
            .return_once(|| Err(HobbyRepositoryError::connection("pool timed out")));

        let err = service(repo).find_all().await.expect_err("failure");

        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(
            err.message(),
            "hobby repository connection failed: pool timed out"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn find_one_passes_absence_through() {
        let mut repo = MockHobbyRepository::new();
        repo.expect_find_by_id().return_once(|_| Ok(None));

        let found = service(repo)
            .find_one(&ObjectId::generate(Utc::now()))
            .await
            .expect("lookup succeeds");

        assert!(found.is_none());
    }
}

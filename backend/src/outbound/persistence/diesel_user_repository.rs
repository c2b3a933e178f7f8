//! PostgreSQL-backed `UserRepository`.
//!
//! Hobby references live in a `text[]` column. Reads expand them with a
//! single batched lookup against `hobbies` per call.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::Clock;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{Hobby, HobbyRef, NewUser, ObjectId, PopulatedUser, User, UserChanges};

use super::diesel_hobby_repository::load_hobbies;
use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserChangeset, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel implementation of [`UserRepository`].
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

fn pool_error(error: PoolError) -> UserRepositoryError {
    map_pool_error(error, UserRepositoryError::connection)
}

fn diesel_error(operation: &'static str) -> impl FnOnce(diesel::result::Error) -> UserRepositoryError {
    move |error| {
        map_diesel_error(
            error,
            operation,
            UserRepositoryError::query,
            UserRepositoryError::connection,
        )
    }
}

fn to_domain(row: UserRow) -> Result<User, UserRepositoryError> {
    User::try_from(row).map_err(UserRepositoryError::query)
}

/// Resolve client references to stored text, rejecting the first bad one.
fn resolve_refs(refs: &[HobbyRef]) -> Result<Vec<String>, UserRepositoryError> {
    HobbyRef::resolve_all(refs)
        .map(|ids| ids.iter().map(ObjectId::to_hex).collect())
        .map_err(|err| UserRepositoryError::invalid_reference(err.value()))
}

impl DieselUserRepository {
    async fn populate(&self, users: Vec<User>) -> Result<Vec<PopulatedUser>, UserRepositoryError> {
        let mut wanted: Vec<String> = users
            .iter()
            .flat_map(|user| user.hobbies.iter().map(ObjectId::to_hex))
            .collect();
        wanted.sort_unstable();
        wanted.dedup();

        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = load_hobbies(&mut conn, wanted)
            .await
            .map_err(diesel_error("expand hobby references"))?;
        let known = rows
            .into_iter()
            .map(|row| {
                Hobby::try_from(row)
                    .map(|hobby| (hobby.id, hobby))
                    .map_err(UserRepositoryError::query)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(users.iter().map(|user| user.populate(&known)).collect())
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let hobby_ids = resolve_refs(&user.hobbies)?;
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let now = self.clock.utc();
        let row = NewUserRow {
            id: ObjectId::generate(now).to_hex(),
            name: &user.name,
            hobby_ids,
            created_at: now,
            updated_at: now,
        };

        let stored = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error("insert user"))?;
        to_domain(stored)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<PopulatedUser>, UserRepositoryError> {
        let row = {
            let mut conn = self.pool.get().await.map_err(pool_error)?;
            users::table
                .find(id.to_hex())
                .select(UserRow::as_select())
                .first(&mut conn)
                .await
                .optional()
                .map_err(diesel_error("find user"))?
        };
        let Some(user) = row.map(to_domain).transpose()? else {
            return Ok(None);
        };
        Ok(self.populate(vec![user]).await?.pop())
    }

    async fn list(&self) -> Result<Vec<PopulatedUser>, UserRepositoryError> {
        let rows = {
            let mut conn = self.pool.get().await.map_err(pool_error)?;
            users::table
                .order((users::created_at.asc(), users::id.asc()))
                .select(UserRow::as_select())
                .load(&mut conn)
                .await
                .map_err(diesel_error("list users"))?
        };
        let users = rows
            .into_iter()
            .map(to_domain)
            .collect::<Result<Vec<_>, _>>()?;
        self.populate(users).await
    }

    async fn update(
        &self,
        id: &ObjectId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserRepositoryError> {
        let hobby_ids = changes.hobbies.as_deref().map(resolve_refs).transpose()?;
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let changeset = UserChangeset {
            name: changes.name.as_deref(),
            hobby_ids,
            updated_at: self.clock.utc(),
        };

        let row = diesel::update(users::table.find(id.to_hex()))
            .set(&changeset)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("update user"))?;
        row.map(to_domain).transpose()
    }

    async fn delete(&self, id: &ObjectId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = diesel::delete(users::table.find(id.to_hex()))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("delete user"))?;
        row.map(to_domain).transpose()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn resolve_refs_normalises_to_lowercase_hex() {
        let refs = [HobbyRef::new("507F1F77BCF86CD799439011")];
        assert_eq!(
            resolve_refs(&refs).expect("valid reference"),
            ["507f1f77bcf86cd799439011"]
        );
    }

    #[rstest]
    fn resolve_refs_names_the_first_bad_reference() {
        let refs = [
            HobbyRef::new("507f1f77bcf86cd799439011"),
            HobbyRef::new("nope"),
            HobbyRef::new("also-bad"),
        ];
        assert_eq!(
            resolve_refs(&refs),
            Err(UserRepositoryError::invalid_reference("nope"))
        );
    }
}

//! PostgreSQL-backed `HobbyRepository`.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::Clock;

use crate::domain::ports::{HobbyRepository, HobbyRepositoryError};
use crate::domain::{Hobby, HobbyChanges, NewHobby, ObjectId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{HobbyChangeset, HobbyRow, NewHobbyRow};
use super::pool::{DbPool, PoolError};
use super::schema::hobbies;

/// Diesel implementation of [`HobbyRepository`].
///
/// Identifiers are minted here from the injected clock, so `id` and
/// `createdAt` share one instant.
#[derive(Clone)]
pub struct DieselHobbyRepository {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselHobbyRepository {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

fn pool_error(error: PoolError) -> HobbyRepositoryError {
    map_pool_error(error, HobbyRepositoryError::connection)
}

fn diesel_error(operation: &'static str) -> impl FnOnce(diesel::result::Error) -> HobbyRepositoryError {
    move |error| {
        map_diesel_error(
            error,
            operation,
            HobbyRepositoryError::query,
            HobbyRepositoryError::connection,
        )
    }
}

fn to_domain(row: HobbyRow) -> Result<Hobby, HobbyRepositoryError> {
    Hobby::try_from(row).map_err(HobbyRepositoryError::query)
}

/// Fetch hobbies whose id is in `ids`; unknown ids are skipped.
pub(super) async fn load_hobbies<C>(
    conn: &mut C,
    ids: Vec<String>,
) -> Result<Vec<HobbyRow>, diesel::result::Error>
where
    C: diesel_async::AsyncConnection<Backend = diesel::pg::Pg> + Send,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    hobbies::table
        .filter(hobbies::id.eq_any(ids))
        .select(HobbyRow::as_select())
        .load(conn)
        .await
}

#[async_trait]
impl HobbyRepository for DieselHobbyRepository {
    async fn create(&self, hobby: &NewHobby) -> Result<Hobby, HobbyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let now = self.clock.utc();
        let row = NewHobbyRow {
            id: ObjectId::generate(now).to_hex(),
            name: &hobby.name,
            passion_level: hobby.passion_level.as_str(),
            year: &hobby.year,
            created_at: now,
            updated_at: now,
        };

        let stored = diesel::insert_into(hobbies::table)
            .values(&row)
            .returning(HobbyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error("insert hobby"))?;
        to_domain(stored)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Hobby>, HobbyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = hobbies::table
            .find(id.to_hex())
            .select(HobbyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("find hobby"))?;
        row.map(to_domain).transpose()
    }

    async fn list(&self) -> Result<Vec<Hobby>, HobbyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows = hobbies::table
            .order((hobbies::created_at.asc(), hobbies::id.asc()))
            .select(HobbyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error("list hobbies"))?;
        rows.into_iter().map(to_domain).collect()
    }

    async fn update(
        &self,
        id: &ObjectId,
        changes: &HobbyChanges,
    ) -> Result<Option<Hobby>, HobbyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let changeset = HobbyChangeset {
            name: changes.name.as_deref(),
            passion_level: changes.passion_level.map(|level| level.as_str()),
            year: changes.year.as_deref(),
            updated_at: self.clock.utc(),
        };

        let row = diesel::update(hobbies::table.find(id.to_hex()))
            .set(&changeset)
            .returning(HobbyRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("update hobby"))?;
        row.map(to_domain).transpose()
    }

    async fn delete(&self, id: &ObjectId) -> Result<Option<Hobby>, HobbyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = diesel::delete(hobbies::table.find(id.to_hex()))
            .returning(HobbyRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("delete hobby"))?;
        row.map(to_domain).transpose()
    }
}

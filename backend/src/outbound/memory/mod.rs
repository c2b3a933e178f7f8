//! In-process document store.
//!
//! Used when no database URL is configured, and by integration tests that
//! exercise the full HTTP stack without PostgreSQL. Both repositories share
//! one [`MemoryStore`] so user reads can expand hobby references under a
//! single lock.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mockable::Clock;
use tracing::error;

use crate::domain::ports::{
    HobbyRepository, HobbyRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Hobby, HobbyChanges, HobbyRef, NewHobby, NewUser, ObjectId, PopulatedUser, User, UserChanges,
};

const POISONED: &str = "memory store lock poisoned";

/// Documents kept in insertion order, mirroring a collection's natural order.
#[derive(Debug, Default)]
struct Documents {
    hobbies: Vec<Hobby>,
    users: Vec<User>,
}

impl Documents {
    fn hobby_index(&self) -> HashMap<ObjectId, Hobby> {
        self.hobbies
            .iter()
            .map(|hobby| (hobby.id, hobby.clone()))
            .collect()
    }
}

/// Shared backing store for [`MemoryHobbyRepository`] and
/// [`MemoryUserRepository`].
pub struct MemoryStore {
    documents: RwLock<Documents>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    pub fn new(clock: Arc<dyn Clock>) -> Arc<Self> {
        Arc::new(Self {
            documents: RwLock::new(Documents::default()),
            clock,
        })
    }

    /// Hobby repository view over this store.
    pub fn hobbies(self: &Arc<Self>) -> MemoryHobbyRepository {
        MemoryHobbyRepository {
            store: Arc::clone(self),
        }
    }

    /// User repository view over this store.
    pub fn users(self: &Arc<Self>) -> MemoryUserRepository {
        MemoryUserRepository {
            store: Arc::clone(self),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Documents>, &'static str> {
        self.documents.read().map_err(|_| {
            error!("{POISONED}");
            POISONED
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Documents>, &'static str> {
        self.documents.write().map_err(|_| {
            error!("{POISONED}");
            POISONED
        })
    }
}

/// [`HobbyRepository`] backed by a [`MemoryStore`].
#[derive(Clone)]
pub struct MemoryHobbyRepository {
    store: Arc<MemoryStore>,
}

#[async_trait]
impl HobbyRepository for MemoryHobbyRepository {
    async fn create(&self, hobby: &NewHobby) -> Result<Hobby, HobbyRepositoryError> {
        let now = self.store.clock.utc();
        let created = Hobby::create(ObjectId::generate(now), hobby, now);
        let mut docs = self.store.write().map_err(HobbyRepositoryError::connection)?;
        docs.hobbies.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Hobby>, HobbyRepositoryError> {
        let docs = self.store.read().map_err(HobbyRepositoryError::connection)?;
        Ok(docs.hobbies.iter().find(|hobby| hobby.id == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<Hobby>, HobbyRepositoryError> {
        let docs = self.store.read().map_err(HobbyRepositoryError::connection)?;
        Ok(docs.hobbies.clone())
    }

    async fn update(
        &self,
        id: &ObjectId,
        changes: &HobbyChanges,
    ) -> Result<Option<Hobby>, HobbyRepositoryError> {
        let now = self.store.clock.utc();
        let mut docs = self.store.write().map_err(HobbyRepositoryError::connection)?;
        Ok(docs
            .hobbies
            .iter_mut()
            .find(|hobby| hobby.id == *id)
            .map(|hobby| {
                hobby.apply(changes, now);
                hobby.clone()
            }))
    }

    async fn delete(&self, id: &ObjectId) -> Result<Option<Hobby>, HobbyRepositoryError> {
        let mut docs = self.store.write().map_err(HobbyRepositoryError::connection)?;
        let position = docs.hobbies.iter().position(|hobby| hobby.id == *id);
        Ok(position.map(|index| docs.hobbies.remove(index)))
    }
}

/// [`UserRepository`] backed by a [`MemoryStore`].
#[derive(Clone)]
pub struct MemoryUserRepository {
    store: Arc<MemoryStore>,
}

fn resolve(refs: &[HobbyRef]) -> Result<Vec<ObjectId>, UserRepositoryError> {
    HobbyRef::resolve_all(refs).map_err(|err| UserRepositoryError::invalid_reference(err.value()))
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let hobbies = resolve(&user.hobbies)?;
        let now = self.store.clock.utc();
        let created = User::create(ObjectId::generate(now), user.name.clone(), hobbies, now);
        let mut docs = self.store.write().map_err(UserRepositoryError::connection)?;
        docs.users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<PopulatedUser>, UserRepositoryError> {
        let docs = self.store.read().map_err(UserRepositoryError::connection)?;
        let Some(user) = docs.users.iter().find(|user| user.id == *id) else {
            return Ok(None);
        };
        Ok(Some(user.populate(&docs.hobby_index())))
    }

    async fn list(&self) -> Result<Vec<PopulatedUser>, UserRepositoryError> {
        let docs = self.store.read().map_err(UserRepositoryError::connection)?;
        let known = docs.hobby_index();
        Ok(docs.users.iter().map(|user| user.populate(&known)).collect())
    }

    async fn update(
        &self,
        id: &ObjectId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserRepositoryError> {
        let hobbies = changes.hobbies.as_deref().map(resolve).transpose()?;
        let now = self.store.clock.utc();
        let mut docs = self.store.write().map_err(UserRepositoryError::connection)?;
        let Some(user) = docs.users.iter_mut().find(|user| user.id == *id) else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            user.name.clone_from(name);
        }
        if let Some(hobbies) = hobbies {
            user.hobbies = hobbies;
        }
        user.updated_at = now;
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: &ObjectId) -> Result<Option<User>, UserRepositoryError> {
        let mut docs = self.store.write().map_err(UserRepositoryError::connection)?;
        let position = docs.users.iter().position(|user| user.id == *id);
        Ok(position.map(|index| docs.users.remove(index)))
    }
}

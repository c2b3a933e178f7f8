//! Builds the repository-backed HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::Clock;
use tracing::info;

use hobbies_api::domain::ports::{HobbyRepository, UserRepository};
use hobbies_api::inbound::http::state::HttpState;
use hobbies_api::outbound::memory::MemoryStore;
use hobbies_api::outbound::persistence::{DieselHobbyRepository, DieselUserRepository};

use super::ServerConfig;

/// Wire Diesel repositories when a pool is configured, otherwise share one
/// in-memory store between both resources.
pub(super) fn build_http_state(
    config: &ServerConfig,
    clock: Arc<dyn Clock>,
) -> web::Data<HttpState> {
    let (hobbies, users): (Arc<dyn HobbyRepository>, Arc<dyn UserRepository>) =
        match &config.db_pool {
            Some(pool) => {
                info!("using PostgreSQL document store");
                (
                    Arc::new(DieselHobbyRepository::new(pool.clone(), clock.clone())),
                    Arc::new(DieselUserRepository::new(pool.clone(), clock)),
                )
            }
            None => {
                info!("no database configured; using in-memory document store");
                let store = MemoryStore::new(clock);
                (Arc::new(store.hobbies()), Arc::new(store.users()))
            }
        };
    web::Data::new(HttpState::new(hobbies, users))
}

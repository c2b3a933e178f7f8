//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{HobbyRepository, UserRepository};
use crate::domain::{HobbyService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub hobbies: HobbyService,
    pub users: UserService,
}

impl HttpState {
    /// Construct state from the two resource repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use hobbies_api::domain::ports::{FixtureHobbyRepository, FixtureUserRepository};
    /// use hobbies_api::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureHobbyRepository),
    ///     Arc::new(FixtureUserRepository),
    /// );
    /// let _ = state.hobbies.clone();
    /// ```
    pub fn new(hobbies: Arc<dyn HobbyRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            hobbies: HobbyService::new(hobbies),
            users: UserService::new(users),
        }
    }
}

//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod health;
pub mod hobbies;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Path prefix shared by every resource route.
pub const API_PREFIX: &str = "/api/v1";

/// Build the `/api/v1` scope with the health check and both resources.
///
/// Handlers expect [`state::HttpState`] to be registered as app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use hobbies_api::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope(API_PREFIX)
        .service(health::health)
        .service(hobbies::list_hobbies)
        .service(hobbies::create_hobby)
        .service(hobbies::get_hobby)
        .service(hobbies::update_hobby)
        .service(hobbies::delete_hobby)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
}

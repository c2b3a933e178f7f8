//! Domain primitives and aggregates.
//!
//! Purpose: define the documents served by the API and the services that
//! orchestrate them. Types are transport agnostic; serde contracts are
//! documented on each type.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - ObjectId: 24-hex document identifier.
//! - Hobby, PassionLevel: hobby documents.
//! - User, PopulatedUser, HobbyRef: user documents and hobby references.
//! - HobbyService, UserService: driving operations used by handlers.

pub mod error;
pub mod hobby;
pub mod hobby_service;
pub mod object_id;
pub mod ports;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::hobby::{Hobby, HobbyChanges, NewHobby, PassionLevel, UnknownPassionLevel};
pub use self::hobby_service::{HOBBY_NOT_FOUND, HobbyService};
pub use self::object_id::{OBJECT_ID_HEX_LEN, ObjectId, ObjectIdError};
pub use self::user::{HobbyRef, NewUser, PopulatedUser, User, UserChanges};
pub use self::user_service::{USER_NOT_FOUND, UserService};


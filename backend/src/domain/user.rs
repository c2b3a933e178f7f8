//! User documents and their references to hobbies.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Hobby, ObjectId, ObjectIdError};

/// Unchecked reference to a hobby as supplied by a client.
///
/// Request validation accepts any element in a user's `hobbies` array; the
/// reference is only resolved to an [`ObjectId`] when the user is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HobbyRef(String);

impl HobbyRef {
    /// Wrap raw reference text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Convert an arbitrary JSON element into a reference.
    ///
    /// Strings are taken verbatim; any other value keeps its JSON rendering
    /// so the write-time error names what the client sent.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(raw) => Self(raw),
            other => Self(other.to_string()),
        }
    }

    /// Raw reference text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Resolve the reference to a syntactically valid identifier.
    pub fn resolve(&self) -> Result<ObjectId, ObjectIdError> {
        ObjectId::parse_str(&self.0)
    }

    /// Resolve every reference, failing on the first malformed one.
    pub fn resolve_all(refs: &[Self]) -> Result<Vec<ObjectId>, ObjectIdError> {
        refs.iter().map(Self::resolve).collect()
    }
}

impl fmt::Display for HobbyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ObjectId> for HobbyRef {
    fn from(value: ObjectId) -> Self {
        Self(value.to_hex())
    }
}

/// A stored user with hobby references as identifiers.
///
/// This is the shape returned by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ObjectId,
    pub name: String,
    pub hobbies: Vec<ObjectId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user whose hobby references are expanded into hobby documents.
///
/// This is the shape returned by the read operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedUser {
    pub id: ObjectId,
    pub name: String,
    pub hobbies: Vec<Hobby>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub hobbies: Vec<HobbyRef>,
}

/// Partial user update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub hobbies: Option<Vec<HobbyRef>>,
}

impl User {
    /// Build a freshly stored user from already resolved references.
    pub fn create(id: ObjectId, name: String, hobbies: Vec<ObjectId>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            hobbies,
            created_at: now,
            updated_at: now,
        }
    }

    /// Expand hobby references one level.
    ///
    /// Order is preserved. References absent from `known` are dropped from
    /// the expansion; the stored user keeps them.
    pub fn populate(&self, known: &HashMap<ObjectId, Hobby>) -> PopulatedUser {
        PopulatedUser {
            id: self.id,
            name: self.name.clone(),
            hobbies: self
                .hobbies
                .iter()
                .filter_map(|id| known.get(id).cloned())
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests;

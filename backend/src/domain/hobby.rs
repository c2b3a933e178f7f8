//! Hobby documents.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ObjectId;

/// How strongly a user feels about a hobby.
///
/// The wire form is the lowercase, hyphenated name and is matched
/// case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassionLevel {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very-high")]
    VeryHigh,
}

impl PassionLevel {
    /// Every accepted level in ascending order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::VeryHigh];

    /// Wire and storage representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very-high",
        }
    }
}

impl fmt::Display for PassionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a [`PassionLevel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPassionLevel(pub String);

impl fmt::Display for UnknownPassionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown passion level {:?}", self.0)
    }
}

impl std::error::Error for UnknownPassionLevel {}

impl FromStr for PassionLevel {
    type Err = UnknownPassionLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownPassionLevel(s.to_owned()))
    }
}

/// A stored hobby.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hobby {
    pub id: ObjectId,
    pub name: String,
    pub passion_level: PassionLevel,
    pub year: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a hobby.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHobby {
    pub name: String,
    pub passion_level: PassionLevel,
    pub year: String,
}

/// Partial hobby update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HobbyChanges {
    pub name: Option<String>,
    pub passion_level: Option<PassionLevel>,
    pub year: Option<String>,
}

impl Hobby {
    /// Build a freshly stored hobby.
    pub fn create(id: ObjectId, new: &NewHobby, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name.clone(),
            passion_level: new.passion_level,
            year: new.year.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge `changes` into this hobby and refresh `updated_at`.
    pub fn apply(&mut self, changes: &HobbyChanges, now: DateTime<Utc>) {
        if let Some(name) = &changes.name {
            self.name.clone_from(name);
        }
        if let Some(level) = changes.passion_level {
            self.passion_level = level;
        }
        if let Some(year) = &changes.year {
            self.year.clone_from(year);
        }
        self.updated_at = now;
    }
}

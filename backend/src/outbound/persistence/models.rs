//! Diesel row types for the document tables.
//!
//! Rows are internal to the persistence adapter. Conversions into domain
//! documents are fallible because the stored text columns are only
//! constrained by the database, not by Rust types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Hobby, ObjectId, PassionLevel, User};

use super::schema::{hobbies, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hobbies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HobbyRow {
    pub id: String,
    pub name: String,
    pub passion_level: String,
    pub year: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = hobbies)]
pub(crate) struct NewHobbyRow<'a> {
    pub id: String,
    pub name: &'a str,
    pub passion_level: &'static str,
    pub year: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; `None` columns are left untouched by Diesel.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = hobbies)]
pub(crate) struct HobbyChangeset<'a> {
    pub name: Option<&'a str>,
    pub passion_level: Option<&'static str>,
    pub year: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<HobbyRow> for Hobby {
    type Error = String;

    fn try_from(row: HobbyRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ObjectId::parse_str(&row.id).map_err(|err| err.to_string())?,
            name: row.name,
            passion_level: row
                .passion_level
                .parse::<PassionLevel>()
                .map_err(|err| err.to_string())?,
            year: row.year,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: String,
    pub name: String,
    pub hobby_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: String,
    pub name: &'a str,
    pub hobby_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub name: Option<&'a str>,
    pub hobby_ids: Option<Vec<String>>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = String;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let hobbies = row
            .hobby_ids
            .iter()
            .map(|raw| ObjectId::parse_str(raw))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| err.to_string())?;
        Ok(Self {
            id: ObjectId::parse_str(&row.id).map_err(|err| err.to_string())?,
            name: row.name,
            hobbies,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn hobby_row(passion_level: &str) -> HobbyRow {
        let now = Utc::now();
        HobbyRow {
            id: "507f1f77bcf86cd799439011".into(),
            name: "Running".into(),
            passion_level: passion_level.into(),
            year: "2015".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    fn hobby_row_converts_to_domain() {
        let hobby = Hobby::try_from(hobby_row("very-high")).expect("row is valid");
        assert_eq!(hobby.passion_level, PassionLevel::VeryHigh);
        assert_eq!(hobby.id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[rstest]
    fn hobby_row_with_unknown_level_is_rejected() {
        let err = Hobby::try_from(hobby_row("extreme")).expect_err("invalid level");
        assert!(err.contains("extreme"));
    }

    #[rstest]
    fn user_row_keeps_reference_order() {
        let now = Utc::now();
        let row = UserRow {
            id: "65a1b2c3d4e5f60718293a4b".into(),
            name: "Ada".into(),
            hobby_ids: vec![
                "bbbbbbbbbbbbbbbbbbbbbbbb".into(),
                "aaaaaaaaaaaaaaaaaaaaaaaa".into(),
            ],
            created_at: now,
            updated_at: now,
        };
        let user = User::try_from(row).expect("row is valid");
        let ids: Vec<String> = user.hobbies.iter().map(ToString::to_string).collect();
        assert_eq!(ids, ["bbbbbbbbbbbbbbbbbbbbbbbb", "aaaaaaaaaaaaaaaaaaaaaaaa"]);
    }
}

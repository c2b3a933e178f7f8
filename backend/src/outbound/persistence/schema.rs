//! Diesel table definitions for the document tables.
//!
//! Kept in sync with `backend/migrations` by hand; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    hobbies (id) {
        id -> Text,
        name -> Text,
        passion_level -> Text,
        year -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    users (id) {
        id -> Text,
        name -> Text,
        hobby_ids -> Array<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(hobbies, users);

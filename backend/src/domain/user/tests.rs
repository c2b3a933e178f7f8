//! Tests for user documents and hobby references.

use std::collections::HashMap;

use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::{NewHobby, PassionLevel};

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

fn hobby(name: &str, now: DateTime<Utc>) -> Hobby {
    let new = NewHobby {
        name: name.into(),
        passion_level: PassionLevel::Medium,
        year: String::new(),
    };
    Hobby::create(ObjectId::generate(now), &new, now)
}

#[rstest]
#[case(json!("507f1f77bcf86cd799439011"), "507f1f77bcf86cd799439011")]
#[case(json!(42), "42")]
#[case(json!(null), "null")]
#[case(json!({"name": "x"}), "{\"name\":\"x\"}")]
fn from_json_keeps_client_text(#[case] value: serde_json::Value, #[case] expected: &str) {
    assert_eq!(HobbyRef::from_json(value).as_str(), expected);
}

#[rstest]
fn resolve_all_fails_on_first_malformed_reference() {
    let refs = vec![
        HobbyRef::new("507f1f77bcf86cd799439011"),
        HobbyRef::new("nope"),
        HobbyRef::new("also-bad"),
    ];
    let err = HobbyRef::resolve_all(&refs).expect_err("malformed reference is rejected");
    assert_eq!(err.value(), "nope");
}

#[rstest]
fn resolve_all_preserves_order() {
    let refs = vec![
        HobbyRef::new("bbbbbbbbbbbbbbbbbbbbbbbb"),
        HobbyRef::new("aaaaaaaaaaaaaaaaaaaaaaaa"),
    ];
    let ids = HobbyRef::resolve_all(&refs).expect("valid references");
    let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["bbbbbbbbbbbbbbbbbbbbbbbb", "aaaaaaaaaaaaaaaaaaaaaaaa"]);
}

#[rstest]
fn populate_expands_in_order_and_skips_dangling(now: DateTime<Utc>) {
    let chess = hobby("Chess", now);
    let climbing = hobby("Climbing", now);
    let dangling = ObjectId::generate(now);
    let user = User::create(
        ObjectId::generate(now),
        "Ada".into(),
        vec![climbing.id, dangling, chess.id],
        now,
    );
    let known = HashMap::from([(chess.id, chess.clone()), (climbing.id, climbing.clone())]);

    let populated = user.populate(&known);

    assert_eq!(populated.hobbies, vec![climbing, chess]);
    assert_eq!(user.hobbies.len(), 3, "stored references are untouched");
    assert_eq!(populated.id, user.id);
    assert_eq!(populated.name, "Ada");
}

#[rstest]
fn user_serialises_references_as_hex(now: DateTime<Utc>) {
    let id = ObjectId::parse_str("507f1f77bcf86cd799439011").expect("valid id");
    let user = User::create(ObjectId::generate(now), "Ada".into(), vec![id], now);
    let value = serde_json::to_value(&user).expect("user serialises");
    assert_eq!(value["hobbies"], json!(["507f1f77bcf86cd799439011"]));
    assert!(value.get("createdAt").is_some());
}

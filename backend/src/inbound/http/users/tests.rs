//! Tests for user HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::Utc;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    FixtureHobbyRepository, MockUserRepository, UserRepositoryError,
};
use crate::domain::{ObjectId, User};

const USER_ID: &str = "65a1b2c3d4e5f60718293a4b";
const HOBBY_ID: &str = "507f1f77bcf86cd799439011";

fn test_app(
    repo: MockUserRepository,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(FixtureHobbyRepository), Arc::new(repo));
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api/v1")
            .service(list_users)
            .service(create_user)
            .service(get_user)
            .service(update_user)
            .service(delete_user),
    )
}

fn ada() -> User {
    User::create(
        ObjectId::parse_str(USER_ID).expect("valid id"),
        "Ada".into(),
        vec![ObjectId::parse_str(HOBBY_ID).expect("valid id")],
        Utc::now(),
    )
}

async fn send(repo: MockUserRepository, req: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(repo)).await;
    let res = actix_test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let body = actix_test::read_body(res).await;
    (
        status,
        serde_json::from_slice(&body).expect("envelope is JSON"),
    )
}

#[rstest]
#[actix_web::test]
async fn create_passes_references_through_unchecked() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .withf(|new| {
            new.name == "Ada"
                && new
                    .hobbies
                    .iter()
                    .map(HobbyRef::as_str)
                    .eq([HOBBY_ID, "7"])
        })
        .times(1)
        .returning(|_| Err(UserRepositoryError::invalid_reference("7")));

    let (status, body) = send(
        repo,
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"name": "Ada", "hobbies": [HOBBY_ID, 7]})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], false);
    assert!(body["message"].as_str().is_some_and(|m| m.contains("\"7\"")));
    assert_eq!(body["data"], json!({}));
}

#[rstest]
#[actix_web::test]
async fn create_returns_201_with_reference_ids() {
    let mut repo = MockUserRepository::new();
    repo.expect_create().times(1).returning(|_| Ok(ada()));

    let (status, body) = send(
        repo,
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"name": "Ada", "hobbies": [HOBBY_ID]})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["hobbies"], json!([HOBBY_ID]));
}

#[rstest]
#[case(json!({"hobbies": []}))]
#[case(json!({"name": ""}))]
#[case(json!({"name": "Ada", "hobbies": "chess"}))]
#[case(json!({"name": "Ada", "age": 36}))]
#[case(json!({"name": null}))]
#[case(json!({"name": "Ada", "hobbies": null}))]
#[actix_web::test]
async fn create_rejects_invalid_bodies(#[case] payload: Value) {
    let mut repo = MockUserRepository::new();
    repo.expect_create().times(0);

    let (status, body) = send(
        repo,
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], json!({"error": "Bad Request"}));
}

#[rstest]
#[actix_web::test]
async fn get_returns_expanded_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(|_| Ok(Some(ada().populate(&Default::default()))));

    let (status, body) = send(
        repo,
        actix_test::TestRequest::get().uri(&format!("/api/v1/users/{USER_ID}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Ada");
    assert_eq!(body["data"]["hobbies"], json!([]));
}

#[rstest]
#[case(actix_test::TestRequest::get())]
#[case(actix_test::TestRequest::put().set_json(json!({"name": "Ada"})))]
#[case(actix_test::TestRequest::delete())]
#[actix_web::test]
async fn malformed_id_is_rejected(#[case] req: actix_test::TestRequest) {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().times(0);
    repo.expect_update().times(0);
    repo.expect_delete().times(0);

    let (status, _) = send(repo, req.uri("/api/v1/users/123")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn delete_of_unknown_user_is_404() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));
    repo.expect_delete().times(0);

    let (status, body) = send(
        repo,
        actix_test::TestRequest::delete().uri(&format!("/api/v1/users/{USER_ID}")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"], json!({"error": "User Not Found"}));
}

#[rstest]
#[case(json!({"name": null}))]
#[case(json!({"hobbies": null}))]
#[actix_web::test]
async fn update_rejects_null_fields(#[case] payload: Value) {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().times(0);
    repo.expect_update().times(0);

    let (status, body) = send(
        repo,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/users/{USER_ID}"))
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], json!({"error": "Bad Request"}));
}

#[rstest]
#[actix_web::test]
async fn update_replaces_references_when_supplied() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(|_| Ok(Some(ada().populate(&Default::default()))));
    repo.expect_update()
        .withf(|_, changes| {
            changes.name.is_none() && changes.hobbies.as_ref().is_some_and(Vec::is_empty)
        })
        .returning(|_, _| {
            let mut user = ada();
            user.hobbies.clear();
            Ok(Some(user))
        });

    let (status, body) = send(
        repo,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/users/{USER_ID}"))
            .set_json(json!({"hobbies": []})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Ada");
    assert_eq!(body["data"]["hobbies"], json!([]));
}

//! Assembles the HTTP API over an in-memory store for integration suites.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use hobbies_api::Trace;
use hobbies_api::inbound::http::api_scope;
use hobbies_api::inbound::http::health::{HealthState, live, ready};
use hobbies_api::inbound::http::state::HttpState;
use hobbies_api::outbound::memory::MemoryStore;
use mockable::DefaultClock;
use serde_json::Value;

/// Fresh, empty store.
pub fn memory_store() -> Arc<MemoryStore> {
    MemoryStore::new(Arc::new(DefaultClock))
}

/// The production route table wired to `store`.
pub fn app(
    store: &Arc<MemoryStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    let state = HttpState::new(Arc::new(store.hobbies()), Arc::new(store.users()));
    let health = HealthState::new();
    health.mark_ready();
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(health))
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live)
}

/// Send `req` and decode the JSON body.
pub async fn send<S, B>(service: &S, req: actix_http::Request) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = actix_test::call_service(service, req).await;
    let status = res.status();
    let body = actix_test::read_body(res).await;
    let json = serde_json::from_slice(&body).expect("response body is JSON");
    (status, json)
}

/// Assert the failure envelope for a client error.
pub fn assert_client_failure(body: &Value, code: u16, error: &str) {
    assert_eq!(body["status"], false);
    assert_eq!(body["code"], code);
    assert_eq!(body["message"], "Failed");
    assert_eq!(body["appVersion"], "v1");
    assert_eq!(body["data"]["error"], error);
}

/// Assert the success envelope and return its `data`.
pub fn success_data(body: &Value, code: u16) -> &Value {
    assert_eq!(body["status"], true);
    assert_eq!(body["code"], code);
    assert_eq!(body["message"], "Success");
    assert_eq!(body["appVersion"], "v1");
    &body["data"]
}

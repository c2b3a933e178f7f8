//! Health endpoints.
//!
//! `GET /api/v1/health` is the plain-text liveness check served inside the
//! API scope. The `/health/ready` and `/health/live` probes sit at the root
//! for orchestrators and report [`HealthState`].

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as draining so liveness checks fail fast.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// API health check. Always answers `OK`.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tags = ["health"],
    responses((status = 200, description = "Service is up", body = String, content_type = "text/plain"))
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::plaintext())
        .body("OK")
}

/// Readiness probe. 200 once the server is bound, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. 200 while the process is marked alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[actix_web::test]
    async fn health_answers_plain_ok() {
        let app = actix_test::init_service(App::new().service(web::scope("/api/v1").service(health)))
            .await;
        let req = actix_test::TestRequest::get().uri("/api/v1/health").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(actix_test::read_body(res).await, "OK");
    }

    #[rstest]
    #[case(false, true, "/health/ready", StatusCode::SERVICE_UNAVAILABLE)]
    #[case(true, true, "/health/ready", StatusCode::OK)]
    #[case(true, true, "/health/live", StatusCode::OK)]
    #[case(true, false, "/health/live", StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn probes_reflect_state(
        #[case] ready_flag: bool,
        #[case] live_flag: bool,
        #[case] uri: &str,
        #[case] expected: StatusCode,
    ) {
        let state = web::Data::new(HealthState::new());
        if ready_flag {
            state.mark_ready();
        }
        if !live_flag {
            state.mark_unhealthy();
        }
        let app = actix_test::init_service(
            App::new()
                .app_data(state.clone())
                .service(ready)
                .service(live),
        )
        .await;
        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), expected);
        assert_eq!(
            res.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(b"no-store".as_slice())
        );
    }
}

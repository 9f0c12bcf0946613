use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use crate::database::store::SubscriptionStore;
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub store: StoreHealth,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreHealth {
    pub status: String,
    pub subscriptions: usize,
    pub response_time_ms: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SubscriptionStore>,
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(store: Arc<SubscriptionStore>) -> Self {
        let state = AppState {
            store,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let start = std::time::Instant::now();

    // The store is healthy when its backing file still parses
    let store_ok = state.store.load().await.is_ok();

    let response_time_ms = start.elapsed().as_millis() as u64;
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    let status = if store_ok { "healthy" } else { "unhealthy" };
    let health_response = HealthResponse {
        status: status.to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: StoreHealth {
            status: status.to_string(),
            subscriptions: state.store.len().await,
            response_time_ms,
        },
        uptime_seconds: uptime,
    };

    let code = if store_ok { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (code, Json(health_response))
}

async fn readiness_check(State(state): State<AppState>) -> Result<Json<&'static str>, StatusCode> {
    match state.store.load().await {
        Ok(_) => Ok(Json("ready")),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use tempfile::TempDir;

    async fn create_test_health_service() -> (HealthService, Arc<SubscriptionStore>, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = Arc::new(
            SubscriptionStore::open(temp_dir.path().join("db.json"))
                .await
                .expect("Failed to open test store"),
        );

        (HealthService::new(store.clone()), store, temp_dir)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (health_service, _store, _temp_dir) = create_test_health_service().await;
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let health_response: HealthResponse = response.json();
        assert_eq!(health_response.status, "healthy");
        assert_eq!(health_response.store.status, "healthy");
        assert_eq!(health_response.store.subscriptions, 0);
        assert_eq!(health_response.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_reports_corrupt_store() {
        let (health_service, store, _temp_dir) = create_test_health_service().await;
        std::fs::write(store.path(), "[broken").expect("Failed to corrupt store");
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health").expect_failure().await;
        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let health_response: HealthResponse = response.json();
        assert_eq!(health_response.store.status, "unhealthy");

        let ready = server.get("/health/ready").expect_failure().await;
        assert_eq!(ready.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_readiness_endpoint() {
        let (health_service, _store, _temp_dir) = create_test_health_service().await;
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health/ready").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let ready_response: String = response.json();
        assert_eq!(ready_response, "ready");
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let (health_service, _store, _temp_dir) = create_test_health_service().await;
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health/live").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let alive_response: String = response.json();
        assert_eq!(alive_response, "alive");
    }
}

//! HTTP surface: the subscription form endpoints, static pages and health
//! checks, all on one router.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::database::{models::SubscriptionRecord, store::SubscriptionStore};
use crate::services::health::HealthService;

/// Body returned by `POST /subscribe`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    fn ok() -> Self {
        Self { status: "ok".to_string(), message: None }
    }

    fn error(message: String) -> Self {
        Self { status: "error".to_string(), message: Some(message) }
    }
}

#[derive(Clone)]
struct WebState {
    store: Arc<SubscriptionStore>,
}

pub struct WebService {
    pub router: Router,
}

impl WebService {
    /// `static_dir` must contain `index.html` and `subscriptions.html`.
    pub fn new(store: Arc<SubscriptionStore>, static_dir: impl AsRef<Path>) -> Self {
        let static_dir = static_dir.as_ref();

        let router = Router::new()
            .route("/subscribe", post(create_subscription))
            .route("/api/subscriptions", get(list_subscriptions))
            .with_state(WebState { store: store.clone() })
            .merge(HealthService::new(store).router)
            .route_service("/", ServeFile::new(static_dir.join("index.html")))
            .route_service("/subscriptions", ServeFile::new(static_dir.join("subscriptions.html")))
            .fallback_service(ServeDir::new(static_dir))
            .layer(TraceLayer::new_for_http());

        Self { router }
    }
}

async fn create_subscription(
    State(state): State<WebState>,
    Json(record): Json<SubscriptionRecord>,
) -> (StatusCode, Json<StatusResponse>) {
    let chat_id = record.user_id;
    let summary = record.route_summary();

    match state.store.append(record).await {
        Ok(()) => {
            tracing::info!("Web subscription created for chat {}: {}", chat_id, summary);
            (StatusCode::OK, Json(StatusResponse::ok()))
        }
        Err(e) => {
            tracing::error!("Web subscription for chat {} not saved: {}", chat_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse::error("Failed to save subscription".to_string())),
            )
        }
    }
}

async fn list_subscriptions(State(state): State<WebState>) -> Json<Vec<SubscriptionRecord>> {
    match state.store.refresh().await {
        Ok(records) => Json(records),
        Err(e) => {
            tracing::warn!("Serving cached subscriptions, reload failed: {}", e);
            Json(state.store.list_all().await)
        }
    }
}

use axum::{response::Json as JsonResponse, routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::{domains::dispatch::rest::dispatch_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .nest("/api", dispatch_routes().route("/health", get(health_handler)))
    .layer(CorsLayer::permissive())
    .with_state(state)
}

pub async fn health_handler() -> JsonResponse<Value> {
  JsonResponse(json!({
    "success": true,
    "message": "Server is running",
    "timestamp": chrono::Utc::now().to_rfc3339(),
  }))
}

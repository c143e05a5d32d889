use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::AppState;

pub async fn ping_handler() -> Json<Value> {
    info!("Ping endpoint called");
    Json(json!({
        "status": "ok",
        "message": "Marquee movie catalog is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Reports store reachability. Answers 503 when the store cannot be read.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<Value>) {
    let mut health_status = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    let backend = state.config().storage.backend.as_str();
    let status = match state.store().count().await {
        Ok(total) => {
            health_status["checks"]["store"] = json!({
                "status": "healthy",
                "backend": backend,
                "movies": total
            });
            StatusCode::OK
        }
        Err(err) => {
            warn!(error = %err, "health check failed to reach the store");
            health_status["checks"]["store"] = json!({
                "status": "unhealthy",
                "backend": backend,
                "error": err.to_string()
            });
            health_status["status"] = json!("unhealthy");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (status, Json(health_status))
}

//! 健康检查

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub storage: StorageCheck,
    pub checked_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageCheck {
    pub kind: String,
    pub status: String,
    pub detail: String,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let repository = state.product_service.repository();

    let storage = match repository.ping().await {
        Ok(()) => StorageCheck {
            kind: repository.kind().to_string(),
            status: "ready".to_string(),
            detail: "record store reachable".to_string(),
        },
        Err(err) => StorageCheck {
            kind: repository.kind().to_string(),
            status: "degraded".to_string(),
            detail: err.to_string(),
        },
    };
    let ready = storage.status == "ready";

    let payload = HealthResponse {
        status: if ready { "healthy" } else { "degraded" }.to_string(),
        storage,
        checked_at: chrono::Utc::now().to_rfc3339(),
    };
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(payload))
}

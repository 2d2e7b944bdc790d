use axum::{
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mindbridge_contact::ContactDraft;
use serde_json::json;

use crate::template::Template;

/// GET /health - Liveness check
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness check
/// Returns 200 OK once the landing page renders with the loaded configuration
pub async fn ready(template: Template) -> impl IntoResponse {
    match template.index(&ContactDraft::new()).and_then(|page| askama::Template::render(&page)) {
        Ok(_) => (StatusCode::OK, Json(json!({"status": "ready"}))),
        Err(e) => {
            tracing::error!("Readiness check failed: page does not render - {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "reason": "render_failed"
                })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_endpoint_with_default_config() {
        let template = Template::new(Arc::new(Config::default()), 2026);

        let response = ready(template).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use time::OffsetDateTime;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub email_enabled: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

pub fn status_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "HQ.D API - Headquarters of Drinks",
        status: "operational",
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        email_enabled: state.config.email.enabled,
        timestamp: OffsetDateTime::now_utc(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serialization() {
        let response = HealthResponse {
            status: "healthy",
            email_enabled: false,
            timestamp: time::macros::datetime!(2025-06-01 12:00:00 UTC),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["email_enabled"], false);
        assert_eq!(json["timestamp"], "2025-06-01T12:00:00Z");
    }
}

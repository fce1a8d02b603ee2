use axum::response::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Liveness check. Never calls Spotify.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

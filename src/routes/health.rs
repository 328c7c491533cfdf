use crate::error::AppError;
use crate::server::AppState;
use axum::{Router, response::Json, routing::get};
use serde_json::{Value, json};

pub fn create_health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

async fn health_check() -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "status": "healthy",
        "service": "boxoffice-trends",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

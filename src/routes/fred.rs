use crate::error::AppError;
use crate::server::AppState;
use axum::{Router, extract::State, response::Json, routing::get};
use serde_json::Value;

/// Macroeconomic observations passthrough. Unrelated to the movie pipeline;
/// upstream failures surface directly as a 502 rather than degrading.
pub fn create_fred_routes() -> Router<AppState> {
    Router::new().route("/", get(series_observations))
}

async fn series_observations(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let data = state.fred.series_observations().await?;
    Ok(Json(data))
}

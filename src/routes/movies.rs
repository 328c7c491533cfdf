use crate::aggregator::YearlyTopMovies;
use crate::config::current_year;
use crate::error::AppError;
use crate::genre::{GenreRevenueRow, reduce_by_genre};
use crate::server::AppState;
use axum::{Router, extract::State, response::Json, routing::get};

/// Movie aggregation routes.
///
/// Both endpoints run the same multi-year aggregation; the genre endpoint
/// additionally passes the result through the reducer so chart consumers do
/// not have to reshape the payload themselves.
pub fn create_movie_routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(all_top_movies))
        .route("/genres", get(genre_revenue))
}

/// Full year -> top-movies mapping over the configured range. Upstream
/// failures inside the aggregation degrade to empty years or dropped
/// movies, so this responds 200 with a complete mapping unless the
/// orchestration itself faults.
async fn all_top_movies(
    State(state): State<AppState>,
) -> Result<Json<YearlyTopMovies>, AppError> {
    let movies = state
        .aggregator
        .all_years(state.start_year, current_year())
        .await;
    Ok(Json(movies))
}

/// The same aggregation reduced to per-year genre revenue rows.
async fn genre_revenue(
    State(state): State<AppState>,
) -> Result<Json<Vec<GenreRevenueRow>>, AppError> {
    let movies = state
        .aggregator
        .all_years(state.start_year, current_year())
        .await;
    Ok(Json(reduce_by_genre(&movies)))
}

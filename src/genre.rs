use crate::aggregator::YearlyTopMovies;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summed revenue per genre for one year, shaped for stacked-bar rendering.
/// A movie tagged with N genres contributes its full revenue to all N totals;
/// the fan-out is intentional, not a split.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenreRevenueRow {
    pub year: i32,
    pub genre_revenues: BTreeMap<String, u64>,
}

/// Flatten a yearly top-movies mapping into one genre-revenue row per year,
/// in ascending year order. Years with no movies produce rows with empty
/// maps. Pure function; color assignment, scaling and filtering belong to
/// the chart consumers.
pub fn reduce_by_genre(yearly: &YearlyTopMovies) -> Vec<GenreRevenueRow> {
    yearly
        .iter()
        .map(|(&year, movies)| {
            let mut genre_revenues: BTreeMap<String, u64> = BTreeMap::new();
            for movie in movies {
                for genre in &movie.genres {
                    *genre_revenues.entry(genre.clone()).or_insert(0) += movie.revenue;
                }
            }
            GenreRevenueRow {
                year,
                genre_revenues,
            }
        })
        .collect()
}

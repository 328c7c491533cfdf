pub mod fred;
pub mod health;
pub mod movies;

pub use fred::create_fred_routes;
pub use health::create_health_routes;
pub use movies::create_movie_routes;

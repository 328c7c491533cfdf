pub mod aggregator;
pub mod config;
pub mod error;
pub mod fred;
pub mod genre;
pub mod routes;
pub mod server;
pub mod test_utils;
pub mod tmdb;

pub use config::Config;
pub use server::Server;

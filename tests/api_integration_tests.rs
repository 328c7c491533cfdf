use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use boxoffice_trends::{
    config::current_year, test_utils::TestAppBuilder, tmdb::mock::MockMetadata,
};
use serde_json::Value;
use tower::ServiceExt;

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestAppBuilder::new().build();
    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "boxoffice-trends");
}

#[tokio::test]
async fn test_top_movies_all_covers_configured_range() {
    let this_year = current_year();
    let metadata = MockMetadata::new()
        .with_movie(this_year - 1, 1, "Last Year Hit", 900, &["Action"])
        .with_movie(this_year, 2, "This Year Hit", 800, &["Drama"]);
    let app = TestAppBuilder::new()
        .with_metadata(metadata)
        .with_start_year(this_year - 2)
        .build();

    let (status, body) = get_json(app, "/api/top-movies/all").await;
    assert_eq!(status, StatusCode::OK);

    let map = body.as_object().unwrap();
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    let expected: Vec<String> = ((this_year - 2)..=this_year).map(|y| y.to_string()).collect();
    assert_eq!(keys, expected.iter().collect::<Vec<_>>());

    // A year with no catalog entries is present and empty, not missing.
    assert_eq!(map[&(this_year - 2).to_string()], Value::Array(vec![]));

    let last_year = map[&(this_year - 1).to_string()].as_array().unwrap();
    assert_eq!(last_year.len(), 1);
    assert_eq!(last_year[0]["title"], "Last Year Hit");
    assert_eq!(last_year[0]["revenue"], 900);
    assert_eq!(last_year[0]["genres"][0], "Action");
}

#[tokio::test]
async fn test_top_movies_all_drops_failed_detail_lookup() {
    let this_year = current_year();
    let mut metadata = MockMetadata::new();
    for i in 1..=10u64 {
        metadata = metadata.with_movie(
            this_year,
            i,
            &format!("Movie {i}"),
            1_000 - i * 10,
            &["Action"],
        );
    }
    let metadata = metadata.with_failing_movie(7);
    let app = TestAppBuilder::new()
        .with_metadata(metadata)
        .with_start_year(this_year)
        .build();

    let (status, body) = get_json(app, "/api/top-movies/all").await;
    assert_eq!(status, StatusCode::OK);

    let year_list = body[this_year.to_string()].as_array().unwrap();
    assert_eq!(year_list.len(), 9);
    assert!(year_list.iter().all(|m| m["title"] != "Movie 7"));
}

#[tokio::test]
async fn test_top_movies_all_degrades_failed_discovery_to_empty_year() {
    let this_year = current_year();
    let metadata = MockMetadata::new()
        .with_movie(this_year, 1, "Survivor", 500, &["Thriller"])
        .with_failing_year(this_year - 1);
    let app = TestAppBuilder::new()
        .with_metadata(metadata)
        .with_start_year(this_year - 1)
        .build();

    let (status, body) = get_json(app, "/api/top-movies/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[(this_year - 1).to_string()], Value::Array(vec![]));
    assert_eq!(body[this_year.to_string()].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_top_movies_all_applies_configured_cutoff() {
    let this_year = current_year();
    let mut metadata = MockMetadata::new();
    for i in 1..=5u64 {
        metadata = metadata.with_movie(
            this_year,
            i,
            &format!("Movie {i}"),
            1_000 - i * 100,
            &["Action"],
        );
    }
    let app = TestAppBuilder::new()
        .with_metadata(metadata)
        .with_start_year(this_year)
        .with_top_n(3)
        .build();

    let (status, body) = get_json(app, "/api/top-movies/all").await;
    assert_eq!(status, StatusCode::OK);

    let year_list = body[this_year.to_string()].as_array().unwrap();
    assert_eq!(year_list.len(), 3);
    let titles: Vec<&str> = year_list
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Movie 1", "Movie 2", "Movie 3"]);
}

#[tokio::test]
async fn test_genre_endpoint_returns_reduced_rows() {
    let this_year = current_year();
    let metadata = MockMetadata::new()
        .with_movie(this_year, 1, "A", 70, &["Action"])
        .with_movie(this_year, 2, "B", 30, &["Action", "Crime"]);
    let app = TestAppBuilder::new()
        .with_metadata(metadata)
        .with_start_year(this_year - 1)
        .build();

    let (status, body) = get_json(app, "/api/top-movies/genres").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["year"], this_year - 1);
    assert!(rows[0]["genre_revenues"].as_object().unwrap().is_empty());
    assert_eq!(rows[1]["year"], this_year);
    assert_eq!(rows[1]["genre_revenues"]["Action"], 100);
    assert_eq!(rows[1]["genre_revenues"]["Crime"], 30);
}

#[tokio::test]
async fn test_fred_passthrough_maps_upstream_failure_to_bad_gateway() {
    let app = TestAppBuilder::new().build();
    let (status, body) = get_json(app, "/api/fred").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Upstream service error");
}

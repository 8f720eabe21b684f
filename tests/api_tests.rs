use axum_test::TestServer;
use serde_json::json;

use shufflestream::api::{create_router, AppState};
use shufflestream::services::InMemoryCatalog;

fn create_test_server() -> TestServer {
    let state = AppState::new(InMemoryCatalog::demo());
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

async fn connect(server: &TestServer, platform_id: &str) {
    let response = server
        .post(&format!("/platforms/{}/toggle", platform_id))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_platform_roster_starts_disconnected() {
    let server = create_test_server();

    let response = server.get("/platforms").await;
    response.assert_status_ok();
    let platforms: Vec<serde_json::Value> = response.json();
    assert_eq!(platforms.len(), 4);
    assert!(platforms.iter().all(|p| p["is_connected"] == false));
}

#[tokio::test]
async fn test_toggle_platform_updates_preferences() {
    let server = create_test_server();

    let response = server.post("/platforms/netflix/toggle").await;
    response.assert_status_ok();
    let platform: serde_json::Value = response.json();
    assert_eq!(platform["is_connected"], true);

    let prefs: serde_json::Value = server.get("/preferences").await.json();
    assert_eq!(prefs["platforms"], json!(["netflix"]));

    // Toggling back disconnects and clears the preference entry
    server.post("/platforms/netflix/toggle").await;
    let prefs: serde_json::Value = server.get("/preferences").await.json();
    assert_eq!(prefs["platforms"], json!([]));
}

#[tokio::test]
async fn test_toggle_unknown_platform() {
    let server = create_test_server();
    let response = server.post("/platforms/blockbuster/toggle").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_shuffle_without_platforms_is_rejected() {
    let server = create_test_server();

    let response = server.post("/shuffle").json(&json!({ "mode": "full" })).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("No platforms connected"));
}

#[tokio::test]
async fn test_full_shuffle_records_history() {
    let server = create_test_server();
    connect(&server, "netflix").await;

    let response = server.post("/shuffle").json(&json!({ "mode": "full" })).await;
    response.assert_status_ok();
    let result: serde_json::Value = response.json();

    // Recommendation must be watchable on the one connected platform
    let platforms = result["recommendation"]["platforms"].as_object().unwrap();
    assert!(platforms.contains_key("netflix"));

    let history: Vec<String> = server.get("/history").await.json();
    assert_eq!(history[0], result["recommendation"]["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_preference_update_round_trip() {
    let server = create_test_server();

    let response = server
        .put("/preferences")
        .json(&json!({
            "genres": ["Drama", "Comedy"],
            "cultural_exclusions": ["political"]
        }))
        .await;
    response.assert_status_ok();

    let prefs: serde_json::Value = server.get("/preferences").await.json();
    assert_eq!(prefs["genres"], json!(["Comedy", "Drama"]));
    assert_eq!(prefs["cultural_exclusions"], json!(["political"]));
}

#[tokio::test]
async fn test_preference_update_rejects_blank_platform_id() {
    let server = create_test_server();

    let response = server
        .put("/preferences")
        .json(&json!({ "platforms": [""] }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cultural_exclusion_never_surfaces() {
    let server = create_test_server();
    connect(&server, "hulu").await;

    // Veep is the only hulu series carrying the excluded tag, so a series
    // shuffle must always land on The Office
    server
        .put("/preferences")
        .json(&json!({ "cultural_exclusions": ["political"] }))
        .await
        .assert_status_ok();

    for _ in 0..10 {
        let response = server
            .post("/shuffle")
            .json(&json!({ "mode": "full", "content_type": "series" }))
            .await;
        response.assert_status_ok();
        let result: serde_json::Value = response.json();
        assert_eq!(result["recommendation"]["id"], "office");
    }
}

#[tokio::test]
async fn test_empty_pool_returns_unprocessable() {
    let server = create_test_server();
    connect(&server, "disney").await;

    // The only disney title in the demo catalog is a series
    let response = server
        .post("/shuffle")
        .json(&json!({ "mode": "full", "content_type": "movie" }))
        .await;
    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_mode() {
    let server = create_test_server();
    for platform in ["netflix", "hulu", "prime"] {
        connect(&server, platform).await;
    }

    let response = server
        .post("/shuffle")
        .json(&json!({ "mode": "list", "list_id": "date-night" }))
        .await;
    response.assert_status_ok();
    let result: serde_json::Value = response.json();
    let id = result["recommendation"]["id"].as_str().unwrap();
    assert!(["pnch", "blnt", "incp"].contains(&id));
}

#[tokio::test]
async fn test_unknown_list_is_not_found() {
    let server = create_test_server();
    connect(&server, "netflix").await;

    let response = server
        .post("/shuffle")
        .json(&json!({ "mode": "list", "list_id": "unknown" }))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_show_mode_returns_episode() {
    let server = create_test_server();
    connect(&server, "netflix").await;

    let response = server
        .post("/shuffle")
        .json(&json!({ "mode": "show", "show_id": "st" }))
        .await;
    response.assert_status_ok();
    let result: serde_json::Value = response.json();
    assert_eq!(result["recommendation"]["show_id"], "st");
}

#[tokio::test]
async fn test_unknown_show_is_not_found() {
    let server = create_test_server();
    connect(&server, "netflix").await;

    let response = server
        .post("/shuffle")
        .json(&json!({ "mode": "show", "show_id": "nope" }))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recap_counts_shuffles() {
    let server = create_test_server();
    connect(&server, "netflix").await;

    server
        .post("/shuffle")
        .json(&json!({ "mode": "full" }))
        .await
        .assert_status_ok();
    server
        .post("/shuffle")
        .json(&json!({ "mode": "cable" }))
        .await
        .assert_status_ok();

    let recap: serde_json::Value = server.get("/stats/recap").await.json();
    assert_eq!(recap["total_shuffles"], 2);
    assert!(recap["favorite_mode"].is_string());
    assert!(!recap["top_genres"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_launch_and_session() {
    let server = create_test_server();
    connect(&server, "netflix").await;

    let response = server
        .post("/session/launch")
        .json(&json!({ "content_id": "mtrx" }))
        .await;
    response.assert_status_ok();
    let launch: serde_json::Value = response.json();
    assert_eq!(launch["is_playing"], true);
    assert_eq!(launch["launch_target"]["platform_id"], "netflix");

    let session: serde_json::Value = server.get("/session").await.json();
    assert_eq!(session["current_content"]["id"], "mtrx");
    assert_eq!(session["is_playing"], true);
    assert_eq!(session["connected_platforms"], json!(["netflix"]));
}

#[tokio::test]
async fn test_launch_unknown_content() {
    let server = create_test_server();
    let response = server
        .post("/session/launch")
        .json(&json!({ "content_id": "missing" }))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_echoed() {
    let server = create_test_server();
    let response = server.get("/health").await;
    assert!(response.headers().get("x-request-id").is_some());
}

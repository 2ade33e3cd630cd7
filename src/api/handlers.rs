use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::{MatchResult, StoredResult, SubmitResultRequest};

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResultResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub liked_artists: Vec<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<MatchResult>,
    pub top_match: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    pub id: &'static str,
    pub tags: &'static [&'static str],
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

/// Save the latest ranking, replacing the previous one
pub async fn submit_result(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<SubmitResultRequest>, JsonRejection>,
) -> AppResult<Json<SubmitResultResponse>> {
    let Json(request) = payload?;
    let result = request.into_stored(Utc::now())?;

    let groups = result
        .matches
        .iter()
        .map(|m| m.group_id.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    tracing::info!(
        request_id = %request_id,
        groups = %groups,
        "New result saved"
    );

    state.results.store(result).await?;

    Ok(Json(SubmitResultResponse {
        success: true,
        message: "Result saved successfully",
    }))
}

/// Get the latest saved ranking
pub async fn latest_result(State(state): State<AppState>) -> AppResult<Json<StoredResult>> {
    state
        .results
        .latest()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No result available yet".to_string()))
}

/// Rank groups for a set of liked artists
pub async fn compute_matches(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> AppResult<Json<MatchResponse>> {
    let Json(request) = payload?;
    let count = request.count.unwrap_or(state.default_match_count);

    if count == 0 {
        return Err(AppError::InvalidInput(
            "count must be at least 1".to_string(),
        ));
    }

    let matches = state.matcher.top_matches(&request.liked_artists, count);
    // Every selection starts with the global top, so the first match is the top match
    let top_match = if request.liked_artists.is_empty() {
        None
    } else {
        matches.first().map(|m| m.group_id.clone())
    };

    tracing::info!(
        request_id = %request_id,
        liked_count = request.liked_artists.len(),
        count,
        top_match = ?top_match,
        "Matches computed"
    );

    Ok(Json(MatchResponse { matches, top_match }))
}

/// List every artist a user can react to
pub async fn list_artists() -> Json<Vec<ArtistResponse>> {
    let artists = catalog::ARTIST_TAGS
        .iter()
        .map(|&(id, tags)| ArtistResponse { id, tags })
        .collect();
    Json(artists)
}

/// List every group that can be recommended
pub async fn list_groups() -> Json<&'static [&'static str]> {
    Json(catalog::GROUPS)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::api::create_router;
    use crate::services::result_store::MockResultStore;
    use crate::services::Matcher;

    use super::*;

    fn server_with(store: MockResultStore) -> TestServer {
        let state = AppState::with_store(Matcher::default(), Arc::new(store));
        TestServer::new(create_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let mut store = MockResultStore::new();
        store
            .expect_store()
            .times(1)
            .returning(|_| Err(AppError::Internal("slot unavailable".to_string())));

        let server = server_with(store);
        let response = server
            .post("/api/result")
            .json(&json!({
                "matches": [{ "group_id": "iu", "score": 27, "percentage": 100 }]
            }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_store() {
        let mut store = MockResultStore::new();
        store.expect_store().never();

        let server = server_with(store);
        let response = server
            .post("/api/result")
            .json(&json!({ "matches": [] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Invalid result data");
    }

    #[tokio::test]
    async fn test_latest_reads_from_store() {
        let mut store = MockResultStore::new();
        store.expect_latest().times(1).returning(|| Ok(None));

        let server = server_with(store);
        let response = server.get("/api/result").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "No result available yet");
    }

    #[tokio::test]
    async fn test_submit_passes_matches_to_store() {
        let mut store = MockResultStore::new();
        store
            .expect_store()
            .withf(|result| result.matches.len() == 2 && result.matches[0].group_id == "day6")
            .times(1)
            .returning(|_| Ok(()));

        let server = server_with(store);
        let response = server
            .post("/api/result")
            .json(&json!({
                "matches": [
                    { "group_id": "day6", "score": 60, "percentage": 100 },
                    { "group_id": "qwer", "score": 45, "percentage": 75 }
                ],
                "timestamp": "2024-05-01T12:00:00Z"
            }))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
    }
}

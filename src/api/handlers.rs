use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{
    Content, ContentId, Platform, PreferenceUpdate, ShuffleRequest, ShuffleResult, UserPreferences,
};
use crate::services::deep_link::{self, LaunchTarget};
use crate::services::{Recap, ShuffleSelector};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct LaunchRequest {
    pub content_id: ContentId,
}

#[derive(Debug, Serialize)]
pub struct LaunchResponse {
    pub content: Content,
    pub is_playing: bool,
    /// Resolved platform destination, absent when no platform carries a link
    pub launch_target: Option<LaunchTarget>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub current_content: Option<Content>,
    pub is_playing: bool,
    pub connected_platforms: Vec<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the platform roster with connection flags
pub async fn get_platforms(State(state): State<AppState>) -> Json<Vec<Platform>> {
    let inner = state.inner.read().await;
    Json(inner.platforms.clone())
}

/// Flip a platform's connection state and mirror it into preferences
pub async fn toggle_platform(
    State(state): State<AppState>,
    Path(platform_id): Path<String>,
) -> AppResult<Json<Platform>> {
    let mut inner = state.inner.write().await;

    let snapshot = {
        let platform = inner
            .platforms
            .iter_mut()
            .find(|p| p.id == platform_id)
            .ok_or_else(|| AppError::NotFound(format!("platform {}", platform_id)))?;
        platform.toggle();
        platform.clone()
    };

    inner
        .preferences
        .set_platform(&snapshot.id, snapshot.is_connected)?;

    tracing::debug!(
        platform = %snapshot.id,
        connected = snapshot.is_connected,
        "platform toggled"
    );
    Ok(Json(snapshot))
}

/// Get user preferences
pub async fn get_preferences(State(state): State<AppState>) -> Json<UserPreferences> {
    let inner = state.inner.read().await;
    Json(inner.preferences.get().clone())
}

/// Apply a partial preference update
pub async fn update_preferences(
    State(state): State<AppState>,
    Json(update): Json<PreferenceUpdate>,
) -> AppResult<Json<UserPreferences>> {
    let mut inner = state.inner.write().await;
    let prefs = inner.preferences.update(update)?.clone();
    Ok(Json(prefs))
}

/// Run one shuffle: select a recommendation, then record it into history
/// and the engagement stats
pub async fn shuffle(
    State(state): State<AppState>,
    Json(request): Json<ShuffleRequest>,
) -> AppResult<Json<ShuffleResult>> {
    let mut inner = state.inner.write().await;
    let inner = &mut *inner;

    let selector = ShuffleSelector::new(inner.catalog.content(), inner.catalog.collections())
        .with_alternate_count(inner.alternate_count);
    let result = selector.select(&request, inner.preferences.get(), &inner.history, &mut inner.rng)?;

    inner.history.record(result.recommendation.id.clone());
    inner.stats.record(result.mode, &result.recommendation);

    tracing::debug!(
        recommendation = %result.recommendation.id,
        mode = %result.mode,
        alternatives = result.alternatives.len(),
        "shuffle selected"
    );
    Ok(Json(result))
}

/// Get the shuffle history, most recent first
pub async fn get_history(State(state): State<AppState>) -> Json<Vec<ContentId>> {
    let inner = state.inner.read().await;
    Json(inner.history.ids())
}

/// Launch a piece of content: set it as current and resolve its deep link
pub async fn launch_content(
    State(state): State<AppState>,
    Json(request): Json<LaunchRequest>,
) -> AppResult<Json<LaunchResponse>> {
    let mut inner = state.inner.write().await;

    let content = inner
        .catalog
        .find(&request.content_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("content {}", request.content_id)))?;

    let launch_target = deep_link::resolve(&content, &inner.preferences.get().platforms);

    inner.current_content = Some(content.clone());
    inner.is_playing = true;

    tracing::info!(content = %content.id, "launching content");
    Ok(Json(LaunchResponse {
        content,
        is_playing: true,
        launch_target,
    }))
}

/// Get the current session view-model
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let inner = state.inner.read().await;
    Json(SessionResponse {
        current_content: inner.current_content.clone(),
        is_playing: inner.is_playing,
        connected_platforms: inner.preferences.get().platforms.iter().cloned().collect(),
    })
}

/// Get the engagement recap
pub async fn get_recap(State(state): State<AppState>) -> Json<Recap> {
    let inner = state.inner.read().await;
    Json(inner.stats.recap())
}

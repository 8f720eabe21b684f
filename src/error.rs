use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::selector::SelectorError;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("No platforms connected: connect at least one platform before shuffling")]
    NoPlatformsConnected,

    #[error("No content matches the current filters")]
    EmptyPool,

    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Show not found: {0}")]
    ShowNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<SelectorError> for AppError {
    fn from(err: SelectorError) -> Self {
        match err {
            SelectorError::NoPlatformsConnected => AppError::NoPlatformsConnected,
            SelectorError::EmptyPool => AppError::EmptyPool,
            SelectorError::ListNotFound(id) => AppError::ListNotFound(id),
            SelectorError::ShowNotFound(id) => AppError::ShowNotFound(id.to_string()),
            SelectorError::MissingListId | SelectorError::MissingShowId => {
                AppError::InvalidInput(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NoPlatformsConnected | AppError::InvalidInput(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::EmptyPool => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            AppError::ListNotFound(_) | AppError::ShowNotFound(_) | AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

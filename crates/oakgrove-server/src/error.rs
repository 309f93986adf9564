//! Error types for the action API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can
//! be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//! Store and game faults are logged with their detail but reported to
//! the player as a generic retry-or-restart message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use oakgrove_core::GameError;
use oakgrove_db::DbError;

/// Errors that can occur in the action API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The player has never made first contact.
    #[error("player not found")]
    NotStarted,

    /// The exploration site path segment was not a known site.
    #[error("{0}")]
    InvalidSite(String),

    /// A data layer operation failed.
    #[error("store error: {0}")]
    Db(#[from] DbError),

    /// A game transition failed.
    #[error("game error: {0}")]
    Game(#[from] GameError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotStarted => (
                StatusCode::NOT_FOUND,
                "Please start the game again with /start!".to_owned(),
            ),
            Self::InvalidSite(detail) => (StatusCode::BAD_REQUEST, detail.clone()),
            Self::Db(e) => {
                tracing::error!(error = %e, "store fault during action");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred! Please try again or start over with /start.".to_owned(),
                )
            }
            Self::Game(e) => {
                tracing::error!(error = %e, "game fault during action");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred! Please try again or start over with /start.".to_owned(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_started_maps_to_404() {
        let response = ApiError::NotStarted.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_site_maps_to_400() {
        let response = ApiError::InvalidSite("east".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

//! REST API endpoints.
//!
//! Axum-based HTTP API exposing the per-player statistics and match
//! history views.

pub mod routes;
pub mod state;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::StorageError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/player/:name/wr", get(routes::stats::game_win_rate))
        .route("/api/player/:name/bo3wr", get(routes::stats::bo3_win_rate))
        .route(
            "/api/player/:name/bo3gameswr",
            get(routes::stats::position_win_rates),
        )
        .route(
            "/api/player/:name/leadwr",
            get(routes::stats::lead_win_rates),
        )
        .route(
            "/api/player/:name/pokemonwr",
            get(routes::stats::team_member_win_rates),
        )
        .route(
            "/api/player/:name/terawr",
            get(routes::stats::tera_win_rates),
        )
        .route(
            "/api/player/:name/versus/:pokemon",
            get(routes::stats::matchup_win_rate),
        )
        .route(
            "/api/player/:name/lead-combination/:leads/winrate",
            get(routes::stats::lead_combination_win_rates),
        )
        .route(
            "/api/player/:name/matches",
            get(routes::history::match_history),
        )
        .route("/api/player/:name/games", get(routes::history::player_games))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

//! Per-player statistics endpoints.
//!
//! Every handler resolves against a fresh store snapshot, so results
//! always reflect the latest import. Unknown players are not an
//! error; they report zero-valued structures.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{
    GameWinRate, LeadComboWinRates, MatchWinRate, MatchupWinRate, PokemonWinRate,
    PositionWinRates, TeraWinRate,
};

pub async fn game_win_rate(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<GameWinRate>, ApiError> {
    Ok(Json(state.reporter.game_win_rate(&name)?))
}

pub async fn bo3_win_rate(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MatchWinRate>, ApiError> {
    Ok(Json(state.reporter.bo3_win_rate(&name)?))
}

pub async fn position_win_rates(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PositionWinRates>, ApiError> {
    Ok(Json(state.reporter.position_win_rates(&name)?))
}

pub async fn lead_win_rates(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<PokemonWinRate>>, ApiError> {
    Ok(Json(state.reporter.lead_win_rates(&name)?))
}

pub async fn team_member_win_rates(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<PokemonWinRate>>, ApiError> {
    Ok(Json(state.reporter.team_member_win_rates(&name)?))
}

pub async fn tera_win_rates(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<TeraWinRate>>, ApiError> {
    Ok(Json(state.reporter.tera_win_rates(&name)?))
}

pub async fn matchup_win_rate(
    State(state): State<AppState>,
    Path((name, pokemon)): Path<(String, String)>,
) -> Result<Json<MatchupWinRate>, ApiError> {
    Ok(Json(state.reporter.matchup_win_rate(&name, &pokemon)?))
}

pub async fn lead_combination_win_rates(
    State(state): State<AppState>,
    Path((name, leads)): Path<(String, String)>,
) -> Result<Json<LeadComboWinRates>, ApiError> {
    Ok(Json(state.reporter.lead_combination_win_rates(&name, &leads)?))
}

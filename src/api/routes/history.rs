//! Match and game history endpoints.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{MatchHistoryEntry, PlayerGameRow};

pub async fn match_history(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<MatchHistoryEntry>>, ApiError> {
    Ok(Json(state.reporter.match_history(&name)?))
}

pub async fn player_games(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<PlayerGameRow>>, ApiError> {
    Ok(Json(state.reporter.player_games(&name)?))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::models::{Game, GamePosition, MatchRecord, MatchSlot, Participant};
    use crate::storage::{EntityType, JsonlWriter, StorageConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn setup_test_state(dir: &std::path::Path) -> AppState {
        let config = StorageConfig::new(dir.to_path_buf());

        let m1 = MatchRecord::new(
            "Ash".to_string(),
            "Gary".to_string(),
            MatchSlot::Player1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        );
        let m2 = MatchRecord::new(
            "Misty".to_string(),
            "Ash".to_string(),
            MatchSlot::Player2,
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
        );

        let g1 = Game::new(m1.id.clone(), GamePosition::G1, "Ash".to_string())
            .with_replay("https://replay.example/abc".to_string());
        let g2 = Game::new(m1.id.clone(), GamePosition::G2, "Ash".to_string());
        let g3 = Game::new(m2.id.clone(), GamePosition::G1, "Ash".to_string());

        let mut participants = Vec::new();
        for game in [&g1, &g2] {
            participants.push(
                Participant::new(
                    game.id.clone(),
                    "Ash".to_string(),
                    vec!["Pikachu".to_string(), "Snorlax".to_string()],
                )
                .with_lead("Pikachu".to_string()),
            );
            participants.push(Participant::new(
                game.id.clone(),
                "Gary".to_string(),
                vec!["Charizard".to_string()],
            ));
        }
        participants.push(Participant::new(
            g3.id.clone(),
            "Ash".to_string(),
            vec!["Pikachu".to_string()],
        ));

        JsonlWriter::for_entity(&config, EntityType::Match)
            .write_all(&[m1, m2])
            .unwrap();
        JsonlWriter::for_entity(&config, EntityType::Game)
            .write_all(&[g1, g2, g3])
            .unwrap();
        JsonlWriter::for_entity(&config, EntityType::Participant)
            .write_all(&participants)
            .unwrap();

        AppState::new(config)
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_match_history_endpoint() {
        let temp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(temp.path()));

        let (status, json) = get_json(app, "/api/player/Ash/matches").await;
        assert_eq!(status, StatusCode::OK);

        let matches = json.as_array().unwrap();
        assert_eq!(matches.len(), 2);
        // Most recent first; m2's winner slot resolves to Ash.
        assert_eq!(matches[0]["player1"], "Misty");
        assert_eq!(matches[0]["winner"], 2);
        assert_eq!(matches[0]["winner_name"], "Ash");

        let games = matches[1]["games"].as_array().unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0]["game_number"], 1);
        assert_eq!(games[0]["replay"], "https://replay.example/abc");
        assert_eq!(games[0]["player"]["lead"], "Pikachu");
        assert_eq!(games[0]["opponent"]["name"], "Gary");
    }

    #[tokio::test]
    async fn test_match_history_missing_opponent_side() {
        let temp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(temp.path()));

        let (status, json) = get_json(app, "/api/player/Ash/matches").await;
        assert_eq!(status, StatusCode::OK);

        // m2 has no participant row for Misty; name only.
        let game = &json[0]["games"][0];
        assert_eq!(game["opponent"]["name"], "Misty");
        assert_eq!(game["opponent"]["team"].as_array().unwrap().len(), 0);
        assert!(game["opponent"]["lead"].is_null());
    }

    #[tokio::test]
    async fn test_player_games_endpoint() {
        let temp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(temp.path()));

        let (status, json) = get_json(app, "/api/player/Ash/games").await;
        assert_eq!(status, StatusCode::OK);

        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["opponent"]["name"], "Misty");
        assert_eq!(rows[1]["game_number"], 1);
        assert_eq!(rows[2]["game_number"], 2);
        assert!(rows[0]["match_id"].is_string());
    }

    #[tokio::test]
    async fn test_history_unknown_player_empty_list() {
        let temp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(temp.path()));

        let (status, json) = get_json(app, "/api/player/Brock/matches").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 0);
    }
}

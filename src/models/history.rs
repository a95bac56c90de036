//! Match history view models.
//!
//! These are the nested structures the history assembler produces for
//! display: a match with its games, each game carrying both sides'
//! team, lead and tera data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{GameId, GamePosition, MatchId, MatchSlot, Participant};

/// One side of a game as shown in the history view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSide {
    pub name: String,
    pub team: Vec<String>,
    pub lead: Option<String>,
    pub tera: Option<String>,
}

impl GameSide {
    /// Side built from a participant row.
    pub fn from_participant(participant: &Participant) -> Self {
        Self {
            name: participant.player_name.clone(),
            team: participant.team_pokemon.clone(),
            lead: participant.lead().map(String::from),
            tera: participant.tera().map(String::from),
        }
    }

    /// Side for an opponent whose participant row is missing; name
    /// only, everything else empty.
    pub fn name_only(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// A single game nested under a history match entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDetail {
    pub game_id: GameId,
    pub game_number: GamePosition,
    pub winner: String,
    pub replay: Option<String>,
    pub player: GameSide,
    pub opponent: GameSide,
}

/// A match in a player's history, with its games nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchHistoryEntry {
    pub id: MatchId,
    pub uuid: Uuid,
    pub player1: String,
    pub player2: String,
    pub winner: MatchSlot,
    pub winner_name: String,
    pub date: NaiveDate,
    pub games: Vec<GameDetail>,
}

/// Flat per-game row for the player's game list, carrying match context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameRow {
    pub game_id: GameId,
    pub match_id: MatchId,
    pub game_number: GamePosition,
    pub winner: String,
    pub replay: Option<String>,
    pub date: NaiveDate,
    pub player: GameSide,
    pub opponent: GameSide,
}

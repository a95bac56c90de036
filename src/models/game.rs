//! Individual game model.

use serde::{Deserialize, Serialize};

use super::{EntityId, GameId, MatchId};

/// Position of a game within a best-of-three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GamePosition {
    G1,
    G2,
    G3,
}

impl GamePosition {
    /// All positions, in order. Per-position reports always cover
    /// every entry here, observed or not.
    pub const ALL: [GamePosition; 3] = [GamePosition::G1, GamePosition::G2, GamePosition::G3];

    /// The 1-based game number.
    pub fn number(&self) -> u8 {
        match self {
            GamePosition::G1 => 1,
            GamePosition::G2 => 2,
            GamePosition::G3 => 3,
        }
    }

    /// Zero-based index into per-position accumulators.
    pub fn index(&self) -> usize {
        (self.number() - 1) as usize
    }
}

impl TryFrom<u8> for GamePosition {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(GamePosition::G1),
            2 => Ok(GamePosition::G2),
            3 => Ok(GamePosition::G3),
            other => Err(format!("invalid game number: {}", other)),
        }
    }
}

impl From<GamePosition> for u8 {
    fn from(pos: GamePosition) -> u8 {
        pos.number()
    }
}

impl std::fmt::Display for GamePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}", self.number())
    }
}

/// One game inside a match. Unlike [`super::MatchRecord`], the winner
/// here is a player name and compares directly against participants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier
    pub id: GameId,

    /// Owning match
    pub match_id: MatchId,

    /// Position within the best-of-three (unique per match)
    pub game_number: GamePosition,

    /// Winning player's name
    pub winner: String,

    /// Replay URL, when one was saved
    pub replay: Option<String>,
}

impl Game {
    /// Create a new Game with auto-generated ID.
    pub fn new(match_id: MatchId, game_number: GamePosition, winner: String) -> Self {
        let id = EntityId::generate(&[match_id.as_str(), &game_number.number().to_string()]);

        Self {
            id,
            match_id,
            game_number,
            winner,
            replay: None,
        }
    }

    /// Builder method to attach a replay URL.
    pub fn with_replay(mut self, replay: String) -> Self {
        self.replay = Some(replay);
        self
    }

    /// Whether `player` won this game.
    pub fn won_by(&self, player: &str) -> bool {
        self.winner == player
    }
}

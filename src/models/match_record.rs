//! Best-of-three match model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EntityId, MatchId};

/// Which slot of a match won the set.
///
/// Matches record their winner as a slot index, not a player name.
/// Games record theirs as a name. The two representations are kept
/// separate; resolving a slot to a name goes through
/// [`MatchRecord::winner_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MatchSlot {
    Player1,
    Player2,
}

impl MatchSlot {
    /// The 1-based slot index as stored in the record.
    pub fn index(&self) -> u8 {
        match self {
            MatchSlot::Player1 => 1,
            MatchSlot::Player2 => 2,
        }
    }
}

impl TryFrom<u8> for MatchSlot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MatchSlot::Player1),
            2 => Ok(MatchSlot::Player2),
            other => Err(format!("invalid match winner slot: {}", other)),
        }
    }
}

impl From<MatchSlot> for u8 {
    fn from(slot: MatchSlot) -> u8 {
        slot.index()
    }
}

/// A best-of-three contest between two named players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier (derived from the match UUID)
    pub id: MatchId,

    /// Globally unique key; duplicate ingestion of the same logical
    /// match is collapsed on this field.
    pub uuid: Uuid,

    /// Player in slot 1
    pub player1: String,

    /// Player in slot 2
    pub player2: String,

    /// Winning slot (1 or 2, never a name)
    pub winner: MatchSlot,

    /// Date the match was played
    pub date: NaiveDate,
}

impl MatchRecord {
    /// Create a new MatchRecord with a fresh UUID and derived ID.
    pub fn new(player1: String, player2: String, winner: MatchSlot, date: NaiveDate) -> Self {
        let uuid = Uuid::new_v4();
        let id = EntityId::generate(&[&uuid.to_string()]);

        Self {
            id,
            uuid,
            player1,
            player2,
            winner,
            date,
        }
    }

    /// Whether the given player occupies either slot.
    pub fn involves(&self, player: &str) -> bool {
        self.player1 == player || self.player2 == player
    }

    /// Slot occupied by `player`: slot 1 when `player1` matches,
    /// slot 2 otherwise. Only meaningful for matches that involve
    /// the player.
    pub fn slot_of(&self, player: &str) -> MatchSlot {
        if self.player1 == player {
            MatchSlot::Player1
        } else {
            MatchSlot::Player2
        }
    }

    /// Whether `player` took the set.
    pub fn won_by(&self, player: &str) -> bool {
        self.involves(player) && self.winner == self.slot_of(player)
    }

    /// Resolve the winning slot to a player name.
    pub fn winner_name(&self) -> &str {
        match self.winner {
            MatchSlot::Player1 => &self.player1,
            MatchSlot::Player2 => &self.player2,
        }
    }

    /// The other slot's player, if `player` is in the match.
    pub fn opponent_of(&self, player: &str) -> Option<&str> {
        if self.player1 == player {
            Some(&self.player2)
        } else if self.player2 == player {
            Some(&self.player1)
        } else {
            None
        }
    }
}

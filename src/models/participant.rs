//! Per-game participant model.

use serde::{Deserialize, Serialize};

use super::GameId;

/// Delimiter used by the record store for multi-valued team fields.
pub const TEAM_DELIMITER: char = ';';

/// One player's record within a single game: team brought, lead
/// committed, and tera usage. Each game has exactly two participant
/// rows with distinct player names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Game this row belongs to
    pub game_id: GameId,

    /// The player this row describes
    pub player_name: String,

    /// Team composition. Stored as a `;`-delimited string on disk,
    /// an ordered list everywhere else; conversion happens only at
    /// this serde boundary.
    #[serde(with = "team_field", default)]
    pub team_pokemon: Vec<String>,

    /// Lead committed at the start of the game. May be a compound
    /// pairing such as "Koraidon;Amoonguss" and is kept verbatim.
    #[serde(default)]
    pub lead_pokemon: Option<String>,

    /// Tera target for this game, when one was used
    #[serde(default)]
    pub tera_used: Option<String>,
}

impl Participant {
    pub fn new(game_id: GameId, player_name: String, team_pokemon: Vec<String>) -> Self {
        Self {
            game_id,
            player_name,
            team_pokemon,
            lead_pokemon: None,
            tera_used: None,
        }
    }

    /// Builder method to set the lead.
    pub fn with_lead(mut self, lead: String) -> Self {
        self.lead_pokemon = Some(lead);
        self
    }

    /// Builder method to set the tera target.
    pub fn with_tera(mut self, tera: String) -> Self {
        self.tera_used = Some(tera);
        self
    }

    /// Lead value, with empty strings treated as absent.
    pub fn lead(&self) -> Option<&str> {
        self.lead_pokemon.as_deref().filter(|s| !s.is_empty())
    }

    /// Tera value, with empty strings treated as absent.
    pub fn tera(&self) -> Option<&str> {
        self.tera_used.as_deref().filter(|s| !s.is_empty())
    }
}

/// Serde adapter between the store's delimited team string and the
/// in-memory list representation.
mod team_field {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TEAM_DELIMITER;

    pub fn serialize<S>(team: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&team.join(&TEAM_DELIMITER.to_string()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accept null for rows ingested before teams were tracked.
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(raw
            .split(TEAM_DELIMITER)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect())
    }
}

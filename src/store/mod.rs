//! Record store read contract.
//!
//! The aggregation engine and history assembler never touch files;
//! they consume an immutable [`Dataset`] snapshot that answers the
//! filtered and joined read queries over the three normalized
//! collections. [`JsonlStore`] produces such snapshots from the
//! filesystem.

use std::collections::HashSet;
use std::hash::Hash;

use crate::models::{Game, GameId, MatchId, MatchRecord, Participant};
use crate::storage::{EntityType, JsonlReader, StorageConfig, StorageError};

/// Keep the first occurrence of each key, preserving order.
///
/// Join fan-out at the store can legitimately produce duplicate
/// logical rows, so callers dedup by stable identifier at the
/// assembly boundary instead of trusting the store for distinctness.
pub fn dedup_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// A game joined with the target player's participant row and, when
/// present, the opposing participant row.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub game: &'a Game,
    pub player: &'a Participant,
    pub opponent: Option<&'a Participant>,
}

/// Immutable snapshot of the three entity collections.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub matches: Vec<MatchRecord>,
    pub games: Vec<Game>,
    pub participants: Vec<Participant>,
}

impl Dataset {
    /// Matches where the player occupies either slot, most recent
    /// first. Ordering is part of this read contract; consumers
    /// preserve it as fetched.
    pub fn matches_involving(&self, player: &str) -> Vec<&MatchRecord> {
        let mut matches: Vec<_> = self.matches.iter().filter(|m| m.involves(player)).collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches
    }

    /// Look up a game by id.
    pub fn game(&self, id: &GameId) -> Option<&Game> {
        self.games.iter().find(|g| &g.id == id)
    }

    /// Look up a participant row by `(game_id, player_name)`.
    pub fn participant(&self, game_id: &GameId, player: &str) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| &p.game_id == game_id && p.player_name == player)
    }

    /// All participant rows for a player, in stored order.
    pub fn participants_for_player(&self, player: &str) -> Vec<&Participant> {
        self.participants
            .iter()
            .filter(|p| p.player_name == player)
            .collect()
    }

    /// Joined game views for a player, optionally restricted to a set
    /// of matches. The opponent is the other participant in the same
    /// game.
    pub fn games_for_player(
        &self,
        player: &str,
        match_ids: Option<&HashSet<&MatchId>>,
    ) -> Vec<GameView<'_>> {
        self.games
            .iter()
            .filter(|g| match_ids.map_or(true, |ids| ids.contains(&g.match_id)))
            .filter_map(|game| {
                let own = self.participant(&game.id, player)?;
                let opponent = self
                    .participants
                    .iter()
                    .find(|p| p.game_id == game.id && p.player_name != player);
                Some(GameView {
                    game,
                    player: own,
                    opponent,
                })
            })
            .collect()
    }
}

/// JSONL-backed record store.
pub struct JsonlStore {
    storage: StorageConfig,
}

impl JsonlStore {
    pub fn new(storage: StorageConfig) -> Self {
        Self { storage }
    }

    /// Load an immutable snapshot of all three collections. Each
    /// reporting call works on its own snapshot; nothing is cached
    /// or mutated across calls.
    pub fn snapshot(&self) -> Result<Dataset, StorageError> {
        let matches =
            JsonlReader::<MatchRecord>::for_entity(&self.storage, EntityType::Match).read_all()?;
        let games = JsonlReader::<Game>::for_entity(&self.storage, EntityType::Game).read_all()?;
        let participants =
            JsonlReader::<Participant>::for_entity(&self.storage, EntityType::Participant)
                .read_all()?;

        Ok(Dataset {
            matches,
            games,
            participants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, GamePosition, MatchSlot};
    use chrono::NaiveDate;

    fn make_match(p1: &str, p2: &str, winner: MatchSlot) -> MatchRecord {
        MatchRecord::new(
            p1.to_string(),
            p2.to_string(),
            winner,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
    }

    fn make_participant(game: &Game, player: &str, team: &[&str]) -> Participant {
        Participant::new(
            game.id.clone(),
            player.to_string(),
            team.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn sample_dataset() -> Dataset {
        let m1 = make_match("Ash", "Gary", MatchSlot::Player1);
        let m2 = make_match("Misty", "Ash", MatchSlot::Player1);
        let m3 = make_match("Brock", "Gary", MatchSlot::Player2);

        let g1 = Game::new(m1.id.clone(), GamePosition::G1, "Ash".to_string());
        let g2 = Game::new(m1.id.clone(), GamePosition::G2, "Gary".to_string());
        let g3 = Game::new(m2.id.clone(), GamePosition::G1, "Misty".to_string());

        let participants = vec![
            make_participant(&g1, "Ash", &["Pikachu", "Snorlax"]),
            make_participant(&g1, "Gary", &["Eevee"]),
            make_participant(&g2, "Ash", &["Pikachu", "Snorlax"]),
            make_participant(&g2, "Gary", &["Eevee"]),
            make_participant(&g3, "Ash", &["Pikachu"]),
            make_participant(&g3, "Misty", &["Starmie"]),
        ];

        Dataset {
            matches: vec![m1, m2, m3],
            games: vec![g1, g2, g3],
            participants,
        }
    }

    #[test]
    fn test_matches_involving_either_slot() {
        let data = sample_dataset();
        let ash = data.matches_involving("Ash");
        assert_eq!(ash.len(), 2);

        let gary = data.matches_involving("Gary");
        assert_eq!(gary.len(), 2);

        assert!(data.matches_involving("Nurse Joy").is_empty());
    }

    #[test]
    fn test_matches_involving_most_recent_first() {
        let mut data = sample_dataset();
        data.matches[1].date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();

        let ash = data.matches_involving("Ash");
        assert_eq!(ash[0].player1, "Misty");
        assert!(ash[0].date > ash[1].date);
    }

    #[test]
    fn test_games_for_player_joins_opponent() {
        let data = sample_dataset();
        let views = data.games_for_player("Ash", None);
        assert_eq!(views.len(), 3);

        for view in &views {
            assert_eq!(view.player.player_name, "Ash");
            let opp = view.opponent.expect("opponent row present");
            assert_ne!(opp.player_name, "Ash");
        }
    }

    #[test]
    fn test_games_for_player_match_filter() {
        let data = sample_dataset();
        let first_match_id = data.matches[0].id.clone();
        let ids: HashSet<&MatchId> = [&first_match_id].into_iter().collect();

        let views = data.games_for_player("Ash", Some(&ids));
        assert_eq!(views.len(), 2);
        assert!(views.iter().all(|v| v.game.match_id == first_match_id));
    }

    #[test]
    fn test_games_for_player_missing_opponent_row() {
        let mut data = sample_dataset();
        // Drop Gary's rows; Ash's views should survive with no opponent.
        data.participants.retain(|p| p.player_name != "Gary");

        let views = data.games_for_player("Ash", None);
        assert_eq!(views.len(), 3);
        assert!(views
            .iter()
            .filter(|v| v.game.winner != "Misty")
            .all(|v| v.opponent.is_none()));
    }

    #[test]
    fn test_participant_lookup() {
        let data = sample_dataset();
        let game_id = data.games[0].id.clone();

        assert!(data.participant(&game_id, "Ash").is_some());
        assert!(data.participant(&game_id, "Misty").is_none());
    }

    #[test]
    fn test_dedup_by_key_keeps_first() {
        let items = vec![("a", 1), ("b", 2), ("a", 3)];
        let deduped = dedup_by_key(items, |(k, _)| *k);
        assert_eq!(deduped, vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_jsonl_store_snapshot_empty_dir() {
        let temp = tempfile::tempdir().unwrap();
        let store = JsonlStore::new(StorageConfig::new(temp.path().to_path_buf()));

        let data = store.snapshot().unwrap();
        assert!(data.matches.is_empty());
        assert!(data.games.is_empty());
        assert!(data.participants.is_empty());
    }

    #[test]
    fn test_jsonl_store_snapshot_round_trip() {
        use crate::storage::JsonlWriter;

        let temp = tempfile::tempdir().unwrap();
        let config = StorageConfig::new(temp.path().to_path_buf());
        let data = sample_dataset();

        JsonlWriter::for_entity(&config, EntityType::Match)
            .write_all(&data.matches)
            .unwrap();
        JsonlWriter::for_entity(&config, EntityType::Game)
            .write_all(&data.games)
            .unwrap();
        JsonlWriter::for_entity(&config, EntityType::Participant)
            .write_all(&data.participants)
            .unwrap();

        let loaded = JsonlStore::new(config).snapshot().unwrap();
        assert_eq!(loaded.matches.len(), 3);
        assert_eq!(loaded.games.len(), 3);
        assert_eq!(loaded.participants.len(), 6);
        assert_eq!(loaded.games[0].id, data.games[0].id);
    }

    #[test]
    fn test_game_lookup() {
        let data = sample_dataset();
        let id = data.games[1].id.clone();
        assert_eq!(data.game(&id).unwrap().winner, "Gary");
        assert!(data.game(&EntityId::from("missing")).is_none());
    }
}

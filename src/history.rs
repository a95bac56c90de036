//! Match history assembly.
//!
//! Turns the flat entity collections into the nested per-player views:
//! matches with their games inlined, and a flat game list carrying
//! match context. Both tolerate duplicated source rows and missing
//! participant data.

use crate::models::{GameDetail, GameSide, MatchHistoryEntry, MatchRecord, PlayerGameRow};
use crate::store::{dedup_by_key, Dataset};

/// A player's match history, in the order the store yields it (most
/// recent first).
///
/// Matches are deduplicated by UUID and games by id, keeping the
/// first occurrence of each. Games are ordered by position within
/// each match. An opponent with no participant row for a game still
/// appears, name only.
pub fn assemble_history(data: &Dataset, player: &str) -> Vec<MatchHistoryEntry> {
    let matches = dedup_by_key(data.matches_involving(player), |m| m.uuid);

    matches
        .into_iter()
        .map(|m| {
            // Only games the player actually has a participant row for.
            let mut games: Vec<_> = data
                .games
                .iter()
                .filter(|g| g.match_id == m.id)
                .filter_map(|g| data.participant(&g.id, player).map(|own| (g, own)))
                .collect();
            games.sort_by_key(|(g, _)| g.game_number);
            let games = dedup_by_key(games, |(g, _)| g.id.clone());

            let details = games
                .into_iter()
                .map(|(game, own)| GameDetail {
                    game_id: game.id.clone(),
                    game_number: game.game_number,
                    winner: game.winner.clone(),
                    replay: game.replay.clone(),
                    player: GameSide::from_participant(own),
                    opponent: opponent_side(data, m, game, player),
                })
                .collect();

            MatchHistoryEntry {
                id: m.id.clone(),
                uuid: m.uuid,
                player1: m.player1.clone(),
                player2: m.player2.clone(),
                winner: m.winner,
                winner_name: m.winner_name().to_string(),
                date: m.date,
                games: details,
            }
        })
        .collect()
}

/// Flat list of every game in the player's matches, most recent match
/// first and by position within a match.
pub fn assemble_player_games(data: &Dataset, player: &str) -> Vec<PlayerGameRow> {
    assemble_history(data, player)
        .into_iter()
        .flat_map(|entry| {
            let match_id = entry.id;
            let date = entry.date;
            entry.games.into_iter().map(move |game| PlayerGameRow {
                game_id: game.game_id,
                match_id: match_id.clone(),
                game_number: game.game_number,
                winner: game.winner,
                replay: game.replay,
                date,
                player: game.player,
                opponent: game.opponent,
            })
        })
        .collect()
}

fn opponent_side(
    data: &Dataset,
    m: &MatchRecord,
    game: &crate::models::Game,
    player: &str,
) -> GameSide {
    match m.opponent_of(player) {
        Some(opponent) => data
            .participant(&game.id, opponent)
            .map(GameSide::from_participant)
            .unwrap_or_else(|| GameSide::name_only(opponent)),
        None => GameSide::default(),
    }
}

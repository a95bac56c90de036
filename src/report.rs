//! Reporting facade.
//!
//! [`Reporter`] is the single entry point callers use: it loads a
//! fresh snapshot from the record store and delegates to the
//! aggregation engine or history assembler. Every call works
//! on its own snapshot, so a concurrent import shows up on the next
//! call without invalidating anything in flight.

use crate::history;
use crate::models::{
    GameWinRate, LeadComboWinRates, MatchHistoryEntry, MatchWinRate, MatchupWinRate,
    PlayerGameRow, PokemonWinRate, PositionWinRates, TeraWinRate,
};
use crate::stats;
use crate::storage::{StorageConfig, StorageError};
use crate::store::JsonlStore;

/// Read-only reporting surface over the record store.
///
/// Absence of data is never a fault here: an unknown or blank player
/// name matches no records and reports zeros. The only error source
/// is the store itself, surfaced unmodified.
pub struct Reporter {
    store: JsonlStore,
}

impl Reporter {
    pub fn new(storage: StorageConfig) -> Self {
        Self {
            store: JsonlStore::new(storage),
        }
    }

    fn with_dataset<T>(
        &self,
        player: &str,
        f: impl FnOnce(&crate::store::Dataset, &str) -> T,
    ) -> Result<T, StorageError> {
        let data = self.store.snapshot()?;
        Ok(f(&data, player.trim()))
    }

    pub fn game_win_rate(&self, player: &str) -> Result<GameWinRate, StorageError> {
        self.with_dataset(player, stats::game_win_rate)
    }

    pub fn bo3_win_rate(&self, player: &str) -> Result<MatchWinRate, StorageError> {
        self.with_dataset(player, stats::bo3_win_rate)
    }

    pub fn position_win_rates(&self, player: &str) -> Result<PositionWinRates, StorageError> {
        self.with_dataset(player, stats::position_win_rates)
    }

    pub fn lead_win_rates(&self, player: &str) -> Result<Vec<PokemonWinRate>, StorageError> {
        self.with_dataset(player, stats::lead_win_rates)
    }

    pub fn team_member_win_rates(&self, player: &str) -> Result<Vec<PokemonWinRate>, StorageError> {
        self.with_dataset(player, stats::team_member_win_rates)
    }

    pub fn tera_win_rates(&self, player: &str) -> Result<Vec<TeraWinRate>, StorageError> {
        self.with_dataset(player, stats::tera_win_rates)
    }

    pub fn matchup_win_rate(
        &self,
        player: &str,
        opponent_pokemon: &str,
    ) -> Result<MatchupWinRate, StorageError> {
        self.with_dataset(player, |data, player| {
            stats::matchup_win_rate(data, player, opponent_pokemon)
        })
    }

    pub fn lead_combination_win_rates(
        &self,
        player: &str,
        lead: &str,
    ) -> Result<LeadComboWinRates, StorageError> {
        self.with_dataset(player, |data, player| {
            stats::lead_combination_win_rates(data, player, lead)
        })
    }

    pub fn match_history(&self, player: &str) -> Result<Vec<MatchHistoryEntry>, StorageError> {
        self.with_dataset(player, history::assemble_history)
    }

    pub fn player_games(&self, player: &str) -> Result<Vec<PlayerGameRow>, StorageError> {
        self.with_dataset(player, history::assemble_player_games)
    }
}

//! Derived statistics models.

use serde::{Deserialize, Serialize};

use super::GamePosition;

/// Round a percentage to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rolling win/total accumulator used by the aggregation engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub total: u32,
}

impl Tally {
    /// Record one game outcome.
    pub fn record(&mut self, won: bool) {
        self.total += 1;
        if won {
            self.wins += 1;
        }
    }

    /// Win rate as a percentage rounded to two decimals; `0` when
    /// nothing was recorded.
    pub fn win_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            round2(self.wins as f64 / self.total as f64 * 100.0)
        }
    }
}

/// Per-game win rate over individual games, not sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameWinRate {
    pub win_rate: f64,
    pub games_played: u32,
}

impl From<Tally> for GameWinRate {
    fn from(tally: Tally) -> Self {
        Self {
            win_rate: tally.win_rate(),
            games_played: tally.total,
        }
    }
}

/// Best-of-three set win rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchWinRate {
    pub win_rate: f64,
    pub matches_played: u32,
}

impl From<Tally> for MatchWinRate {
    fn from(tally: Tally) -> Self {
        Self {
            win_rate: tally.win_rate(),
            matches_played: tally.total,
        }
    }
}

/// Win rates broken down by game position. Every position is present,
/// zero-valued where no games were observed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionWinRates {
    pub g1: GameWinRate,
    pub g2: GameWinRate,
    pub g3: GameWinRate,
}

impl PositionWinRates {
    pub fn get(&self, position: GamePosition) -> &GameWinRate {
        match position {
            GamePosition::G1 => &self.g1,
            GamePosition::G2 => &self.g2,
            GamePosition::G3 => &self.g3,
        }
    }
}

/// Win rate attributed to a single Pokémon (as lead or team member).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonWinRate {
    pub pokemon: String,
    pub win_rate: f64,
    pub games_played: u32,
}

/// Win rate grouped by tera target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeraWinRate {
    pub tera_type: String,
    pub win_rate: f64,
    pub games_played: u32,
}

/// Win rate against opponents fielding a given Pokémon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupWinRate {
    pub opponent_pokemon: String,
    pub win_rate: f64,
    pub games_played: u32,
}

/// One position slot of a lead-combination report. `wins` is `None`
/// when no games were observed at the position, `Some(0)` when games
/// were observed but none won.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadComboSlot {
    pub wins: Option<u32>,
    pub total: u32,
    pub win_rate: f64,
}

impl From<Tally> for LeadComboSlot {
    fn from(tally: Tally) -> Self {
        Self {
            wins: Some(tally.wins),
            total: tally.total,
            win_rate: tally.win_rate(),
        }
    }
}

/// Lead-combination win rates with fixed keys for all three positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadComboWinRates {
    pub g1: LeadComboSlot,
    pub g2: LeadComboSlot,
    pub g3: LeadComboSlot,
}

impl LeadComboWinRates {
    pub fn get(&self, position: GamePosition) -> &LeadComboSlot {
        match position {
            GamePosition::G1 => &self.g1,
            GamePosition::G2 => &self.g2,
            GamePosition::G3 => &self.g3,
        }
    }

    pub fn get_mut(&mut self, position: GamePosition) -> &mut LeadComboSlot {
        match position {
            GamePosition::G1 => &mut self.g1,
            GamePosition::G2 => &mut self.g2,
            GamePosition::G3 => &mut self.g3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_record_and_rate() {
        let mut tally = Tally::default();
        tally.record(true);
        tally.record(true);
        tally.record(false);

        assert_eq!(tally.wins, 2);
        assert_eq!(tally.total, 3);
        assert_eq!(tally.win_rate(), 66.67);
    }

    #[test]
    fn test_tally_zero_denominator() {
        let tally = Tally::default();
        assert_eq!(tally.win_rate(), 0.0);

        let rate = GameWinRate::from(tally);
        assert_eq!(rate.win_rate, 0.0);
        assert_eq!(rate.games_played, 0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(50.0), 50.0);
    }

    #[test]
    fn test_lead_combo_slot_default_is_null_wins() {
        let slot = LeadComboSlot::default();
        assert_eq!(slot.wins, None);
        assert_eq!(slot.total, 0);
        assert_eq!(slot.win_rate, 0.0);
    }

    #[test]
    fn test_lead_combo_slot_from_tally_keeps_zero_wins() {
        let mut tally = Tally::default();
        tally.record(false);

        let slot = LeadComboSlot::from(tally);
        assert_eq!(slot.wins, Some(0));
        assert_eq!(slot.total, 1);
        assert_eq!(slot.win_rate, 0.0);
    }

    #[test]
    fn test_lead_combo_null_vs_zero_serialization() {
        let rates = LeadComboWinRates {
            g1: LeadComboSlot {
                wins: Some(0),
                total: 1,
                win_rate: 0.0,
            },
            ..Default::default()
        };

        let json = serde_json::to_value(&rates).unwrap();
        assert_eq!(json["g1"]["wins"], 0);
        assert!(json["g2"]["wins"].is_null());
        assert!(json["g3"]["wins"].is_null());
    }

    #[test]
    fn test_position_win_rates_get() {
        use crate::models::GamePosition;

        let rates = PositionWinRates {
            g2: GameWinRate {
                win_rate: 50.0,
                games_played: 2,
            },
            ..Default::default()
        };

        assert_eq!(rates.get(GamePosition::G2).games_played, 2);
        assert_eq!(rates.get(GamePosition::G1).games_played, 0);
    }
}

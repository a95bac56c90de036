//! Statistics aggregation engine.
//!
//! Pure functions over a [`Dataset`] snapshot: every operation takes
//! the target player's name, reads the joined views, and returns a
//! derived structure. Nothing here has side effects or state across
//! calls, so callers may run these concurrently over the same
//! snapshot without coordination.
//!
//! All win rates are percentages rounded to two decimals; a zero
//! denominator reports as rate `0` with count `0`, never an error.

use std::collections::{HashMap, HashSet};

use crate::models::{
    GameId, GameWinRate, LeadComboWinRates, MatchId, MatchWinRate, MatchupWinRate, PokemonWinRate,
    PositionWinRates, Tally, TeraWinRate,
};
use crate::store::Dataset;

/// Overall per-game win rate. The denominator is the player's
/// participant-row count; wins additionally require the joined game's
/// winner to be the player.
pub fn game_win_rate(data: &Dataset, player: &str) -> GameWinRate {
    let mut tally = Tally::default();
    for row in data.participants_for_player(player) {
        let won = data
            .game(&row.game_id)
            .is_some_and(|game| game.won_by(player));
        tally.record(won);
    }
    GameWinRate::from(tally)
}

/// Best-of-three set win rate over matches involving the player. A
/// win means the player's slot index equals the recorded winner slot.
pub fn bo3_win_rate(data: &Dataset, player: &str) -> MatchWinRate {
    let mut tally = Tally::default();
    for m in data.matches_involving(player) {
        tally.record(m.winner == m.slot_of(player));
    }
    MatchWinRate::from(tally)
}

/// Win rate per game position, over all games belonging to the
/// player's matches. Positions with no observed games still appear,
/// zero-valued.
pub fn position_win_rates(data: &Dataset, player: &str) -> PositionWinRates {
    let match_ids: HashSet<&MatchId> = data
        .matches_involving(player)
        .into_iter()
        .map(|m| &m.id)
        .collect();

    let mut tallies = [Tally::default(); 3];
    for game in data.games.iter().filter(|g| match_ids.contains(&g.match_id)) {
        tallies[game.game_number.index()].record(game.won_by(player));
    }

    PositionWinRates {
        g1: tallies[0].into(),
        g2: tallies[1].into(),
        g3: tallies[2].into(),
    }
}

/// Win rate per distinct lead value, excluding games with no recorded
/// lead. Compound pairings are grouped by their whole string.
pub fn lead_win_rates(data: &Dataset, player: &str) -> Vec<PokemonWinRate> {
    let mut tallies: HashMap<String, Tally> = HashMap::new();
    for view in data.games_for_player(player, None) {
        if let Some(lead) = view.player.lead() {
            tallies
                .entry(lead.to_string())
                .or_default()
                .record(view.game.won_by(player));
        }
    }
    into_pokemon_rates(tallies)
}

/// Win rate per team member. Each game fans out to every item of the
/// team: a six-item team contributes one game to six accumulators. A
/// Pokémon fielded twice in one team contributes twice.
pub fn team_member_win_rates(data: &Dataset, player: &str) -> Vec<PokemonWinRate> {
    let mut tallies: HashMap<String, Tally> = HashMap::new();
    for view in data.games_for_player(player, None) {
        let won = view.game.won_by(player);
        for member in &view.player.team_pokemon {
            tallies.entry(member.clone()).or_default().record(won);
        }
    }
    into_pokemon_rates(tallies)
}

/// Win rate per tera target, excluding games where none was used.
pub fn tera_win_rates(data: &Dataset, player: &str) -> Vec<TeraWinRate> {
    let mut tallies: HashMap<String, Tally> = HashMap::new();
    for view in data.games_for_player(player, None) {
        if let Some(tera) = view.player.tera() {
            tallies
                .entry(tera.to_string())
                .or_default()
                .record(view.game.won_by(player));
        }
    }

    let mut rates: Vec<TeraWinRate> = tallies
        .into_iter()
        .map(|(tera_type, tally)| TeraWinRate {
            tera_type,
            win_rate: tally.win_rate(),
            games_played: tally.total,
        })
        .collect();
    rates.sort_by(|a, b| {
        b.games_played
            .cmp(&a.games_played)
            .then_with(|| a.tera_type.cmp(&b.tera_type))
    });
    rates
}

/// Win rate in games where the opponent's team fields the target.
///
/// Matching is substring containment over lowercased, de-punctuated
/// names, so "char" also matches "Charizard". Distinct games are
/// counted once even if the join produced duplicate rows. A blank
/// target reports zeros.
pub fn matchup_win_rate(data: &Dataset, player: &str, target: &str) -> MatchupWinRate {
    let needle = normalize_name(target);
    let mut tally = Tally::default();

    if !needle.is_empty() {
        let mut seen: HashSet<&GameId> = HashSet::new();
        for view in data.games_for_player(player, None) {
            let Some(opponent) = view.opponent else {
                continue;
            };
            let fielded = opponent
                .team_pokemon
                .iter()
                .any(|member| normalize_name(member).contains(&needle));
            if fielded && seen.insert(&view.game.id) {
                tally.record(view.game.won_by(player));
            }
        }
    }

    MatchupWinRate {
        opponent_pokemon: target.to_string(),
        win_rate: tally.win_rate(),
        games_played: tally.total,
    }
}

/// Per-position win rates for one exact lead value (compound pairings
/// match as a whole string, never fanned out). Every position key is
/// present: `wins` is null where the lead was never played at that
/// position and `0` where it was played without winning. A blank lead
/// reports the all-null structure.
pub fn lead_combination_win_rates(data: &Dataset, player: &str, lead: &str) -> LeadComboWinRates {
    let mut rates = LeadComboWinRates::default();
    if lead.trim().is_empty() {
        return rates;
    }

    let mut tallies: HashMap<_, Tally> = HashMap::new();
    for view in data.games_for_player(player, None) {
        if view.player.lead_pokemon.as_deref() == Some(lead) {
            tallies
                .entry(view.game.game_number)
                .or_default()
                .record(view.game.won_by(player));
        }
    }

    for (position, tally) in tallies {
        *rates.get_mut(position) = tally.into();
    }
    rates
}

/// Lowercase and strip punctuation for fuzzy matchup comparison.
fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn into_pokemon_rates(tallies: HashMap<String, Tally>) -> Vec<PokemonWinRate> {
    let mut rates: Vec<PokemonWinRate> = tallies
        .into_iter()
        .map(|(pokemon, tally)| PokemonWinRate {
            pokemon,
            win_rate: tally.win_rate(),
            games_played: tally.total,
        })
        .collect();
    rates.sort_by(|a, b| {
        b.games_played
            .cmp(&a.games_played)
            .then_with(|| a.pokemon.cmp(&b.pokemon))
    });
    rates
}

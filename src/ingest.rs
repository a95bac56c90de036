//! Bulk import pipeline.
//!
//! Reads a JSON document holding match, game and participant arrays
//! and appends the records to the store, skipping anything already
//! present. Matches dedup on UUID, games on id, participants on the
//! `(game_id, player_name)` pair.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::models::{Game, MatchRecord, Participant};
use crate::storage::{EntityType, JsonlReader, JsonlWriter, StorageConfig, StorageError};

/// On-disk shape of an import document. All sections are optional.
#[derive(Debug, Default, Deserialize)]
pub struct ImportFile {
    #[serde(default)]
    pub matches: Vec<MatchRecord>,

    #[serde(default)]
    pub games: Vec<Game>,

    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// Counts of what an import run wrote and what it skipped.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub matches_added: usize,
    pub matches_skipped: usize,
    pub games_added: usize,
    pub games_skipped: usize,
    pub participants_added: usize,
    pub participants_skipped: usize,
}

impl ImportSummary {
    pub fn total_added(&self) -> usize {
        self.matches_added + self.games_added + self.participants_added
    }
}

/// Import a JSON document into the store.
///
/// With `dry_run` set, the summary reports what would change without
/// touching any file. Re-importing the same document is a no-op.
pub fn import_file(
    storage: &StorageConfig,
    path: &Path,
    dry_run: bool,
) -> Result<ImportSummary, StorageError> {
    if !path.exists() {
        return Err(StorageError::PathNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    let file: ImportFile = serde_json::from_str(&contents)?;

    info!(
        "Importing from {:?}: {} matches, {} games, {} participants",
        path,
        file.matches.len(),
        file.games.len(),
        file.participants.len()
    );

    let mut summary = ImportSummary::default();

    let existing_matches =
        JsonlReader::<MatchRecord>::for_entity(storage, EntityType::Match).read_all()?;
    let mut seen_uuids: HashSet<_> = existing_matches.iter().map(|m| m.uuid).collect();
    let mut new_matches = Vec::new();
    for m in file.matches {
        if seen_uuids.insert(m.uuid) {
            new_matches.push(m);
        } else {
            warn!("Skipping duplicate match {}", m.uuid);
            summary.matches_skipped += 1;
        }
    }

    let existing_games = JsonlReader::<Game>::for_entity(storage, EntityType::Game).read_all()?;
    let mut seen_game_ids: HashSet<_> = existing_games.iter().map(|g| g.id.clone()).collect();
    let mut new_games = Vec::new();
    for g in file.games {
        if seen_game_ids.insert(g.id.clone()) {
            new_games.push(g);
        } else {
            warn!("Skipping duplicate game {}", g.id);
            summary.games_skipped += 1;
        }
    }

    let existing_participants =
        JsonlReader::<Participant>::for_entity(storage, EntityType::Participant).read_all()?;
    let mut seen_participants: HashSet<_> = existing_participants
        .iter()
        .map(|p| (p.game_id.clone(), p.player_name.clone()))
        .collect();
    let mut new_participants = Vec::new();
    for p in file.participants {
        if seen_participants.insert((p.game_id.clone(), p.player_name.clone())) {
            new_participants.push(p);
        } else {
            warn!(
                "Skipping duplicate participant {} in game {}",
                p.player_name, p.game_id
            );
            summary.participants_skipped += 1;
        }
    }

    summary.matches_added = new_matches.len();
    summary.games_added = new_games.len();
    summary.participants_added = new_participants.len();

    if dry_run {
        info!("Dry run; nothing written");
        return Ok(summary);
    }

    JsonlWriter::for_entity(storage, EntityType::Match).append_batch(&new_matches)?;
    JsonlWriter::for_entity(storage, EntityType::Game).append_batch(&new_games)?;
    JsonlWriter::for_entity(storage, EntityType::Participant).append_batch(&new_participants)?;

    info!(
        "Import complete: {} records added, {} skipped",
        summary.total_added(),
        summary.matches_skipped + summary.games_skipped + summary.participants_skipped
    );

    Ok(summary)
}

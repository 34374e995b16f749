//! Cross-player score comparison.
//!
//! Levels get revised, and a revision bumps the level version. Only rows at
//! the newest version of a level are comparable, and of those only each
//! player's most recent submission per metric.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::api::PlayerLevelScore;
use crate::records::{LevelScoreRecord, LevelVersion, LevelVersionRecord, ValueType};

#[derive(Clone, Debug, PartialEq)]
pub struct LevelScores {
    pub level_uuid: String,
    /// Descending by score.
    pub scores: Vec<PlayerLevelScore>,
}

/// The highest version seen for every level id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelVersions {
    versions: HashMap<String, LevelVersion>,
}

impl LevelVersions {
    pub fn observe(&mut self, row: LevelVersionRecord) {
        let version = self
            .versions
            .entry(row.level_uuid)
            .or_insert(row.level_version);
        *version = (*version).max(row.level_version);
    }

    pub fn is_newest(&self, level_uuid: &str, version: LevelVersion) -> bool {
        self.versions.get(level_uuid) == Some(&version)
    }
}

impl FromIterator<LevelVersionRecord> for LevelVersions {
    fn from_iter<I: IntoIterator<Item = LevelVersionRecord>>(rows: I) -> Self {
        let mut versions = Self::default();
        for row in rows {
            versions.observe(row);
        }
        versions
    }
}

/// Latest scores of `players` at each level's newest version, grouped by
/// level in ascending id order. `versions` must cover every row of the
/// score table, including rows of other players.
pub fn compare_scores(
    versions: &LevelVersions,
    rows: &[LevelScoreRecord],
    players: &[String],
) -> Vec<LevelScores> {
    let players: HashSet<&str> = players.iter().map(String::as_str).collect();

    // Kept in first-seen order so equal scores sort deterministically.
    let mut kept: Vec<&LevelScoreRecord> = Vec::new();
    let mut slots: HashMap<(&str, &str, ValueType), usize> = HashMap::new();
    for row in rows {
        if !players.contains(row.player_uuid.as_str()) {
            continue;
        }
        if !versions.is_newest(&row.level_uuid, row.level_version) {
            continue;
        }

        let key = (
            row.player_uuid.as_str(),
            row.level_uuid.as_str(),
            row.value_type,
        );
        match slots.entry(key) {
            Entry::Occupied(slot) => {
                let current = &mut kept[*slot.get()];
                if row.date > current.date {
                    *current = row;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(kept.len());
                kept.push(row);
            }
        }
    }

    let mut levels: BTreeMap<&str, Vec<PlayerLevelScore>> = BTreeMap::new();
    for row in kept {
        levels
            .entry(row.level_uuid.as_str())
            .or_default()
            .push(PlayerLevelScore::from(row));
    }

    levels
        .into_iter()
        .map(|(level_uuid, mut scores)| {
            scores.sort_by(|a, b| b.score.cmp(&a.score));
            LevelScores {
                level_uuid: level_uuid.to_owned(),
                scores,
            }
        })
        .collect()
}

impl From<&LevelScoreRecord> for PlayerLevelScore {
    fn from(row: &LevelScoreRecord) -> Self {
        Self {
            player_uuid: row.player_uuid.clone(),
            score: row.value,
            level_version: row.level_version,
            value_type: row.value_type,
            timestamp: row.date,
            country: row.country.clone(),
        }
    }
}

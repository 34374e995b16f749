use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use rocket::serde::{de::DeserializeOwned, json::Value};

use crate::archive::{CalendarMonth, Coverage};
use crate::names::NameMap;
use crate::records::{AccountRecord, LevelRecord, LevelsSnapshot, Metadata};

mod archive_file;
mod data_error;
mod readers;

pub use archive_file::*;
pub use data_error::*;
pub use readers::*;

/// A category of per-month archive files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveKind {
    MonthlyLeaderboard,
    Xp,
    Blitz,
    Quests,
}

impl ArchiveKind {
    fn directory(self) -> &'static str {
        match self {
            Self::MonthlyLeaderboard => "monthly_lb_daily/archive",
            Self::Xp => "xp_lb_archive",
            Self::Blitz => "blitz_lb_archive",
            Self::Quests => "quests_archive",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::MonthlyLeaderboard => "monthly_lb",
            Self::Xp => "xp_lb",
            Self::Blitz => "blitz_lb",
            Self::Quests => "quests",
        }
    }

    /// Leaderboards are captured hourly, quests once per day.
    pub fn coverage(self) -> Coverage {
        match self {
            Self::Quests => Coverage::Daily,
            Self::MonthlyLeaderboard | Self::Xp | Self::Blitz => Coverage::Hourly,
        }
    }

    pub fn file_name(self, month: CalendarMonth) -> String {
        format!("{}_{:02}_{}.json", self.prefix(), month.month(), month.year())
    }

    /// Parses `{prefix}_{MM}_{YYYY}.json` back into its month.
    pub fn parse_file_name(self, file_name: &str) -> Option<CalendarMonth> {
        let date = file_name
            .strip_prefix(self.prefix())?
            .strip_prefix('_')?
            .strip_suffix(".json")?;
        let (month, year) = date.split_once('_')?;
        CalendarMonth::new(year.parse().ok()?, month.parse().ok()?)
    }
}

impl std::fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MonthlyLeaderboard => write!(f, "monthly leaderboard"),
            Self::Xp => write!(f, "XP"),
            Self::Blitz => write!(f, "blitz"),
            Self::Quests => write!(f, "quests"),
        }
    }
}

/// The storage root and the layout of the files beneath it.
#[derive(Clone, Debug)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn monthly_leaderboard(&self) -> PathBuf {
        self.root.join("monthly_lb_daily/leaderboard.csv")
    }

    pub fn monthly_levels(&self) -> PathBuf {
        self.root.join("monthly_lb_monthly/levels.txt")
    }

    pub fn monthly_levels_archive(&self) -> PathBuf {
        self.root.join("monthly_lb_monthly/levels_archive.json")
    }

    pub fn speedrun_leaderboard(&self) -> PathBuf {
        self.root.join("speedrun_lb_daily/leaderboard.csv")
    }

    pub fn metadata(&self) -> PathBuf {
        self.root.join("github_data/metadata.json")
    }

    pub fn level_data(&self) -> PathBuf {
        self.root.join("github_data/level_data.csv")
    }

    pub fn account_data(&self) -> PathBuf {
        self.root.join("github_data/account_data.csv")
    }

    pub fn score_data(&self) -> PathBuf {
        self.root.join("github_data/score_data.csv")
    }

    pub fn player_changes(&self) -> PathBuf {
        self.root.join("player_data/player_changes.json")
    }

    pub fn archive_path(&self, kind: ArchiveKind, month: CalendarMonth) -> PathBuf {
        self.root.join(kind.directory()).join(kind.file_name(month))
    }

    /// Reads the archive of `kind` for `month`, `None` if there is no such file.
    pub fn archive(
        &self,
        kind: ArchiveKind,
        month: CalendarMonth,
    ) -> DataResult<Option<ArchiveFile>> {
        ArchiveFile::read(&self.archive_path(kind, month))
    }

    /// Finds the archive file of `kind` covering the most recent month.
    pub fn latest_archive(&self, kind: ArchiveKind) -> DataResult<Option<PathBuf>> {
        let directory = self.root.join(kind.directory());
        let entries = match std::fs::read_dir(&directory) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(DataError::Io {
                    path: directory,
                    source,
                })
            }
        };

        let mut latest: Option<(CalendarMonth, PathBuf)> = None;
        for entry in entries {
            let entry = entry.map_err(|source| DataError::Io {
                path: directory.clone(),
                source,
            })?;
            let file_name = entry.file_name();
            let month = match file_name.to_str().and_then(|name| kind.parse_file_name(name)) {
                Some(month) => month,
                None => continue,
            };
            if latest.as_ref().map_or(true, |(best, _)| month > *best) {
                latest = Some((month, entry.path()));
            }
        }
        Ok(latest.map(|(_, path)| path))
    }

    pub fn levels_archive(&self) -> DataResult<Option<ArchiveFile<LevelsSnapshot>>> {
        ArchiveFile::read(&self.monthly_levels_archive())
    }

    /// Timestamp of the current daily data, `0.0` when unknown.
    pub fn metadata_timestamp(&self) -> DataResult<f64> {
        let metadata: Option<Metadata> = read_json(&self.metadata())?;
        Ok(metadata.unwrap_or_default().timestamp)
    }

    /// Account id to username, read fresh from the current account table.
    pub fn player_names(&self) -> DataResult<NameMap> {
        match collect_csv::<AccountRecord>(&self.account_data())? {
            Some(accounts) => Ok(NameMap::from_accounts(accounts)),
            None => {
                log::debug!("no account table, player names fall back to ids");
                Ok(NameMap::default())
            }
        }
    }

    /// Level id to level name.
    pub fn level_names(&self) -> DataResult<NameMap> {
        match collect_csv::<LevelRecord>(&self.level_data())? {
            Some(levels) => Ok(NameMap::from_levels(levels)),
            None => {
                log::debug!("no level table, level names fall back to ids");
                Ok(NameMap::default())
            }
        }
    }

    /// One `section` of a player's change history, empty if the file, the
    /// player or the section is absent. Other players and sections stay raw.
    pub fn player_history<T: DeserializeOwned>(
        &self,
        uuid: &str,
        section: &str,
    ) -> DataResult<Vec<T>> {
        let path = self.player_changes();
        let players: HashMap<String, Value> = match read_json(&path)? {
            Some(players) => players,
            None => return Ok(Vec::new()),
        };
        let changes = match players.get(uuid).and_then(|player| player.get(section)) {
            Some(changes) => changes,
            None => return Ok(Vec::new()),
        };
        let changes: Option<Vec<T>> = decode_json(&path, changes)?;
        Ok(changes.unwrap_or_default())
    }
}

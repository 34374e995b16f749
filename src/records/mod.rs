use rocket::serde::{json::Value, Deserialize};

use crate::archive::Snapshot;

mod leaderboard;
mod player;
mod quests;
mod score;

pub use leaderboard::*;
pub use player::*;
pub use quests::*;
pub use score::*;

/// One timestamped snapshot inside an archive file.
#[derive(Clone, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ArchiveEntry<T> {
    #[serde(default)]
    pub timestamp: f64,
    pub data: T,
}

impl<T> Snapshot for ArchiveEntry<T> {
    fn timestamp(&self) -> f64 {
        self.timestamp
    }
}

/// An entry of `monthly_lb_monthly/levels_archive.json`. The level ids are
/// decoded once the snapshot is selected.
#[derive(Clone, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LevelsSnapshot {
    #[serde(default)]
    pub timestamp: f64,
    #[serde(default = "no_levels")]
    pub levels: Value,
}

fn no_levels() -> Value {
    Value::Array(Vec::new())
}

impl Snapshot for LevelsSnapshot {
    fn timestamp(&self) -> f64 {
        self.timestamp
    }
}

/// `github_data/metadata.json`.
#[derive(Clone, Copy, Default, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct Metadata {
    #[serde(default)]
    pub timestamp: f64,
}

use rocket::serde::{Deserialize, Serialize};

use crate::api::LeaderboardEntry;
use crate::names::NameMap;

/// A row of `github_data/account_data.csv`.
#[derive(Clone, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct AccountRecord {
    pub account_id: String,
    pub username: String,
}

/// A row of `github_data/level_data.csv`.
#[derive(Clone, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LevelRecord {
    pub level_uuid: String,
    pub name: String,
}

/// A monthly leaderboard row, shared by the daily CSV and the monthly archive.
#[derive(Clone, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct MonthlyLeaderboardRow {
    pub player_uuid: String,
    pub country: String,
    pub score: i64,
    pub wrs: i64,
    pub average_place: f64,
}

impl MonthlyLeaderboardRow {
    pub fn into_entry(self, names: &NameMap) -> LeaderboardEntry {
        LeaderboardEntry {
            player_name: names.display_name(&self.player_uuid).to_owned(),
            player_uuid: self.player_uuid,
            country: self.country,
            score: self.score,
            wrs: self.wrs,
            average_place: self.average_place,
        }
    }
}

/// A row of `speedrun_lb_daily/leaderboard.csv`. Every column but the
/// player id may be absent.
#[derive(Clone, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct SpeedrunLeaderboardRow {
    pub player_uuid: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub score_1p_official: f64,
    #[serde(default)]
    pub score_2p_official: f64,
    #[serde(default)]
    pub score_1p_community: f64,
    #[serde(default)]
    pub score_2p_community: f64,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct XpLeaderboardRow {
    pub acc: String,
    pub name: String,
    pub xp: i64,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct BlitzLeaderboardRow {
    pub acc: String,
    pub name: String,
    pub bsr: i64,
}

/// Only the account reference of an archived leaderboard row; used when
/// searching for a player's placement without parsing the scores.
#[derive(Clone, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct AccountRef {
    #[serde(default)]
    pub acc: Option<String>,
}

/// Only the player id column of a leaderboard CSV.
#[derive(Clone, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct PlayerRef {
    pub player_uuid: String,
}

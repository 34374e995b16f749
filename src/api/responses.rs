use rocket::serde::{Deserialize, Serialize};

use crate::archive::DayUptime;
use crate::records::{BlitzLeaderboardRow, BlitzPoint, QuestData, XpLeaderboardRow, XpPoint};

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LeaderboardEntry {
    pub player_uuid: String,
    pub player_name: String,
    pub country: String,
    pub score: i64,
    pub wrs: i64,
    pub average_place: f64,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LevelInfo {
    pub uuid: String,
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct MonthlyLeaderboardResponse {
    pub timestamp: f64,
    pub levels: Vec<LevelInfo>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct MonthlyLevelsResponse {
    pub year: i32,
    pub month: u32,
    pub timestamp: f64,
    pub levels: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct SpeedrunLeaderboardEntry {
    pub player_uuid: String,
    pub player_name: String,
    pub country: String,
    pub score_1p_official: f64,
    pub score_2p_official: f64,
    pub score_1p_community: f64,
    pub score_2p_community: f64,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct SpeedrunLeaderboardResponse {
    pub timestamp: f64,
    pub leaderboard: Vec<SpeedrunLeaderboardEntry>,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct XpLeaderboardResponse {
    pub timestamp: f64,
    pub data: Vec<XpLeaderboardRow>,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct BlitzLeaderboardResponse {
    pub timestamp: f64,
    pub data: Vec<BlitzLeaderboardRow>,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct MonthUptimeResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayUptime>,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct QuestResponse {
    pub timestamp: f64,
    pub data: QuestData,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct PlayerXpHistoryResponse {
    pub player_uuid: String,
    pub history: Vec<XpPoint>,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct PlayerBlitzHistoryResponse {
    pub player_uuid: String,
    pub history: Vec<BlitzPoint>,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LeaderboardPlacement {
    pub timestamp: f64,
    /// 1-based.
    pub placement: Option<u32>,
    pub not_found: bool,
}

impl LeaderboardPlacement {
    pub fn new(timestamp: f64, placement: Option<u32>) -> Self {
        Self {
            timestamp,
            placement,
            not_found: placement.is_none(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct PlayerLeaderboardPlacementsResponse {
    pub player_uuid: String,
    pub monthly_leaderboard: LeaderboardPlacement,
    pub xp_leaderboard: LeaderboardPlacement,
    pub blitz_leaderboard: LeaderboardPlacement,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct UsernameChange {
    pub timestamp: f64,
    pub new_name: String,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct UsernameChangeHistoryResponse {
    pub player_uuid: String,
    pub changes: Vec<UsernameChange>,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct GetUsernameResponse {
    pub player_uuid: String,
    pub username: String,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct PlayerLevelScore {
    pub player_uuid: String,
    pub score: i64,
    pub level_version: i64,
    pub value_type: i64,
    pub timestamp: f64,
    pub country: String,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LevelScoresGroup {
    pub level_uuid: String,
    pub level_name: String,
    pub scores: Vec<PlayerLevelScore>,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ComparisonResponse {
    pub players: Vec<String>,
    pub levels: Vec<LevelScoresGroup>,
}

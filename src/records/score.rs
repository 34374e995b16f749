use rocket::serde::{Deserialize, Serialize};

// Columns of `github_data/score_data.csv`:
// account_ids
// level_uuid
// level_version
// value
// value_type
// date
// country

pub type LevelVersion = i64;
pub type ValueType = i64;

/// Header of the column holding the submitting player.
pub const SCORE_PLAYER_COLUMN: &str = "account_ids";

/// The version columns of a score row, read from every row to find the
/// newest version of each level.
#[derive(Clone, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LevelVersionRecord {
    pub level_uuid: String,
    pub level_version: LevelVersion,
}

/// One score submission for a level.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LevelScoreRecord {
    #[serde(rename = "account_ids")]
    pub player_uuid: String,
    pub level_uuid: String,
    pub level_version: LevelVersion,
    pub value: i64,
    pub value_type: ValueType,
    /// Submission time in seconds since epoch.
    pub date: f64,
    pub country: String,
}

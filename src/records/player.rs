use rocket::serde::{Deserialize, Serialize};

// Sections of a player's entry in `player_data/player_changes.json`, which
// maps player ids to objects of these lists.
pub const XP_CHANGES: &str = "xp_changes";
pub const BLITZ_CHANGES: &str = "blitz_changes";
pub const USERNAMES: &str = "usernames";

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct XpPoint {
    pub timestamp: f64,
    pub xp: i64,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct BlitzPoint {
    pub timestamp: f64,
    pub bsr: i64,
}

#[derive(Clone, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct UsernamePoint {
    pub timestamp: f64,
    pub name: String,
}

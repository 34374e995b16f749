use rocket::serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct QuestLevel {
    pub uuid: String,
    pub version: i64,
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct Quest {
    pub kind: i64,
    pub goal: i64,
    #[serde(default)]
    pub levels: Vec<QuestLevel>,
    /// Reward amount.
    pub xp: i64,
    #[serde(default)]
    pub enemy: Option<String>,
}

/// A day's quest definitions.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct QuestData {
    pub version: i64,
    pub expiration: i64,
    pub quests_id: i64,
    pub quests: Vec<Quest>,
}

use rocket::serde::{de::DeserializeOwned, json::Json};
use rocket::{get, routes, Route, State};

use crate::archive::{self, CalendarMonth};
use crate::names::NameMap;
use crate::storage::{read_csv, read_lines, ArchiveFile, ArchiveKind, DataResult, Storage};

mod archived;
mod comparison;
mod data;
mod leaderboard;
mod player;
mod request_error;
mod responses;

pub use request_error::*;
pub use responses::*;

pub fn routes() -> Vec<Route> {
    routes![
        leaderboard::get_monthly_leaderboard,
        leaderboard::get_speedrun_leaderboard,
        leaderboard::get_archived_monthly_leaderboard,
        leaderboard::get_monthly_leaderboard_levels,
        archived::get_archived_xp_leaderboard,
        archived::get_archived_blitz_leaderboard,
        archived::get_xp_leaderboard_uptime,
        archived::get_blitz_leaderboard_uptime,
        archived::get_archived_quests,
        archived::get_quests_uptime,
        player::get_player_xp_history,
        player::get_player_blitz_history,
        player::get_username_change_history,
        player::get_player_leaderboard_placements,
        player::get_player_username,
        comparison::compare_scores_by_level,
        data::get_players_csv,
    ]
}

/// Runs `job` on the blocking pool; every file a request touches is opened
/// and closed inside it.
async fn with_storage<T, F>(storage: &State<Storage>, job: F) -> RequestResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Storage) -> RequestResult<T> + Send + 'static,
{
    let storage = storage.inner().clone();
    tokio::task::spawn_blocking(move || job(&storage))
        .await
        .map_err(|err| RequestError::Internal(err.to_string()))?
}

/// Loads the mandatory archive of `kind` for a requested month.
fn load_archive(
    storage: &Storage,
    kind: ArchiveKind,
    year: i32,
    month: u32,
) -> RequestResult<(CalendarMonth, ArchiveFile)> {
    let missing = || RequestError::MissingArchive { kind, year, month };
    let calendar_month = CalendarMonth::new(year, month).ok_or_else(missing)?;
    let file = storage.archive(kind, calendar_month)?.ok_or_else(missing)?;
    Ok((calendar_month, file))
}

/// Resolves level ids to their display names.
fn level_infos(storage: &Storage, uuids: Vec<String>) -> DataResult<Vec<LevelInfo>> {
    let names = storage.level_names()?;
    Ok(uuids
        .into_iter()
        .map(|uuid| LevelInfo {
            name: names.display_name(&uuid).to_owned(),
            uuid,
        })
        .collect())
}

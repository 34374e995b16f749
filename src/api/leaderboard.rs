use crate::records::{ArchiveEntry, MonthlyLeaderboardRow, SpeedrunLeaderboardRow};

use super::*;

/// Fetches the current monthly leaderboard with the current month's levels.
/// Every source is optional: absent files give empty lists and a zero timestamp.
#[get("/get_monthly_leaderboard")]
pub async fn get_monthly_leaderboard(
    storage: &State<Storage>,
) -> RequestResult<Json<MonthlyLeaderboardResponse>> {
    with_storage(storage, |storage| {
        let names = storage.player_names()?;

        let leaderboard = match read_csv::<MonthlyLeaderboardRow>(&storage.monthly_leaderboard())? {
            Some(rows) => rows
                .map(|row| row.map(|row| row.into_entry(&names)))
                .collect::<DataResult<Vec<_>>>()?,
            None => Vec::new(),
        };

        let levels = match read_lines(&storage.monthly_levels())? {
            Some(uuids) => level_infos(storage, uuids)?,
            None => Vec::new(),
        };

        let timestamp = storage.metadata_timestamp()?;

        Ok(Json(MonthlyLeaderboardResponse {
            timestamp,
            levels,
            leaderboard,
        }))
    })
    .await
}

/// Fetches the current daily speedrun leaderboard.
#[get("/get_speedrun_leaderboard")]
pub async fn get_speedrun_leaderboard(
    storage: &State<Storage>,
) -> RequestResult<Json<SpeedrunLeaderboardResponse>> {
    with_storage(storage, |storage| {
        let names = storage.player_names()?;

        let leaderboard = match read_csv::<SpeedrunLeaderboardRow>(&storage.speedrun_leaderboard())? {
            Some(rows) => rows
                .map(|row| row.map(|row| speedrun_entry(row, &names)))
                .collect::<DataResult<Vec<_>>>()?,
            None => Vec::new(),
        };

        let timestamp = storage.metadata_timestamp()?;

        Ok(Json(SpeedrunLeaderboardResponse {
            timestamp,
            leaderboard,
        }))
    })
    .await
}

fn speedrun_entry(row: SpeedrunLeaderboardRow, names: &NameMap) -> SpeedrunLeaderboardEntry {
    SpeedrunLeaderboardEntry {
        player_name: names.display_name(&row.player_uuid).to_owned(),
        player_uuid: row.player_uuid,
        country: row.country,
        score_1p_official: row.score_1p_official,
        score_2p_official: row.score_2p_official,
        score_1p_community: row.score_1p_community,
        score_2p_community: row.score_2p_community,
    }
}

/// Fetches the last stored state of the monthly leaderboard for a past month.
/// Levels come from the levels snapshot closest in time to that state.
#[get("/get_monthly_leaderboard/<year>/<month>")]
pub async fn get_archived_monthly_leaderboard(
    year: i32,
    month: u32,
    storage: &State<Storage>,
) -> RequestResult<Json<MonthlyLeaderboardResponse>> {
    with_storage(storage, move |storage| {
        let (_, file) = load_archive(storage, ArchiveKind::MonthlyLeaderboard, year, month)?;
        let latest = archive::latest(&file.entries).ok_or(RequestError::EmptyArchive)?;
        let latest: ArchiveEntry<Vec<MonthlyLeaderboardRow>> = file.decode_entry(latest)?;

        // Names come from the current account table, not a historical one.
        let names = storage.player_names()?;
        let leaderboard = latest
            .data
            .into_iter()
            .map(|row| row.into_entry(&names))
            .collect();

        let levels = match storage.levels_archive()? {
            Some(snapshots) => match archive::closest(&snapshots.entries, latest.timestamp) {
                Some(snapshot) => level_infos(storage, snapshots.decode(&snapshot.levels)?)?,
                None => Vec::new(),
            },
            None => Vec::new(),
        };

        Ok(Json(MonthlyLeaderboardResponse {
            timestamp: latest.timestamp,
            levels,
            leaderboard,
        }))
    })
    .await
}

/// Fetches the levels of a month: the first levels snapshot taken within it.
#[get("/get_monthly_leaderboard_levels/<year>/<month>")]
pub async fn get_monthly_leaderboard_levels(
    year: i32,
    month: u32,
    storage: &State<Storage>,
) -> RequestResult<Json<MonthlyLevelsResponse>> {
    with_storage(storage, move |storage| {
        let snapshots = storage
            .levels_archive()?
            .ok_or(RequestError::MissingSource {
                name: "levels archive",
            })?;

        let not_found = || RequestError::NoLevels { year, month };
        let calendar_month = CalendarMonth::new(year, month).ok_or_else(not_found)?;
        let snapshot = archive::first_within(&snapshots.entries, calendar_month.span())
            .ok_or_else(not_found)?;

        Ok(Json(MonthlyLevelsResponse {
            year,
            month,
            timestamp: snapshot.timestamp,
            levels: snapshots.decode(&snapshot.levels)?,
        }))
    })
    .await
}

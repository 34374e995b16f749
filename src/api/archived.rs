use crate::archive::classify_month;
use crate::records::{ArchiveEntry, BlitzLeaderboardRow, QuestData, XpLeaderboardRow};

use super::*;

/// The snapshot of `kind` closest to `timestamp`, searched in the archive of
/// the UTC month `timestamp` falls in. Only that snapshot is decoded.
fn closest_snapshot<T: DeserializeOwned>(
    storage: &Storage,
    kind: ArchiveKind,
    timestamp: f64,
) -> RequestResult<ArchiveEntry<T>> {
    let month = CalendarMonth::containing(timestamp)
        .ok_or(RequestError::NoArchiveAt { kind, timestamp })?;
    let (_, file) = load_archive(storage, kind, month.year(), month.month())?;
    let entry = archive::closest(&file.entries, timestamp).ok_or(RequestError::EmptyArchive)?;
    Ok(file.decode_entry(entry)?)
}

fn month_uptime(
    storage: &Storage,
    kind: ArchiveKind,
    year: i32,
    month: u32,
) -> RequestResult<MonthUptimeResponse> {
    let (calendar_month, file) = load_archive(storage, kind, year, month)?;
    Ok(MonthUptimeResponse {
        year,
        month,
        days: classify_month(calendar_month, &file.entries, kind.coverage()),
    })
}

/// Fetches the XP leaderboard snapshot closest to `timestamp`.
#[get("/archive/xp_leaderboard/<timestamp>")]
pub async fn get_archived_xp_leaderboard(
    timestamp: f64,
    storage: &State<Storage>,
) -> RequestResult<Json<XpLeaderboardResponse>> {
    with_storage(storage, move |storage| {
        let entry = closest_snapshot::<Vec<XpLeaderboardRow>>(storage, ArchiveKind::Xp, timestamp)?;
        Ok(Json(XpLeaderboardResponse {
            timestamp: entry.timestamp,
            data: entry.data,
        }))
    })
    .await
}

/// Fetches the blitz leaderboard snapshot closest to `timestamp`.
#[get("/archive/blitz_leaderboard/<timestamp>")]
pub async fn get_archived_blitz_leaderboard(
    timestamp: f64,
    storage: &State<Storage>,
) -> RequestResult<Json<BlitzLeaderboardResponse>> {
    with_storage(storage, move |storage| {
        let entry =
            closest_snapshot::<Vec<BlitzLeaderboardRow>>(storage, ArchiveKind::Blitz, timestamp)?;
        Ok(Json(BlitzLeaderboardResponse {
            timestamp: entry.timestamp,
            data: entry.data,
        }))
    })
    .await
}

/// Per-day availability of XP leaderboard snapshots in a month.
#[get("/archive/uptime/xp_leaderboard/<year>/<month>")]
pub async fn get_xp_leaderboard_uptime(
    year: i32,
    month: u32,
    storage: &State<Storage>,
) -> RequestResult<Json<MonthUptimeResponse>> {
    with_storage(storage, move |storage| {
        month_uptime(storage, ArchiveKind::Xp, year, month).map(Json)
    })
    .await
}

/// Per-day availability of blitz leaderboard snapshots in a month.
#[get("/archive/uptime/blitz_leaderboard/<year>/<month>")]
pub async fn get_blitz_leaderboard_uptime(
    year: i32,
    month: u32,
    storage: &State<Storage>,
) -> RequestResult<Json<MonthUptimeResponse>> {
    with_storage(storage, move |storage| {
        month_uptime(storage, ArchiveKind::Blitz, year, month).map(Json)
    })
    .await
}

/// Fetches the quests of a single UTC day.
#[get("/archive/quests/<year>/<month>/<day>")]
pub async fn get_archived_quests(
    year: i32,
    month: u32,
    day: u32,
    storage: &State<Storage>,
) -> RequestResult<Json<QuestResponse>> {
    with_storage(storage, move |storage| {
        let (calendar_month, file) = load_archive(storage, ArchiveKind::Quests, year, month)?;

        let not_found = || RequestError::NoQuests { year, month, day };
        let span = calendar_month.day(day).ok_or_else(not_found)?;
        let entry = archive::first_within(&file.entries, span).ok_or_else(not_found)?;
        let entry: ArchiveEntry<QuestData> = file.decode_entry(entry)?;

        Ok(Json(QuestResponse {
            timestamp: entry.timestamp,
            data: entry.data,
        }))
    })
    .await
}

/// Per-day availability of quests in a month.
#[get("/archive/uptime/quests/<year>/<month>")]
pub async fn get_quests_uptime(
    year: i32,
    month: u32,
    storage: &State<Storage>,
) -> RequestResult<Json<MonthUptimeResponse>> {
    with_storage(storage, move |storage| {
        month_uptime(storage, ArchiveKind::Quests, year, month).map(Json)
    })
    .await
}

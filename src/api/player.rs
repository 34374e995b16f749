use crate::records::{
    AccountRecord, AccountRef, BlitzPoint, PlayerRef, UsernamePoint, XpPoint, BLITZ_CHANGES,
    USERNAMES, XP_CHANGES,
};

use super::*;

/// Fetches XP history of a player, empty if the player is unknown.
#[get("/player/<uuid>/get_xp_history")]
pub async fn get_player_xp_history(
    uuid: String,
    storage: &State<Storage>,
) -> RequestResult<Json<PlayerXpHistoryResponse>> {
    with_storage(storage, move |storage| {
        let history = storage.player_history::<XpPoint>(&uuid, XP_CHANGES)?;
        Ok(Json(PlayerXpHistoryResponse {
            player_uuid: uuid,
            history,
        }))
    })
    .await
}

/// Fetches blitz rating history of a player, empty if the player is unknown.
#[get("/player/<uuid>/get_blitz_history")]
pub async fn get_player_blitz_history(
    uuid: String,
    storage: &State<Storage>,
) -> RequestResult<Json<PlayerBlitzHistoryResponse>> {
    with_storage(storage, move |storage| {
        let history = storage.player_history::<BlitzPoint>(&uuid, BLITZ_CHANGES)?;
        Ok(Json(PlayerBlitzHistoryResponse {
            player_uuid: uuid,
            history,
        }))
    })
    .await
}

/// Fetches the username changes of a player, empty if the player is unknown.
#[get("/player/<uuid>/get_username_change_history")]
pub async fn get_username_change_history(
    uuid: String,
    storage: &State<Storage>,
) -> RequestResult<Json<UsernameChangeHistoryResponse>> {
    with_storage(storage, move |storage| {
        let changes = storage
            .player_history::<UsernamePoint>(&uuid, USERNAMES)?
            .into_iter()
            .map(|entry| UsernameChange {
                timestamp: entry.timestamp,
                new_name: entry.name,
            })
            .collect();
        Ok(Json(UsernameChangeHistoryResponse {
            player_uuid: uuid,
            changes,
        }))
    })
    .await
}

/// Position of the player on the current monthly leaderboard.
/// Rows below the player are never parsed.
fn monthly_placement(storage: &Storage, uuid: &str) -> RequestResult<LeaderboardPlacement> {
    let mut placement = None;
    if let Some(rows) = read_csv::<PlayerRef>(&storage.monthly_leaderboard())? {
        for (index, row) in rows.enumerate() {
            if row?.player_uuid == uuid {
                placement = Some(index as u32 + 1);
                break;
            }
        }
    }
    Ok(LeaderboardPlacement::new(
        storage.metadata_timestamp()?,
        placement,
    ))
}

/// Position of the player in the latest snapshot of the most recent archive of `kind`.
fn archived_placement(
    storage: &Storage,
    kind: ArchiveKind,
    uuid: &str,
) -> RequestResult<LeaderboardPlacement> {
    let unplaced = LeaderboardPlacement::new(0.0, None);

    let path = match storage.latest_archive(kind)? {
        Some(path) => path,
        None => return Ok(unplaced),
    };
    let file: ArchiveFile = match ArchiveFile::read(&path)? {
        Some(file) => file,
        None => return Ok(unplaced),
    };
    let latest = match archive::latest(&file.entries) {
        Some(latest) => file.decode_entry::<Vec<AccountRef>>(latest)?,
        None => return Ok(unplaced),
    };

    let placement = latest
        .data
        .iter()
        .position(|row| row.acc.as_deref() == Some(uuid))
        .map(|index| index as u32 + 1);
    Ok(LeaderboardPlacement::new(latest.timestamp, placement))
}

/// Fetches the placements of a player on the monthly, XP, and blitz leaderboards.
#[get("/player/<uuid>/get_leaderboard_placements")]
pub async fn get_player_leaderboard_placements(
    uuid: String,
    storage: &State<Storage>,
) -> RequestResult<Json<PlayerLeaderboardPlacementsResponse>> {
    with_storage(storage, move |storage| {
        let monthly_leaderboard = monthly_placement(storage, &uuid)?;
        let xp_leaderboard = archived_placement(storage, ArchiveKind::Xp, &uuid)?;
        let blitz_leaderboard = archived_placement(storage, ArchiveKind::Blitz, &uuid)?;
        Ok(Json(PlayerLeaderboardPlacementsResponse {
            player_uuid: uuid,
            monthly_leaderboard,
            xp_leaderboard,
            blitz_leaderboard,
        }))
    })
    .await
}

/// Fetches the current username of a player from the account table.
#[get("/player/<uuid>/get_username")]
pub async fn get_player_username(
    uuid: String,
    storage: &State<Storage>,
) -> RequestResult<Json<GetUsernameResponse>> {
    with_storage(storage, move |storage| {
        let accounts = read_csv::<AccountRecord>(&storage.account_data())?.ok_or(
            RequestError::MissingSource {
                name: "account data",
            },
        )?;
        for account in accounts {
            let account = account?;
            if account.account_id == uuid {
                return Ok(Json(GetUsernameResponse {
                    player_uuid: uuid,
                    username: account.username,
                }));
            }
        }
        Err(RequestError::PlayerNotFound { uuid })
    })
    .await
}

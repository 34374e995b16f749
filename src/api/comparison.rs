use std::collections::HashSet;

use crate::comparison::{compare_scores, LevelVersions};
use crate::records::{LevelScoreRecord, LevelVersionRecord, SCORE_PLAYER_COLUMN};
use crate::storage::collect_csv_where;

use super::*;

/// Compares the latest scores of `player_uuids`, grouped by level.
/// Usage: `/comparison/get_scores_by_level?player_uuids=a&player_uuids=b`
#[get("/comparison/get_scores_by_level?<player_uuids>")]
pub async fn compare_scores_by_level(
    player_uuids: Vec<String>,
    storage: &State<Storage>,
) -> RequestResult<Json<ComparisonResponse>> {
    if player_uuids.is_empty() {
        return Err(RequestError::MissingQuery {
            name: "player_uuids",
        });
    }

    with_storage(storage, move |storage| {
        let path = storage.score_data();
        let versions = read_csv::<LevelVersionRecord>(&path)?
            .ok_or(RequestError::MissingSource { name: "score data" })?
            .collect::<DataResult<LevelVersions>>()?;

        // Rows of other players are only read for their versions.
        let rows = {
            let requested: HashSet<&str> = player_uuids.iter().map(String::as_str).collect();
            collect_csv_where::<LevelScoreRecord, _>(&path, SCORE_PLAYER_COLUMN, |player| {
                requested.contains(player)
            })?
            .unwrap_or_default()
        };
        let level_names = storage.level_names()?;

        let levels = compare_scores(&versions, &rows, &player_uuids)
            .into_iter()
            .map(|level| LevelScoresGroup {
                level_name: level_names.display_name(&level.level_uuid).to_owned(),
                level_uuid: level.level_uuid,
                scores: level.scores,
            })
            .collect();

        Ok(Json(ComparisonResponse {
            players: player_uuids,
            levels,
        }))
    })
    .await
}

use crate::api::{
    LevelInfo, MonthlyLeaderboardResponse, MonthlyLevelsResponse, SpeedrunLeaderboardResponse,
};

use super::*;

const ACCOUNTS: &str = "account_id,username\np1,Alice\n";

/// Names are joined from the account table, unknown ids fall back to themselves
#[rocket::async_test]
async fn current_monthly_leaderboard() {
    let storage = StorageFixture::new();
    storage
        .write("github_data/account_data.csv", ACCOUNTS)
        .write(
            "monthly_lb_daily/leaderboard.csv",
            "player_uuid,country,score,wrs,average_place\np1,se,100,3,1.5\np2,fi,80,0,4.25\n",
        )
        .write("monthly_lb_monthly/levels.txt", "l1\n\nl2\n")
        .write("github_data/level_data.csv", "level_uuid,name\nl1,Canyon\n")
        .write_json("github_data/metadata.json", json!({ "timestamp": 1234.5 }));
    let client = storage.client().await;

    let response: MonthlyLeaderboardResponse = get(&client, "/get_monthly_leaderboard").await;
    assert_eq!(response.timestamp, 1234.5);

    let rows: Vec<_> = response
        .leaderboard
        .iter()
        .map(|entry| (entry.player_uuid.as_str(), entry.player_name.as_str(), entry.score))
        .collect();
    assert_eq!(rows, vec![("p1", "Alice", 100), ("p2", "p2", 80)]);
    assert_eq!(response.leaderboard[1].average_place, 4.25);

    assert_eq!(
        response.levels,
        vec![
            LevelInfo { uuid: "l1".to_owned(), name: "Canyon".to_owned() },
            LevelInfo { uuid: "l2".to_owned(), name: "l2".to_owned() },
        ]
    );
}

/// Every source of the current leaderboard is optional
#[rocket::async_test]
async fn current_monthly_leaderboard_without_data() {
    let storage = StorageFixture::new();
    let client = storage.client().await;

    let response: MonthlyLeaderboardResponse = get(&client, "/get_monthly_leaderboard").await;
    assert_eq!(response.timestamp, 0.0);
    assert!(response.levels.is_empty());
    assert!(response.leaderboard.is_empty());
}

/// A single malformed number fails the whole request
#[rocket::async_test]
async fn malformed_leaderboard_row() {
    let storage = StorageFixture::new();
    storage.write(
        "monthly_lb_daily/leaderboard.csv",
        "player_uuid,country,score,wrs,average_place\np1,se,100,3,1.5\np2,fi,lots,0,4\n",
    );
    let client = storage.client().await;

    let (status, _) = get_error(&client, "/get_monthly_leaderboard").await;
    assert_eq!(status, Status::InternalServerError);
}

/// Missing speedrun columns default to empty values
#[rocket::async_test]
async fn speedrun_leaderboard() {
    let storage = StorageFixture::new();
    storage
        .write("github_data/account_data.csv", ACCOUNTS)
        .write(
            "speedrun_lb_daily/leaderboard.csv",
            "player_uuid,score_1p_official,score_2p_community\np1,12.5,30\n",
        );
    let client = storage.client().await;

    let response: SpeedrunLeaderboardResponse = get(&client, "/get_speedrun_leaderboard").await;
    assert_eq!(response.timestamp, 0.0);
    let entry = &response.leaderboard[0];
    assert_eq!(entry.player_name, "Alice");
    assert_eq!(entry.country, "");
    assert_eq!(entry.score_1p_official, 12.5);
    assert_eq!(entry.score_2p_official, 0.0);
    assert_eq!(entry.score_1p_community, 0.0);
    assert_eq!(entry.score_2p_community, 30.0);
}

/// An empty numeric cell is malformed, not a default
#[rocket::async_test]
async fn speedrun_leaderboard_with_empty_score() {
    let storage = StorageFixture::new();
    storage.write(
        "speedrun_lb_daily/leaderboard.csv",
        "player_uuid,score_1p_official\np1,\n",
    );
    let client = storage.client().await;

    let response = client.get("/get_speedrun_leaderboard").dispatch().await;
    assert_eq!(response.status(), Status::InternalServerError);
}

/// A month without an archive file is reported by name
#[rocket::async_test]
async fn archived_monthly_leaderboard_missing() {
    let storage = StorageFixture::new();
    let client = storage.client().await;

    let (status, detail) = get_error(&client, "/get_monthly_leaderboard/2024/3").await;
    assert_eq!(status, Status::NotFound);
    assert_eq!(detail, "No monthly leaderboard archive found for 3/2024");

    let (status, detail) = get_error(&client, "/get_monthly_leaderboard/2024/13").await;
    assert_eq!(status, Status::NotFound);
    assert_eq!(detail, "No monthly leaderboard archive found for 13/2024");
}

/// The latest snapshot of the month is served with the levels closest to it
#[rocket::async_test]
async fn archived_monthly_leaderboard() {
    let row = |uuid: &str, score: i64| {
        json!({ "player_uuid": uuid, "country": "se", "score": score, "wrs": 1, "average_place": 2.0 })
    };
    let storage = StorageFixture::new();
    storage
        .write("github_data/account_data.csv", ACCOUNTS)
        .write_json(
            "monthly_lb_daily/archive/monthly_lb_03_2024.json",
            json!([
                { "timestamp": at(2024, 3, 2, 0), "data": [row("p1", 10)] },
                { "timestamp": at(2024, 3, 30, 0), "data": [row("p1", 90), row("p2", 70)] },
                { "timestamp": at(2024, 3, 15, 0), "data": [row("p1", 50)] },
            ]),
        )
        .write_json(
            "monthly_lb_monthly/levels_archive.json",
            json!([
                { "timestamp": at(2024, 3, 1, 0), "levels": ["march"] },
                { "timestamp": at(2024, 4, 1, 0), "levels": ["april"] },
                { "timestamp": at(2024, 2, 1, 0), "levels": ["february"] },
            ]),
        );
    let client = storage.client().await;

    let response: MonthlyLeaderboardResponse = get(&client, "/get_monthly_leaderboard/2024/3").await;
    assert_eq!(response.timestamp, at(2024, 3, 30, 0));
    let scores: Vec<_> = response
        .leaderboard
        .iter()
        .map(|entry| (entry.player_name.as_str(), entry.score))
        .collect();
    assert_eq!(scores, vec![("Alice", 90), ("p2", 70)]);
    assert_eq!(
        response.levels,
        vec![LevelInfo { uuid: "april".to_owned(), name: "april".to_owned() }]
    );
}

/// An archive file without snapshots is not found
#[rocket::async_test]
async fn archived_monthly_leaderboard_empty() {
    let storage = StorageFixture::new();
    storage.write("monthly_lb_daily/archive/monthly_lb_01_2024.json", "[]");
    let client = storage.client().await;

    let (status, detail) = get_error(&client, "/get_monthly_leaderboard/2024/1").await;
    assert_eq!(status, Status::NotFound);
    assert_eq!(detail, "Archive is empty");
}

/// The first levels snapshot inside the month is returned
#[rocket::async_test]
async fn monthly_leaderboard_levels() {
    let storage = StorageFixture::new();
    storage.write_json(
        "monthly_lb_monthly/levels_archive.json",
        json!([
            { "timestamp": at(2024, 2, 29, 23), "levels": ["february"] },
            { "timestamp": at(2024, 3, 1, 0), "levels": ["a", "b"] },
            { "timestamp": at(2024, 3, 20, 0), "levels": ["c"] },
        ]),
    );
    let client = storage.client().await;

    let response: MonthlyLevelsResponse =
        get(&client, "/get_monthly_leaderboard_levels/2024/3").await;
    assert_eq!(
        response,
        MonthlyLevelsResponse {
            year: 2024,
            month: 3,
            timestamp: at(2024, 3, 1, 0),
            levels: vec!["a".to_owned(), "b".to_owned()],
        }
    );

    let (status, detail) = get_error(&client, "/get_monthly_leaderboard_levels/2024/5").await;
    assert_eq!(status, Status::NotFound);
    assert_eq!(detail, "No levels found for 2024/5");
}

/// The levels archive is mandatory for the levels endpoint
#[rocket::async_test]
async fn monthly_leaderboard_levels_without_archive() {
    let storage = StorageFixture::new();
    let client = storage.client().await;

    let (status, detail) = get_error(&client, "/get_monthly_leaderboard_levels/2024/3").await;
    assert_eq!(status, Status::NotFound);
    assert_eq!(detail, "No levels archive found");
}

/// Snapshots other than the one served are never decoded
#[rocket::async_test]
async fn archived_monthly_leaderboard_ignores_unserved_snapshots() {
    let row = |uuid: &str, score: Value| {
        json!({ "player_uuid": uuid, "country": "se", "score": score, "wrs": 1, "average_place": 2.0 })
    };
    let storage = StorageFixture::new();
    storage
        .write_json(
            "monthly_lb_daily/archive/monthly_lb_03_2024.json",
            json!([
                { "timestamp": at(2024, 3, 2, 0), "data": [row("p1", json!("n/a"))] },
                { "timestamp": at(2024, 3, 30, 0), "data": [row("p1", json!(90))] },
            ]),
        )
        .write_json(
            "monthly_lb_monthly/levels_archive.json",
            json!([
                { "timestamp": at(2024, 1, 1, 0), "levels": "n/a" },
                { "timestamp": at(2024, 3, 1, 0), "levels": ["march"] },
            ]),
        )
        .write_json(
            "monthly_lb_daily/archive/monthly_lb_04_2024.json",
            json!([
                { "timestamp": at(2024, 4, 2, 0), "data": [row("p1", json!(10))] },
                { "timestamp": at(2024, 4, 30, 0), "data": [row("p1", json!("n/a"))] },
            ]),
        );
    let client = storage.client().await;

    let response: MonthlyLeaderboardResponse = get(&client, "/get_monthly_leaderboard/2024/3").await;
    assert_eq!(response.leaderboard[0].score, 90);
    assert_eq!(response.levels[0].uuid, "march");

    let response: MonthlyLevelsResponse =
        get(&client, "/get_monthly_leaderboard_levels/2024/3").await;
    assert_eq!(response.levels, vec!["march".to_owned()]);

    // A malformed snapshot that is served still fails
    let (status, _) = get_error(&client, "/get_monthly_leaderboard/2024/4").await;
    assert_eq!(status, Status::InternalServerError);
}

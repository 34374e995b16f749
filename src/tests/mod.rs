use chrono::{TimeZone, Utc};
use rocket::{
    http::Status,
    local::asynchronous::{Client, LocalResponse},
    serde::json::{json, serde_json, Value},
};
use tempfile::TempDir;

use crate::storage::Storage;

mod leaderboard;

/// A storage root in a temporary directory.
struct StorageFixture {
    dir: TempDir,
}

impl StorageFixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create a temporary storage root"),
        }
    }

    /// Writes `contents` to `relative` under the storage root
    fn write(&self, relative: &str, contents: &str) -> &Self {
        let path = self.dir.path().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
        self
    }

    fn write_json(&self, relative: &str, value: Value) -> &Self {
        self.write(relative, &value.to_string())
    }

    async fn client(&self) -> Client {
        Client::tracked(crate::build(Storage::new(self.dir.path())))
            .await
            .expect("valid rocket instance")
    }
}

/// Seconds since epoch of a UTC hour
fn at(year: i32, month: u32, day: u32, hour: u32) -> f64 {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .unwrap()
        .timestamp() as f64
}

async fn deserialize_response<'a, T: rocket::serde::DeserializeOwned>(
    response: LocalResponse<'a>,
) -> serde_json::Result<T> {
    let string = response.into_string().await.unwrap();
    serde_json::from_str(&string)
}

/// Fetches `uri` and deserializes a successful response
async fn get<T: rocket::serde::DeserializeOwned>(client: &Client, uri: &str) -> T {
    let response = client.get(uri.to_owned()).dispatch().await;
    assert_eq!(response.status(), Status::Ok, "GET {}", uri);
    deserialize_response(response).await.unwrap()
}

/// Fetches `uri` expecting a failure, returns its status and detail message
async fn get_error(client: &Client, uri: &str) -> (Status, String) {
    let response = client.get(uri.to_owned()).dispatch().await;
    let status = response.status();
    let body: Value = deserialize_response(response).await.unwrap();
    let detail = body["detail"].as_str().unwrap_or_default().to_owned();
    (status, detail)
}

/// The root and health endpoints answer without any data
#[rocket::async_test]
async fn root_and_health() {
    let storage = StorageFixture::new();
    let client = storage.client().await;

    let root: Value = get(&client, "/").await;
    assert_eq!(root, json!({ "message": "API v1 is running" }));

    let health: Value = get(&client, "/health").await;
    assert_eq!(health, json!({ "status": "healthy" }));
}

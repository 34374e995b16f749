use rocket::fairing::AdHoc;
use rocket::serde::json::{json, Value};
use rocket::{get, launch, routes, Build, Rocket};

mod api;
mod archive;
mod comparison;
mod config;
mod names;
mod records;
mod storage;
#[cfg(test)]
mod tests;

use storage::Storage;

#[launch]
fn rocket() -> _ {
    let config = config::Config::from_env();
    build(Storage::new(config.storage_path))
}

/// Builds the server over the archives found under `storage`.
pub fn build(storage: Storage) -> Rocket<Build> {
    rocket::build()
        .mount("/", routes![index, health])
        .mount("/", api::routes())
        .manage::<Storage>(storage)
        .attach(AdHoc::on_liftoff("Storage root", |rocket| {
            Box::pin(async move {
                if let Some(storage) = rocket.state::<Storage>() {
                    log::info!("serving archives from {}", storage.root().display());
                }
            })
        }))
}

#[get("/")]
fn index() -> Value {
    json!({ "message": "API v1 is running" })
}

#[get("/health")]
fn health() -> Value {
    json!({ "status": "healthy" })
}

use std::path::PathBuf;

use rocket::serde::json::serde_json;

/// Failure while reading a file that exists.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed row in {}: {source}", .path.display())]
    MalformedCsv { path: PathBuf, source: csv::Error },
    #[error("malformed json in {}: {source}", .path.display())]
    MalformedJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type DataResult<T> = std::result::Result<T, DataError>;

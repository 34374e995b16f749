use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::{json::Json, Serialize};
use rocket::Request;

use crate::storage::{ArchiveKind, DataError};

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("No {kind} archive found for {month}/{year}")]
    MissingArchive {
        kind: ArchiveKind,
        year: i32,
        month: u32,
    },
    #[error("No {kind} archive found for timestamp {timestamp}")]
    NoArchiveAt { kind: ArchiveKind, timestamp: f64 },
    #[error("Archive is empty")]
    EmptyArchive,
    #[error("No levels found for {year}/{month}")]
    NoLevels { year: i32, month: u32 },
    #[error("No quests found for {year}/{month}/{day}")]
    NoQuests { year: i32, month: u32, day: u32 },
    #[error("No {name} found")]
    MissingSource { name: &'static str },
    #[error("Query parameter {name} is required")]
    MissingQuery { name: &'static str },
    #[error("Player {uuid} not found")]
    PlayerNotFound { uuid: String },
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("request worker failed: {0}")]
    Internal(String),
}

impl RequestError {
    pub fn status(&self) -> Status {
        match self {
            Self::MissingQuery { .. } => Status::UnprocessableEntity,
            Self::Data(_) | Self::Internal(_) => Status::InternalServerError,
            _ => Status::NotFound,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
struct ErrorDetail {
    detail: String,
}

impl<'r> Responder<'r, 'static> for RequestError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        let detail = if status == Status::InternalServerError {
            log::error!("{} {}: {}", request.method(), request.uri(), self);
            status.reason_lossy().to_owned()
        } else {
            self.to_string()
        };
        (status, Json(ErrorDetail { detail })).respond_to(request)
    }
}

pub type RequestResult<T, E = RequestError> = std::result::Result<T, E>;

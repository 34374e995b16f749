use std::io;

use rocket::fs::NamedFile;
use rocket::http::Header;
use rocket::Responder;

use crate::storage::DataError;

use super::*;

/// A raw CSV file served as an attachment.
#[derive(Responder)]
#[response(content_type = "text/csv")]
pub struct CsvDownload {
    file: NamedFile,
    disposition: Header<'static>,
}

impl CsvDownload {
    fn new(file: NamedFile, file_name: &str) -> Self {
        Self {
            file,
            disposition: Header::new(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", file_name),
            ),
        }
    }
}

/// Serves the account table unparsed.
#[get("/data/get_players")]
pub async fn get_players_csv(storage: &State<Storage>) -> RequestResult<CsvDownload> {
    let path = storage.account_data();
    match NamedFile::open(&path).await {
        Ok(file) => Ok(CsvDownload::new(file, "players.csv")),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(RequestError::MissingSource {
            name: "account data",
        }),
        Err(source) => Err(DataError::Io { path, source }.into()),
    }
}

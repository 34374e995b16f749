use std::path::{Path, PathBuf};

use rocket::serde::{de::DeserializeOwned, json::Value};

use super::{decode_json, read_json, DataResult};
use crate::records::ArchiveEntry;

/// The snapshots of a JSON archive file. Payloads stay raw until one is
/// selected, so a malformed snapshot only fails requests that serve it.
#[derive(Clone, Debug)]
pub struct ArchiveFile<E = ArchiveEntry<Value>> {
    path: PathBuf,
    pub entries: Vec<E>,
}

impl<E: DeserializeOwned> ArchiveFile<E> {
    pub fn read(path: &Path) -> DataResult<Option<Self>> {
        Ok(read_json(path)?.map(|entries| Self {
            path: path.to_owned(),
            entries,
        }))
    }
}

impl<E> ArchiveFile<E> {
    pub fn decode<T: DeserializeOwned>(&self, value: &Value) -> DataResult<T> {
        decode_json(&self.path, value)
    }
}

impl ArchiveFile {
    /// Decodes the payload of one snapshot of this file.
    pub fn decode_entry<T: DeserializeOwned>(
        &self,
        entry: &ArchiveEntry<Value>,
    ) -> DataResult<ArchiveEntry<T>> {
        Ok(ArchiveEntry {
            timestamp: entry.timestamp,
            data: self.decode(&entry.data)?,
        })
    }
}

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use rocket::serde::json::{serde_json, Value};
use rocket::serde::{de::DeserializeOwned, Deserialize};

use super::{DataError, DataResult};

/// Opens `path`, treating a missing file as `None`.
fn open(path: &Path) -> DataResult<Option<File>> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(DataError::Io {
            path: path.to_owned(),
            source,
        }),
    }
}

/// Lazily deserialized rows of a CSV file.
/// Columns are matched by header name.
pub struct CsvRows<T> {
    path: PathBuf,
    rows: csv::DeserializeRecordsIntoIter<File, T>,
}

impl<T: DeserializeOwned> Iterator for CsvRows<T> {
    type Item = DataResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(row.map_err(|source| DataError::MalformedCsv {
            path: self.path.clone(),
            source,
        }))
    }
}

pub fn read_csv<T: DeserializeOwned>(path: &Path) -> DataResult<Option<CsvRows<T>>> {
    let file = match open(path)? {
        Some(file) => file,
        None => return Ok(None),
    };
    let rows = csv::Reader::from_reader(file).into_deserialize();
    Ok(Some(CsvRows {
        path: path.to_owned(),
        rows,
    }))
}

/// Reads every row of a CSV file, failing on the first malformed one.
pub fn collect_csv<T: DeserializeOwned>(path: &Path) -> DataResult<Option<Vec<T>>> {
    read_csv(path)?
        .map(|rows| rows.collect::<DataResult<Vec<T>>>())
        .transpose()
}

/// Reads those rows of a CSV file whose `column` passes `keep`. Other rows are
/// never deserialized. Without such a column every row is.
pub fn collect_csv_where<T, F>(path: &Path, column: &str, keep: F) -> DataResult<Option<Vec<T>>>
where
    T: DeserializeOwned,
    F: Fn(&str) -> bool,
{
    let file = match open(path)? {
        Some(file) => file,
        None => return Ok(None),
    };
    let malformed = |source: csv::Error| DataError::MalformedCsv {
        path: path.to_owned(),
        source,
    };

    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers().map_err(malformed)?.clone();
    let index = headers.iter().position(|header| header == column);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(malformed)?;
        let wanted = match index {
            Some(index) => record.get(index).map_or(false, |value| keep(value)),
            None => true,
        };
        if wanted {
            rows.push(record.deserialize::<T>(Some(&headers)).map_err(malformed)?);
        }
    }
    Ok(Some(rows))
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> DataResult<Option<T>> {
    let file = match open(path)? {
        Some(file) => file,
        None => return Ok(None),
    };
    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|source| DataError::MalformedJson {
            path: path.to_owned(),
            source,
        })
}

/// Decodes part of a JSON document already read from `path`.
pub fn decode_json<T: DeserializeOwned>(path: &Path, value: &Value) -> DataResult<T> {
    T::deserialize(value).map_err(|source| DataError::MalformedJson {
        path: path.to_owned(),
        source,
    })
}

/// Reads the trimmed, non-blank lines of a text file.
pub fn read_lines(path: &Path) -> DataResult<Option<Vec<String>>> {
    let mut file = match open(path)? {
        Some(file) => file,
        None => return Ok(None),
    };
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| DataError::Io {
            path: path.to_owned(),
            source,
        })?;

    let lines = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    Ok(Some(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    #[serde(crate = "rocket::serde")]
    struct Row {
        name: String,
        score: i64,
    }

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_files_are_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        assert!(read_csv::<Row>(&path).unwrap().is_none());
        assert!(read_json::<Vec<i64>>(&path).unwrap().is_none());
        assert!(read_lines(&path).unwrap().is_none());
    }

    #[test]
    fn csv_columns_are_matched_by_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "rows.csv", "score,extra,name\n10,x,a\n20,y,b\n");
        let rows = collect_csv::<Row>(&path).unwrap().unwrap();
        assert_eq!(
            rows,
            vec![
                Row { name: "a".to_owned(), score: 10 },
                Row { name: "b".to_owned(), score: 20 },
            ]
        );
    }

    #[test]
    fn malformed_row_fails_the_whole_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "rows.csv", "name,score\na,10\nb,ten\nc,30\n");
        let err = collect_csv::<Row>(&path).unwrap_err();
        assert!(matches!(err, DataError::MalformedCsv { .. }));
    }

    #[test]
    fn rows_are_read_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "rows.csv", "name,score\na,10\nb,ten\n");
        let mut rows = read_csv::<Row>(&path).unwrap().unwrap();
        assert_eq!(rows.next().unwrap().unwrap().name, "a");
        assert!(rows.next().unwrap().is_err());
    }

    #[test]
    fn unwanted_rows_are_not_deserialized() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "rows.csv", "name,score\na,10\nb,ten\nc,30\n");
        let rows = collect_csv_where::<Row, _>(&path, "name", |name| name != "b")
            .unwrap()
            .unwrap();
        let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);

        let err = collect_csv_where::<Row, _>(&path, "name", |_| true).unwrap_err();
        assert!(matches!(err, DataError::MalformedCsv { .. }));
    }

    #[test]
    fn rows_are_all_read_without_the_filter_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "rows.csv", "name,score\na,10\n");
        let rows = collect_csv_where::<Row, _>(&path, "owner", |_| false)
            .unwrap()
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn decode_errors_carry_the_path() {
        let path = PathBuf::from("archive.json");
        let err = decode_json::<Vec<i64>>(&path, &Value::from("n/a")).unwrap_err();
        match err {
            DataError::MalformedJson { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn lines_are_trimmed_and_blank_lines_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "levels.txt", "  l1 \n\n\nl2\n   \n");
        assert_eq!(read_lines(&path).unwrap().unwrap(), vec!["l1", "l2"]);
    }
}

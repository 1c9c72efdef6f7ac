use crate::common::records;
use std::fs;
use ticker_snapshot::error::AppError;
use ticker_snapshot::presentation::instrument::INSTRUMENT_FIELDS;
use ticker_snapshot::storage::snapshot::{write_records, write_snapshot};

fn read_back(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}

#[test]
fn round_trip_has_header_and_one_row_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickers.csv");

    let written = write_snapshot(&records(25, "2025-09-11"), &path).unwrap();
    let (header, rows) = read_back(&path);

    assert_eq!(written, 25);
    assert_eq!(header, INSTRUMENT_FIELDS.to_vec());
    assert_eq!(rows.len(), 25);
    assert_eq!(rows[0][0], "T00000");
    assert!(rows.iter().all(|row| row[12] == "2025-09-11"));

    let raw = fs::read_to_string(&path).unwrap();
    assert_eq!(raw.lines().count(), 26);
}

#[test]
fn empty_snapshot_still_has_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickers.csv");

    write_snapshot(&[], &path).unwrap();
    let raw = fs::read_to_string(&path).unwrap();

    assert_eq!(raw.lines().collect::<Vec<_>>(), vec![INSTRUMENT_FIELDS.join(",")]);
}

#[test]
fn existing_file_is_replaced_not_appended() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickers.csv");

    write_snapshot(&records(10, "2025-09-10"), &path).unwrap();
    write_snapshot(&records(2, "2025-09-11"), &path).unwrap();
    let (_, rows) = read_back(&path);

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row[12] == "2025-09-11"));
}

#[test]
fn fields_with_commas_and_quotes_are_escaped() {
    let mut recs = records(1, "2025-09-11");
    recs[0].name = "Berkshire Hathaway, Inc. \"Class A\"".to_string();

    let mut buffer = Vec::new();
    write_records(&recs, &mut buffer).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[1], "Berkshire Hathaway, Inc. \"Class A\"");
}

#[test]
fn active_none_is_written_as_empty_cell() {
    let mut recs = records(1, "2025-09-11");
    recs[0].active = None;

    let mut buffer = Vec::new();
    write_records(&recs, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let row = text.lines().nth(1).unwrap();

    assert_eq!(row.split(',').nth(6), Some(""));
}

#[test]
fn unwritable_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("tickers.csv");

    let result = write_snapshot(&records(1, "2025-09-11"), &path);
    assert!(matches!(result, Err(AppError::Io(_))));
}

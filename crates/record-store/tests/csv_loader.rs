//! Integration tests for the CSV record loader against files on disk.

use std::io::Write;

use record_store::{CsvRecordLoader, LoadError, RawSaleRecord, RecordLoader};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_load_reads_all_rows() {
    let file = write_csv(
        "date,department,software,seats,amount\n\
         2023-01-05,Sales,X,3,30\n\
         2023-01-10 14:30:00,Sales,Y,2,20\n\
         2023-02-01,Engineering,X,5,50\n",
    );
    let loader = CsvRecordLoader::new(file.path());

    let records = loader.load().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0], RawSaleRecord::new("2023-01-05", "Sales", "X", "3", "30"));
    assert_eq!(records[1].date.as_deref(), Some("2023-01-10 14:30:00"));
    assert_eq!(records[2].department.as_deref(), Some("Engineering"));
}

#[tokio::test]
async fn test_load_rereads_file_on_every_call() {
    let mut file = write_csv("date,department,software,seats,amount\n2023-01-05,Sales,X,3,30\n");
    let loader = CsvRecordLoader::new(file.path());
    assert_eq!(loader.load().await.unwrap().len(), 1);

    file.write_all(b"2023-01-06,Sales,Y,1,10\n").unwrap();
    file.flush().unwrap();

    assert_eq!(loader.load().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    let loader = CsvRecordLoader::new(&path);

    let err = loader.load().await.unwrap_err();

    match err {
        LoadError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_load_malformed_row_is_malformed_error() {
    let file = write_csv("date,department,software,seats,amount\n2023-01-05,Sales\n");
    let loader = CsvRecordLoader::new(file.path());

    let err = loader.load().await.unwrap_err();

    assert!(matches!(err, LoadError::Malformed(_)));
}

// Unit tests for corpus loading.
//
// Exercises the file-backed LabelSource end to end against temp files, and
// the in-memory source used for composition. No network calls.

use std::io::Write;

use namesake::corpus::traits::StaticSource;
use namesake::corpus::{CsvFileSource, CsvOptions, LabelSource};

fn write_fixture(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn file_source_reads_first_column_after_header() {
    let file = write_fixture(b"developer_name\nJohn Smith\nJOHN SMITH\n\"Smith, John\"\n");
    let source = CsvFileSource::new(file.path(), CsvOptions::default());
    let labels = source.load().await.unwrap();
    assert_eq!(labels, vec!["John Smith", "JOHN SMITH", "Smith, John"]);
}

#[tokio::test]
async fn file_source_unquoted_comma_splits_fields() {
    // Without quotes the comma is a delimiter, so column 0 holds only "Smith"
    let file = write_fixture(b"developer_name\nSmith, John\n");
    let labels = CsvFileSource::new(file.path(), CsvOptions::default())
        .load()
        .await
        .unwrap();
    assert_eq!(labels, vec!["Smith"]);
}

#[tokio::test]
async fn file_source_blank_row_is_error() {
    let file = write_fixture(b"name\nAnn\n\nBob\n");
    let err = CsvFileSource::new(file.path(), CsvOptions::default())
        .load()
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("Missing label on line 3"), "{err:#}");
}

#[tokio::test]
async fn file_source_selects_configured_column() {
    let file = write_fixture(b"lot_id,description\nL1,Pad Open\nL2,pad-open\n");
    let options = CsvOptions {
        column: 1,
        ..Default::default()
    };
    let labels = CsvFileSource::new(file.path(), options).load().await.unwrap();
    assert_eq!(labels, vec!["Pad Open", "pad-open"]);
}

#[tokio::test]
async fn file_source_decodes_legacy_thai() {
    // "ก" is 0xA1 in windows-874
    let file = write_fixture(b"name\n\xA1\n");
    let options = CsvOptions {
        encoding: CsvOptions::encoding_for_label("windows-874").unwrap(),
        ..Default::default()
    };
    let labels = CsvFileSource::new(file.path(), options).load().await.unwrap();
    assert_eq!(labels, vec!["ก"]);
}

#[tokio::test]
async fn file_source_missing_file_is_error() {
    let source = CsvFileSource::new("/nonexistent/namesake/corpus.csv", CsvOptions::default());
    let err = source.load().await.unwrap_err();
    assert!(format!("{err:#}").contains("corpus.csv"));
}

#[tokio::test]
async fn file_source_short_row_is_error_not_blank_label() {
    let file = write_fixture(b"id,name\n1,Ann\n2\n");
    let options = CsvOptions {
        column: 1,
        ..Default::default()
    };
    let result = CsvFileSource::new(file.path(), options).load().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn file_source_describe_names_path() {
    let file = write_fixture(b"name\n");
    let source = CsvFileSource::new(file.path(), CsvOptions::default());
    assert_eq!(source.describe(), file.path().display().to_string());
    assert!(source.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn static_source_returns_labels_in_order() {
    let source = StaticSource::new(["b", "a", "c"]);
    assert_eq!(source.load().await.unwrap(), vec!["b", "a", "c"]);
    assert_eq!(source.describe(), "3 in-memory labels");
}

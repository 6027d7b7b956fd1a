// Tests for answer file writing

use std::fs;
use wikisite_core::error::HarvestError;
use wikisite_core::output::{DEFAULT_OUTPUT_FILE, OutputRecord, pair_records, write_answers};

fn urls(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Pairing Tests
// ============================================================================

#[test]
fn test_pair_records_by_position() {
    let pages = urls(&["https://en.wikipedia.org/wiki/A", "https://en.wikipedia.org/wiki/B"]);
    let websites = urls(&["https://a.example", ""]);

    let records = pair_records(&pages, &websites).unwrap();

    assert_eq!(
        records,
        vec![
            OutputRecord {
                wikipedia_page: "https://en.wikipedia.org/wiki/A".to_string(),
                website: "https://a.example".to_string(),
            },
            OutputRecord {
                wikipedia_page: "https://en.wikipedia.org/wiki/B".to_string(),
                website: String::new(),
            },
        ]
    );
}

#[test]
fn test_pair_records_length_mismatch() {
    let pages = urls(&["https://en.wikipedia.org/wiki/A", "https://en.wikipedia.org/wiki/B"]);
    let websites = urls(&["https://a.example"]);

    let err = pair_records(&pages, &websites).unwrap_err();

    assert!(matches!(
        err,
        HarvestError::LengthMismatch {
            urls: 2,
            websites: 1
        }
    ));
}

// ============================================================================
// Writer Tests
// ============================================================================

#[test]
fn test_default_output_file_name() {
    assert_eq!(DEFAULT_OUTPUT_FILE, "wikipedia_answers.csv");
}

#[test]
fn test_write_answers_all_fields_quoted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_OUTPUT_FILE);
    let records = pair_records(
        &urls(&[
            "https://en.wikipedia.org/wiki/Acme",
            "https://en.wikipedia.org/wiki/Nonexistent_Company_Xyz",
        ]),
        &urls(&["http://acme.example.com", ""]),
    )
    .unwrap();

    write_answers(&path, &records).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "\"wikipedia_page\",\"website\"\r\n\
         \"https://en.wikipedia.org/wiki/Acme\",\"http://acme.example.com\"\r\n\
         \"https://en.wikipedia.org/wiki/Nonexistent_Company_Xyz\",\"\"\r\n"
    );
}

#[test]
fn test_write_answers_empty_has_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.csv");

    write_answers(&path, &[]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "\"wikipedia_page\",\"website\"\r\n");
}

#[test]
fn test_write_answers_escapes_quotes_and_commas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.csv");
    let records = vec![OutputRecord {
        wikipedia_page: "https://en.wikipedia.org/wiki/A,B".to_string(),
        website: "https://q.example/?\"x\"".to_string(),
    }];

    write_answers(&path, &records).unwrap();

    let mut reader = csv::ReaderBuilder::new().from_path(&path).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "https://en.wikipedia.org/wiki/A,B");
    assert_eq!(&rows[0][1], "https://q.example/?\"x\"");
}

#[test]
fn test_write_answers_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.csv");
    fs::write(&path, "stale content that should disappear\n").unwrap();

    write_answers(&path, &[]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale"));
}

#[test]
fn test_write_then_read_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.csv");
    let pages: Vec<String> = (0..25)
        .map(|i| format!("https://en.wikipedia.org/wiki/Company_{}", i))
        .collect();
    let websites: Vec<String> = (0..25)
        .map(|i| if i % 3 == 0 { String::new() } else { format!("https://c{}.example", i) })
        .collect();

    write_answers(&path, &pair_records(&pages, &websites).unwrap()).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, vec!["wikipedia_page", "website"]);

    let read_back: Vec<String> = reader
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    assert_eq!(read_back, pages);
}

#[test]
fn test_write_answers_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("answers.csv");

    let err = write_answers(&path, &[]).unwrap_err();

    assert!(matches!(err, HarvestError::OutputCreate { .. }));
}

use std::io::Write;
use std::time::Duration;

use forest_cover::data::{init_dataset_channel, load_dataset, DataError};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_dataset_from_disk() {
    let file = write_temp(
        r#"[{ "iso": "SWE", "country": "Sweden", "basic": 21000,
              "2000-2005 umd_tree_cover_gain__ha": 3000,
              "2000-2005_cover_loss": 2000 }]"#,
    );

    let dataset = load_dataset(file.path()).unwrap();

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records[0].baseline_trees(), 21);
    assert_eq!(dataset.position_of("SWE"), Some(0));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_dataset(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DataError::Read { .. }));
}

#[test]
fn loader_thread_delivers_result_once() {
    let file = write_temp(r#"[{ "iso": "CAN", "country": "Canada", "basic": 38000 }]"#);

    let channel = init_dataset_channel(file.path().to_path_buf());
    let dataset = channel
        .0
        .recv_timeout(RECV_TIMEOUT)
        .expect("loader should answer")
        .expect("dataset should parse");

    assert_eq!(dataset.records[0].country, "Canada");
    assert!(channel.0.recv_timeout(Duration::from_millis(100)).is_err());
}

#[test]
fn loader_thread_reports_failures() {
    let file = write_temp("{ not json");

    let channel = init_dataset_channel(file.path().to_path_buf());
    let result = channel.0.recv_timeout(RECV_TIMEOUT).expect("loader should answer");

    assert!(matches!(result, Err(DataError::Json(_))));
}

#[test]
fn bundled_dataset_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets/forest_cover.json");
    let dataset = load_dataset(&path).unwrap();
    assert!(!dataset.is_empty());
    for record in &dataset.records {
        assert_eq!(record.changes.len(), 4, "{} should cover 2000-2020", record.iso);
    }
}

//! Filesystem tests for `ArchiveStore`, each in its own temp directory.

use std::fs;

use thainews_archive::{ArchiveError, ArchiveStore};
use thainews_core::{NormalizedEntry, Snapshot};

fn sample_snapshot() -> Snapshot {
    Snapshot {
        timestamp: "2026-10-19 09:30:00".to_string(),
        entries: vec![
            NormalizedEntry {
                title: "Thai PCB exports climb".to_string(),
                link: "https://example.com/pcb".to_string(),
                date: "Mon, 19 Oct 2026 01:00:00 GMT".to_string(),
                source: "Bangkok Post".to_string(),
                category: "Thailand PCB & Electronics Manufacturing".to_string(),
            },
            NormalizedEntry {
                title: "泰國央行維持利率".to_string(),
                link: "https://example.com/rate".to_string(),
                date: String::new(),
                source: "Google News".to_string(),
                category: "Thailand General News".to_string(),
            },
        ],
    }
}

#[test]
fn load_returns_none_when_no_snapshot_exists() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArchiveStore::new(dir.path().join("news_data.json"));
    let loaded = store.load().expect("missing file is not an error");
    assert!(loaded.is_none());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArchiveStore::new(dir.path().join("news_data.json"));
    let snapshot = sample_snapshot();

    store.save(&snapshot).expect("save should succeed");
    let loaded = store.load().expect("load should succeed");

    assert_eq!(loaded, Some(snapshot));
}

#[test]
fn save_overwrites_previous_snapshot_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArchiveStore::new(dir.path().join("news_data.json"));
    store.save(&sample_snapshot()).unwrap();

    let replacement = Snapshot {
        timestamp: "2026-10-20 07:00:00".to_string(),
        entries: Vec::new(),
    };
    store.save(&replacement).unwrap();

    assert_eq!(store.load().unwrap(), Some(replacement));
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArchiveStore::new(dir.path().join("news_data.json"));
    store.save(&sample_snapshot()).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["news_data.json"]);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArchiveStore::new(dir.path().join("state/thainews/news_data.json"));
    store.save(&sample_snapshot()).unwrap();
    assert!(store.path().exists());
}

#[test]
fn saved_file_is_readable_utf8_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArchiveStore::new(dir.path().join("news_data.json"));
    store.save(&sample_snapshot()).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("泰國央行維持利率"), "non-ASCII should be stored verbatim");
    assert!(raw.find("\"timestamp\"").unwrap() < raw.find("\"entries\"").unwrap());
}

#[test]
fn load_reports_corrupt_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("news_data.json");
    fs::write(&path, "{\"timestamp\": \"2026-10-19\", \"entries\": [").unwrap();

    let result = ArchiveStore::new(&path).load();
    assert!(
        matches!(result, Err(ArchiveError::Corrupt { .. })),
        "expected Corrupt, got: {result:?}"
    );
}

#[test]
fn load_accepts_legacy_news_list_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("news_data.json");
    fs::write(
        &path,
        r#"{"timestamp": "2025-12-01 10:00:00", "news_list": [
            {"title": "Old", "link": "https://example.com/old", "date": "", "source": "Reuters"}
        ]}"#,
    )
    .unwrap();

    let snapshot = ArchiveStore::new(&path).load().unwrap().unwrap();
    assert_eq!(snapshot.entries.len(), 1);
    assert_eq!(snapshot.entries[0].source, "Reuters");
}

#[test]
fn save_into_a_directory_path_fails_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("occupied");
    fs::create_dir(&target).unwrap();

    let result = ArchiveStore::new(&target).save(&sample_snapshot());
    assert!(
        matches!(result, Err(ArchiveError::Io { .. })),
        "expected Io error, got: {result:?}"
    );
}

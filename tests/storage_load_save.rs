use school_helper::model::{HomeworkItem, SchoolData, SchoolDay};
use school_helper::{LoadStatus, LocalStorage};
use std::fs;
use tempfile::tempdir;

fn sample_data() -> SchoolData {
    let mut data = SchoolData::default();
    data.set_schedule(
        SchoolDay::Monday,
        vec!["Математика".into(), "Физика".into()],
    )
    .unwrap();
    data.add_homework("Math", "Page 42").unwrap();
    data
}

#[test]
fn test_missing_file_yields_empty_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("school_helper_data.json");

    let (data, status) = LocalStorage::load(&path).unwrap();

    assert_eq!(status, LoadStatus::Missing);
    assert!(data.schedule.is_empty());
    assert!(data.homework.is_empty());
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("school_helper_data.json");
    fs::write(&path, "this is { not json").unwrap();

    let (data, status) = LocalStorage::load(&path).unwrap();

    assert_eq!(status, LoadStatus::Corrupt);
    assert_eq!(data, SchoolData::default());
    // The broken file itself is left alone until the next save.
    assert_eq!(fs::read_to_string(&path).unwrap(), "this is { not json");
}

#[test]
fn test_save_then_load_keeps_schedule_and_homework() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("school_helper_data.json");
    let data = sample_data();

    LocalStorage::save(&path, &data).unwrap();
    let (loaded, status) = LocalStorage::load(&path).unwrap();

    assert_eq!(status, LoadStatus::Loaded);
    assert_eq!(loaded, data);
    assert!(!dir.path().join("school_helper_data.tmp").exists());
}

#[test]
fn test_saved_file_is_indented_utf8_with_both_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    LocalStorage::save(&path, &sample_data()).unwrap();
    let raw = fs::read_to_string(&path).unwrap();

    assert!(raw.contains("\n    \"schedule\""));
    assert!(raw.contains("\"Понедельник\""));
    assert!(raw.contains("\"Математика\""));
    assert!(raw.contains("\"completed\": false"));

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.get("schedule").unwrap().is_object());
    assert!(value.get("homework").unwrap().is_array());
}

#[test]
fn test_partial_document_fills_missing_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"{"homework": [{"subject": "Art", "task": "Sketch"}]}"#,
    )
    .unwrap();

    let (data, status) = LocalStorage::load(&path).unwrap();

    assert_eq!(status, LoadStatus::Loaded);
    assert!(data.schedule.is_empty());
    assert_eq!(data.homework, vec![HomeworkItem::new("Art", "Sketch")]);
}

#[test]
fn test_save_overwrites_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    LocalStorage::save(&path, &sample_data()).unwrap();

    LocalStorage::save(&path, &SchoolData::default()).unwrap();
    let (loaded, _) = LocalStorage::load(&path).unwrap();

    assert_eq!(loaded, SchoolData::default());
}

#[test]
fn test_non_utf8_file_is_treated_as_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("school_helper_data.json");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

    let (data, status) = LocalStorage::load(&path).unwrap();

    assert_eq!(status, LoadStatus::Corrupt);
    assert_eq!(data, SchoolData::default());
}

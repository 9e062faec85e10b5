use school_helper::config::{Config, ParentVisibility};
use std::path::PathBuf;

#[test]
fn test_defaults_match_first_run_behaviour() {
    let config = Config::default();
    assert_eq!(config.data_file, PathBuf::from("school_helper_data.json"));
    assert_eq!(config.reminder_days, 3);
    assert_eq!(config.parent_visibility, ParentVisibility::RequireSubject);
    assert_eq!(config.parent_gate_subject, "Math");
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let config = Config::from_toml(
        r#"
reminder_days = 7
parent_visibility = "any_subject"
"#,
    )
    .unwrap();

    assert_eq!(config.reminder_days, 7);
    assert_eq!(config.parent_visibility, ParentVisibility::AnySubject);
    assert_eq!(config.data_file, PathBuf::from("school_helper_data.json"));
}

#[test]
fn test_unknown_visibility_is_an_error() {
    assert!(Config::from_toml(r#"parent_visibility = "everyone""#).is_err());
}

#[test]
fn test_huge_reminder_window_is_accepted() {
    let config = Config::from_toml("reminder_days = 9223372036854775807").unwrap();
    assert_eq!(config.reminder_days, i64::MAX);
}

use farmsheets::config::Config;
use std::path::PathBuf;

#[test]
fn relative_db_lives_in_config_dir() {
    assert_eq!(
        Config::resolve_db_path("farm.sqlite"),
        Config::config_dir().join("farm.sqlite")
    );
    assert_eq!(
        Config::resolve_db_path("data/farm.sqlite"),
        Config::config_dir().join("data").join("farm.sqlite")
    );
}

#[test]
fn absolute_and_memory_db_are_kept() {
    let abs = std::env::temp_dir().join("farm.sqlite");
    assert_eq!(Config::resolve_db_path(&abs.to_string_lossy()), abs);
    assert_eq!(Config::resolve_db_path(":memory:"), PathBuf::from(":memory:"));
}

#[test]
fn defaults_when_file_is_missing() {
    let cfg = Config::load_from(&std::env::temp_dir().join("farmsheets_no_such.conf")).unwrap();
    assert_eq!(cfg.page_size, 10);
    assert_eq!(cfg.report_file, "timesheets_report.csv");
    assert!(cfg.current_user.is_none());
}

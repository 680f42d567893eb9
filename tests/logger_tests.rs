//! Integration tests for logger behavior.

use gpa_advisor::logger::{current_level, init_file_logging, set_level, set_level_from_str, Level};
use gpa_advisor::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    assert_eq!(current_level(), Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_creates_parent_dirs() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("logs").join("run.log");
    assert!(init_file_logging(&path));
    error!("written to file");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("written to file"));
}

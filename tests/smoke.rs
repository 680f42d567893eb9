//! Integration smoke tests for `gpa_advisor`

use gpa_advisor::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
